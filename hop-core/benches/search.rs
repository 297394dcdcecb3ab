//! Benchmark for shortest-path search with both frontier strategies.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hop_core::{compute_shortest_path_with, Edge, Frontier};

/// Square grid with deterministic, mildly varied weights.
fn grid_edges(side: usize) -> Vec<Edge> {
    let id = |row: usize, col: usize| format!("n{}_{}", row, col);
    let mut edges = Vec::with_capacity(side * side * 2);

    for row in 0..side {
        for col in 0..side {
            let weight = ((row * 7 + col * 13) % 5 + 1) as f64;
            if col + 1 < side {
                edges.push(Edge::new(id(row, col), id(row, col + 1), weight));
            }
            if row + 1 < side {
                edges.push(Edge::new(id(row, col), id(row + 1, col), weight + 0.5));
            }
        }
    }
    edges
}

fn bench_frontiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");

    for side in [5usize, 15, 30] {
        let edges = grid_edges(side);
        let end = format!("n{}_{}", side - 1, side - 1);

        for frontier in [Frontier::LinearScan, Frontier::BinaryHeap] {
            group.bench_with_input(
                BenchmarkId::new(frontier.to_string(), side * side),
                &edges,
                |b, edges| {
                    b.iter(|| {
                        black_box(compute_shortest_path_with(
                            black_box(edges),
                            "n0_0",
                            &end,
                            frontier,
                        ))
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_frontiers);
criterion_main!(benches);
