//! Single-source, single-target Dijkstra search.
//!
//! Two frontier strategies are available and produce identical results:
//!
//! - [`Frontier::LinearScan`] scans every unsettled node to pick the closest
//!   one: O(V²), no allocation beyond the per-node tables. This is the
//!   default and is fine for the small hand-edited graphs it serves.
//! - [`Frontier::BinaryHeap`] keeps a lazy-deletion min-heap keyed by
//!   `(distance, node index)`: O((V + E) log V).
//!
//! Ties between equally distant nodes go to the node that appeared first in
//! the edge list, for both strategies.

use crate::graph::WeightedGraph;
use crate::types::ShortestPath;
use petgraph::graph::NodeIndex;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;
use std::str::FromStr;

/// Strategy used to pick the next node to settle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Frontier {
    /// Linear scan over the unsettled set
    #[default]
    LinearScan,
    /// Binary min-heap with lazy deletion
    BinaryHeap,
}

impl FromStr for Frontier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" | "linear-scan" | "scan" => Ok(Frontier::LinearScan),
            "heap" | "binary-heap" => Ok(Frontier::BinaryHeap),
            _ => Err(format!(
                "Unknown frontier: '{}' (expected 'linear' or 'heap')",
                s
            )),
        }
    }
}

impl fmt::Display for Frontier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frontier::LinearScan => write!(f, "linear"),
            Frontier::BinaryHeap => write!(f, "heap"),
        }
    }
}

impl WeightedGraph {
    /// Find one minimum-weight path between two nodes.
    ///
    /// Returns `None` when either node never appeared in the edge list, or
    /// when `end` cannot be reached from `start`. The existence check runs
    /// before the `start == end` shortcut, so an unknown node never matches
    /// itself.
    pub fn shortest_path(&self, start: &str, end: &str, frontier: Frontier) -> Option<ShortestPath> {
        let start_idx = self.index_of(start)?;
        let end_idx = self.index_of(end)?;

        if start_idx == end_idx {
            return Some(ShortestPath {
                path: vec![start.to_string()],
                distance: 0.0,
            });
        }

        let mut search = Search::new(self, start_idx);
        match frontier {
            Frontier::LinearScan => search.run_linear(end_idx),
            Frontier::BinaryHeap => search.run_heap(start_idx, end_idx),
        }

        let result = search.into_path(end_idx);
        tracing::debug!(
            "{} search {} -> {}: {}",
            frontier,
            start,
            end,
            match &result {
                Some(found) => format!("distance {} over {} hops", found.distance, found.hops()),
                None => "unreachable".to_string(),
            }
        );
        result
    }
}

/// Per-call search tables, indexed by `NodeIndex::index()`.
struct Search<'g> {
    graph: &'g WeightedGraph,
    distance: Vec<f64>,
    predecessor: Vec<Option<NodeIndex>>,
    unsettled: Vec<bool>,
    remaining: usize,
}

impl<'g> Search<'g> {
    fn new(graph: &'g WeightedGraph, start: NodeIndex) -> Self {
        let n = graph.node_count();
        let mut distance = vec![f64::INFINITY; n];
        distance[start.index()] = 0.0;

        Self {
            graph,
            distance,
            predecessor: vec![None; n],
            unsettled: vec![true; n],
            remaining: n,
        }
    }

    fn run_linear(&mut self, end: NodeIndex) {
        while self.remaining > 0 {
            let Some(u) = self.closest_unsettled() else {
                break;
            };
            if self.distance[u.index()] == f64::INFINITY {
                break;
            }
            if u == end {
                break;
            }
            self.settle(u);
            self.relax(u, |_, _| {});
        }
    }

    fn run_heap(&mut self, start: NodeIndex, end: NodeIndex) {
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(Candidate {
            distance: 0.0,
            node: start,
        }));

        while let Some(Reverse(Candidate { distance, node })) = heap.pop() {
            // Stale entry: already settled, or superseded by a shorter distance
            if !self.unsettled[node.index()] || distance > self.distance[node.index()] {
                continue;
            }
            if distance == f64::INFINITY {
                break;
            }
            if node == end {
                break;
            }
            self.settle(node);
            self.relax(node, |v, alt| {
                heap.push(Reverse(Candidate {
                    distance: alt,
                    node: v,
                }))
            });
        }
    }

    /// First unsettled node with the smallest distance, in node order.
    fn closest_unsettled(&self) -> Option<NodeIndex> {
        let mut best: Option<usize> = None;
        for (i, open) in self.unsettled.iter().enumerate() {
            if !open {
                continue;
            }
            let closer = match best {
                None => true,
                Some(b) => self.distance[i] < self.distance[b],
            };
            if closer {
                best = Some(i);
            }
        }
        best.map(NodeIndex::new)
    }

    fn settle(&mut self, u: NodeIndex) {
        self.unsettled[u.index()] = false;
        self.remaining -= 1;
    }

    /// Relax every edge from `u` to a still-unsettled neighbor.
    ///
    /// Only strict improvements overwrite a predecessor.
    fn relax(&mut self, u: NodeIndex, mut on_improve: impl FnMut(NodeIndex, f64)) {
        let graph = self.graph;
        let base = self.distance[u.index()];

        for (v, weight) in graph.incident(u) {
            if !self.unsettled[v.index()] {
                continue;
            }
            let alt = base + weight;
            if alt < self.distance[v.index()] {
                self.distance[v.index()] = alt;
                self.predecessor[v.index()] = Some(u);
                on_improve(v, alt);
            }
        }
    }

    /// Walk predecessor links back from `end`.
    fn into_path(self, end: NodeIndex) -> Option<ShortestPath> {
        if self.predecessor[end.index()].is_none() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = Some(end);
        while let Some(node) = current {
            path.push(self.graph.name(node).to_string());
            current = self.predecessor[node.index()];
        }
        path.reverse();

        let distance = self.distance[end.index()];
        if distance.is_infinite() || path.is_empty() {
            return None;
        }

        Some(ShortestPath { path, distance })
    }
}

/// Heap entry ordered by distance, then by node order.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    distance: f64,
    node: NodeIndex,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.node.index().cmp(&other.node.index()))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}
