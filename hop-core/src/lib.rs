//! HOP Core - Weighted shortest paths over user-edited graphs.
//!
//! Given a list of undirected weighted edges and two node IDs, this crate
//! finds one lowest-total-weight path between them, or reports that there
//! is none. Every call builds its own graph and search tables and throws
//! them away afterwards; nothing is shared between calls.
//!
//! # Usage
//!
//! ```
//! use hop_core::{compute_shortest_path, Edge};
//!
//! let edges = vec![
//!     Edge::new("A", "B", 1.0),
//!     Edge::new("B", "C", 1.0),
//!     Edge::new("A", "C", 5.0),
//! ];
//!
//! let found = compute_shortest_path(&edges, "A", "C").unwrap();
//! assert_eq!(found.path, vec!["A", "B", "C"]);
//! assert_eq!(found.distance, 2.0);
//!
//! assert!(compute_shortest_path(&edges, "A", "Z").is_none());
//! ```
//!
//! # Weights
//!
//! Weights are used as given. Negative weights are accepted but may produce
//! a non-minimal answer; use [`try_compute_shortest_path`] (or
//! [`validate_edges`]) to reject them up front.

pub mod error;
pub mod graph;
#[cfg(feature = "python")]
mod python;
pub mod search;
pub mod types;
pub mod validate;

pub use error::{GraphError, Result};
pub use graph::WeightedGraph;
pub use search::Frontier;
pub use types::{Edge, ShortestPath};
pub use validate::validate_edges;

/// Find one minimum-weight path from `start` to `end`.
///
/// Returns `None` if either node is absent from the edge list or the two are
/// not connected. `start == end` yields a single-node path of distance 0,
/// provided the node exists.
pub fn compute_shortest_path(edges: &[Edge], start: &str, end: &str) -> Option<ShortestPath> {
    compute_shortest_path_with(edges, start, end, Frontier::default())
}

/// Same as [`compute_shortest_path`] with an explicit frontier strategy.
///
/// The result does not depend on the strategy.
pub fn compute_shortest_path_with(
    edges: &[Edge],
    start: &str,
    end: &str,
    frontier: Frontier,
) -> Option<ShortestPath> {
    let graph = WeightedGraph::from_edges(edges);
    tracing::debug!(
        "Built graph: {} nodes, {} edges from {} input edges",
        graph.node_count(),
        graph.edge_count(),
        edges.len()
    );
    graph.shortest_path(start, end, frontier)
}

/// Validate weights, then search.
///
/// # Errors
///
/// Returns [`GraphError`] for the first negative or non-finite weight.
pub fn try_compute_shortest_path(
    edges: &[Edge],
    start: &str,
    end: &str,
) -> Result<Option<ShortestPath>> {
    validate_edges(edges)?;
    Ok(compute_shortest_path(edges, start, end))
}

/// Get the version of hop-core.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
