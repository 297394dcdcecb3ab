//! Data types shared by graph construction and search.
//!
//! Both types are plain serde records so callers can feed JSON edge lists
//! straight in and serialize results straight out.

use serde::{Deserialize, Serialize};

/// An undirected, weighted connection between two nodes.
///
/// `(A, B, w)` permits traversal `A -> B` and `B -> A` at cost `w`.
/// The weight is not checked here; see [`crate::validate_edges`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// A minimum-weight path between two nodes.
///
/// `path` always starts at the requested start node and ends at the requested
/// end node; `distance` is the sum of the edge weights along it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShortestPath {
    pub path: Vec<String>,
    pub distance: f64,
}

impl ShortestPath {
    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
