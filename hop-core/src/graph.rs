//! Undirected weighted graph built from an edge list.
//!
//! The graph is rebuilt from scratch for every request and never mutated
//! afterwards. It is backed by a petgraph `UnGraph` plus a lookup table from
//! node ID to index.
//!
//! # Node order
//!
//! Nodes are indexed in order of first appearance in the edge list (`from`
//! before `to` within an edge). Every deterministic iteration in this crate,
//! including the search's tie-break between equally distant nodes, follows
//! this order.
//!
//! # Duplicate edges
//!
//! A later edge between the same unordered pair overwrites the earlier
//! weight instead of adding a parallel edge, so the last occurrence in input
//! order wins.

use crate::types::Edge;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Adjacency structure for one shortest-path request.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    graph: UnGraph<String, f64>,
    node_map: HashMap<String, NodeIndex>,
}

impl WeightedGraph {
    /// Build the graph from an edge list.
    ///
    /// Self-loops are kept as self-neighbors. Weights are taken as given.
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut graph = UnGraph::with_capacity(edges.len(), edges.len());
        let mut node_map = HashMap::with_capacity(edges.len());

        for edge in edges {
            let a = Self::intern(&mut graph, &mut node_map, &edge.from);
            let b = Self::intern(&mut graph, &mut node_map, &edge.to);
            graph.update_edge(a, b, edge.weight);
        }

        Self { graph, node_map }
    }

    fn intern(
        graph: &mut UnGraph<String, f64>,
        node_map: &mut HashMap<String, NodeIndex>,
        node_id: &str,
    ) -> NodeIndex {
        if let Some(&idx) = node_map.get(node_id) {
            return idx;
        }
        let idx = graph.add_node(node_id.to_string());
        node_map.insert(node_id.to_string(), idx);
        idx
    }

    /// Get the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of distinct edges (unordered pairs, self-loops included).
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Check if a node appeared as an endpoint of any edge.
    pub fn has_node(&self, node_id: &str) -> bool {
        self.node_map.contains_key(node_id)
    }

    /// All node IDs in first-appearance order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.node_indices().map(|idx| self.graph[idx].as_str())
    }

    /// Neighbors of a node with their edge weights, in first-appearance order.
    ///
    /// A self-loop lists the node as its own neighbor. Unknown nodes have no
    /// neighbors.
    pub fn neighbors(&self, node_id: &str) -> Vec<(&str, f64)> {
        let Some(idx) = self.index_of(node_id) else {
            return vec![];
        };

        let mut found: Vec<(NodeIndex, f64)> = self
            .graph
            .edges(idx)
            .map(|edge| (Self::other_end(idx, &edge), *edge.weight()))
            .collect();
        found.sort_by_key(|(neighbor, _)| neighbor.index());

        found
            .into_iter()
            .map(|(neighbor, weight)| (self.graph[neighbor].as_str(), weight))
            .collect()
    }

    /// Number of distinct neighbors of a node.
    pub fn degree(&self, node_id: &str) -> usize {
        self.neighbors(node_id).len()
    }

    /// Effective weight between two nodes, after duplicates were resolved.
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<f64> {
        let a = self.index_of(a)?;
        let b = self.index_of(b)?;
        let edge = self.graph.find_edge(a, b)?;
        self.graph.edge_weight(edge).copied()
    }

    pub(crate) fn index_of(&self, node_id: &str) -> Option<NodeIndex> {
        self.node_map.get(node_id).copied()
    }

    pub(crate) fn name(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    /// Incident edges of `idx` as `(neighbor, weight)`.
    pub(crate) fn incident(&self, idx: NodeIndex) -> impl Iterator<Item = (NodeIndex, f64)> + '_ {
        self.graph
            .edges(idx)
            .map(move |edge| (Self::other_end(idx, &edge), *edge.weight()))
    }

    fn other_end<R: EdgeRef<NodeId = NodeIndex>>(idx: NodeIndex, edge: &R) -> NodeIndex {
        if edge.source() == idx {
            edge.target()
        } else {
            edge.source()
        }
    }
}
