//! Inspect command - summarize an edge-list file
//!
//! Shows what the search will actually see: the distinct nodes in
//! first-appearance order, their neighbors after duplicate edges were
//! collapsed, and weights that would make the search unreliable.

use crate::loader;
use crate::output::{format_weight, Output, OutputFormat, TableDisplay, TableOutput};
use anyhow::Result;
use colored::Colorize;
use hop_core::{Edge, WeightedGraph};
use serde::Serialize;
use std::path::Path;

/// Edge-list summary
#[derive(Debug, Serialize)]
pub struct InspectResult {
    pub source: String,
    pub input_edges: usize,
    pub node_count: usize,
    pub edge_count: usize,
    /// Input edges that overwrote an earlier edge between the same pair.
    pub overridden_edges: usize,
    pub self_loops: usize,
    /// Input edges with a negative or non-finite weight.
    pub suspicious_weights: usize,
    pub nodes: Vec<NodeSummary>,
}

#[derive(Debug, Serialize)]
pub struct NodeSummary {
    pub id: String,
    pub degree: usize,
    pub neighbors: Vec<Neighbor>,
}

#[derive(Debug, Serialize)]
pub struct Neighbor {
    pub id: String,
    pub weight: f64,
}

impl TableDisplay for InspectResult {
    fn to_table(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n", "Edge list".bold(), self.source.cyan()));
        output.push_str(&format!("{}\n", "-".repeat(60)));

        let rows = self
            .nodes
            .iter()
            .map(|node| {
                let neighbors = node
                    .neighbors
                    .iter()
                    .map(|n| format!("{} ({})", n.id, format_weight(n.weight)))
                    .collect::<Vec<_>>()
                    .join(", ");
                vec![node.id.clone(), node.degree.to_string(), neighbors]
            })
            .collect();
        output.push_str(&TableOutput::format_rows(
            &["Node", "Degree", "Neighbors"],
            rows,
        ));
        output.push('\n');

        output.push_str(&format!(
            "\n{}: {} nodes, {} edges ({} input edges)\n",
            "Summary".bold(),
            self.node_count,
            self.edge_count,
            self.input_edges
        ));
        if self.overridden_edges > 0 {
            output.push_str(&format!(
                "  {} {} duplicate edge(s) overrode an earlier weight\n",
                "NOTE".yellow(),
                self.overridden_edges
            ));
        }
        if self.self_loops > 0 {
            output.push_str(&format!(
                "  {} {} self-loop(s), ignored by the search\n",
                "NOTE".yellow(),
                self.self_loops
            ));
        }
        if self.suspicious_weights > 0 {
            output.push_str(&format!(
                "  {} {} negative or non-finite weight(s); results may not be minimal\n",
                "WARNING".red().bold(),
                self.suspicious_weights
            ));
        }

        output
    }

    fn to_mu(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(":: graph {}\n", self.source));

        for node in &self.nodes {
            let neighbors = node
                .neighbors
                .iter()
                .map(|n| format!("{}:{}", n.id, format_weight(n.weight)))
                .collect::<Vec<_>>()
                .join(" ");
            output.push_str(&format!("- {} -> {}\n", node.id, neighbors));
        }

        output.push_str(&format!(
            "# nodes: {}, edges: {}\n",
            self.node_count, self.edge_count
        ));
        output
    }
}

/// Run the inspect command
pub async fn run(file: &Path, format: OutputFormat) -> Result<()> {
    let edges = loader::load_edges(file).await?;
    let result = summarize(&file.display().to_string(), &edges);
    Output::new(result, format).render()
}

/// Build the summary for an edge list.
pub fn summarize(source: &str, edges: &[Edge]) -> InspectResult {
    let graph = WeightedGraph::from_edges(edges);

    let nodes = graph
        .nodes()
        .map(|id| {
            let neighbors: Vec<Neighbor> = graph
                .neighbors(id)
                .into_iter()
                .map(|(neighbor, weight)| Neighbor {
                    id: neighbor.to_string(),
                    weight,
                })
                .collect();
            NodeSummary {
                id: id.to_string(),
                degree: neighbors.len(),
                neighbors,
            }
        })
        .collect();

    InspectResult {
        source: source.to_string(),
        input_edges: edges.len(),
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        overridden_edges: edges.len() - graph.edge_count(),
        self_loops: graph.nodes().filter(|id| graph.edge_weight(id, id).is_some()).count(),
        suspicious_weights: edges
            .iter()
            .filter(|e| !e.weight.is_finite() || e.weight < 0.0)
            .count(),
        nodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize() {
        let edges = vec![
            Edge::new("a", "b", 5.0),
            Edge::new("b", "c", 1.0),
            Edge::new("b", "a", 2.0),
            Edge::new("c", "c", 1.0),
            Edge::new("d", "e", -1.0),
        ];
        let result = summarize("test", &edges);

        assert_eq!(result.input_edges, 5);
        assert_eq!(result.node_count, 5);
        assert_eq!(result.edge_count, 4);
        assert_eq!(result.overridden_edges, 1);
        assert_eq!(result.self_loops, 1);
        assert_eq!(result.suspicious_weights, 1);

        let ids: Vec<&str> = result.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);

        let b = &result.nodes[1];
        assert_eq!(b.degree, 2);
        assert_eq!(b.neighbors[0].id, "a");
        assert_eq!(b.neighbors[0].weight, 2.0);
    }

    #[test]
    fn test_summarize_empty() {
        let result = summarize("empty", &[]);
        assert_eq!(result.node_count, 0);
        assert!(result.nodes.is_empty());
    }

    #[test]
    fn test_mu_output() {
        let result = summarize("g", &[Edge::new("a", "b", 1.5)]);
        let mu = result.to_mu();
        assert!(mu.contains(":: graph g"));
        assert!(mu.contains("- a -> b:1.5"));
        assert!(mu.contains("# nodes: 2, edges: 1"));
    }
}
