//! Path command - lowest-weight path between two nodes
//!
//! `hop path <edges> <from> <to>` loads an edge list, runs the search and
//! prints the path with the weight of every hop, or a "no path" notice.
//! Not finding a path is a normal outcome, not an error.

use crate::loader;
use crate::output::{format_weight, Output, OutputFormat, TableDisplay};
use anyhow::{Context, Result};
use colored::Colorize;
use hop_core::{validate_edges, Edge, Frontier, WeightedGraph};
use serde::Serialize;
use std::path::Path;

/// Search options resolved from flags and configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathOptions {
    pub frontier: Frontier,
    /// Reject negative and non-finite weights before searching.
    pub strict: bool,
}

/// Path finding result
#[derive(Debug, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub path: Option<Vec<String>>,
    pub distance: Option<f64>,
    pub hops: usize,
    /// Weight of each hop, aligned with `path[1..]`.
    #[serde(skip)]
    pub step_weights: Vec<f64>,
}

impl TableDisplay for PathResult {
    fn to_table(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {} {} {}\n",
            "Path from".bold(),
            self.from.cyan(),
            "to".bold(),
            self.to.cyan()
        ));
        output.push_str(&format!("{}\n", "-".repeat(60)));

        match (&self.path, self.distance) {
            (Some(path), Some(distance)) if !path.is_empty() => {
                for (i, node) in path.iter().enumerate() {
                    let prefix = if i == 0 {
                        "START".green().to_string()
                    } else if i == path.len() - 1 {
                        "END  ".red().to_string()
                    } else {
                        format!("{:5}", i)
                    };
                    output.push_str(&format!("  {} {}\n", prefix, node));

                    if let Some(weight) = self.step_weights.get(i) {
                        output.push_str(&format!(
                            "       {} {}\n",
                            "|".dimmed(),
                            format!("+{}", format_weight(*weight)).dimmed()
                        ));
                        output.push_str(&format!("       {}\n", "v".dimmed()));
                    }
                }
                output.push_str(&format!(
                    "\n{}: {} ({} hops)\n",
                    "Distance".bold(),
                    format_weight(distance),
                    self.hops
                ));
            }
            _ => {
                output.push_str(&format!(
                    "\n  {} No path found between these nodes.\n",
                    "INFO".yellow()
                ));
            }
        }

        output
    }

    fn to_mu(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(":: path {} -> {}\n", self.from, self.to));

        match (&self.path, self.distance) {
            (Some(path), Some(distance)) => {
                for (i, node) in path.iter().enumerate() {
                    match i.checked_sub(1).and_then(|prev| self.step_weights.get(prev)) {
                        Some(weight) => {
                            output.push_str(&format!("- {} (+{})\n", node, format_weight(*weight)))
                        }
                        None => output.push_str(&format!("- {}\n", node)),
                    }
                }
                output.push_str(&format!("# distance: {}\n", format_weight(distance)));
            }
            _ => output.push_str("# no path found\n"),
        }

        output
    }
}

/// Run the path command
pub async fn run(
    file: &Path,
    from: &str,
    to: &str,
    options: PathOptions,
    format: OutputFormat,
) -> Result<()> {
    let edges = loader::load_edges(file).await?;
    let result = find_path(&edges, from, to, options)?;
    Output::new(result, format).render()
}

/// Search the edge list and package the answer for display.
pub fn find_path(edges: &[Edge], from: &str, to: &str, options: PathOptions) -> Result<PathResult> {
    if options.strict {
        validate_edges(edges).context("Edge list rejected by strict weight check")?;
    }

    let graph = WeightedGraph::from_edges(edges);
    for node in [from, to] {
        if !graph.has_node(node) {
            tracing::info!("Node '{}' does not appear in any edge", node);
        }
    }

    let found = graph.shortest_path(from, to, options.frontier);

    Ok(match found {
        Some(found) => {
            let step_weights = found
                .path
                .windows(2)
                .filter_map(|pair| graph.edge_weight(&pair[0], &pair[1]))
                .collect();
            PathResult {
                from: from.to_string(),
                to: to.to_string(),
                hops: found.hops(),
                distance: Some(found.distance),
                path: Some(found.path),
                step_weights,
            }
        }
        None => PathResult {
            from: from.to_string(),
            to: to.to_string(),
            path: None,
            distance: None,
            hops: 0,
            step_weights: vec![],
        },
    })
}
