//! Opt-in weight checks.
//!
//! [`crate::compute_shortest_path`] runs on whatever weights it is given, so a
//! negative edge can yield a non-minimal answer. Callers that would rather
//! reject such input run [`validate_edges`] first.

use crate::error::{GraphError, Result};
use crate::types::Edge;

/// Reject the first edge whose weight is non-finite or negative.
///
/// Non-finite is checked first so `-inf` reports as non-finite.
pub fn validate_edges(edges: &[Edge]) -> Result<()> {
    for (index, edge) in edges.iter().enumerate() {
        if !edge.weight.is_finite() {
            return Err(GraphError::NonFiniteWeight {
                index,
                from: edge.from.clone(),
                to: edge.to.clone(),
                weight: edge.weight,
            });
        }
        if edge.weight < 0.0 {
            return Err(GraphError::NegativeWeight {
                index,
                from: edge.from.clone(),
                to: edge.to.clone(),
                weight: edge.weight,
            });
        }
    }
    Ok(())
}
