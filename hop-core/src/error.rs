//! Error types for hop-core.
//!
//! The search itself never fails: unknown nodes, empty graphs and
//! disconnected endpoints all come back as `None`. These errors are only
//! produced by the opt-in weight validation.

use thiserror::Error;

/// Result type alias for hop-core operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised when an edge list is rejected before searching.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Edge weight is below zero, which breaks Dijkstra's settle order.
    #[error("Negative weight {weight} on edge #{index} ({from} - {to})")]
    NegativeWeight {
        /// Position of the edge in the input list.
        index: usize,
        from: String,
        to: String,
        weight: f64,
    },

    /// Edge weight is NaN or infinite.
    #[error("Non-finite weight {weight} on edge #{index} ({from} - {to})")]
    NonFiniteWeight {
        /// Position of the edge in the input list.
        index: usize,
        from: String,
        to: String,
        weight: f64,
    },
}

impl GraphError {
    /// Index of the offending edge in the input list.
    pub fn edge_index(&self) -> usize {
        match self {
            GraphError::NegativeWeight { index, .. } | GraphError::NonFiniteWeight { index, .. } => {
                *index
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GraphError::NegativeWeight {
            index: 3,
            from: "alice".to_string(),
            to: "bob".to_string(),
            weight: -2.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("#3"));
        assert!(msg.contains("alice"));
        assert!(msg.contains("-2"));
        assert_eq!(err.edge_index(), 3);

        let err = GraphError::NonFiniteWeight {
            index: 0,
            from: "a".to_string(),
            to: "b".to_string(),
            weight: f64::INFINITY,
        };
        assert!(err.to_string().contains("inf"));
        assert_eq!(err.edge_index(), 0);
    }
}
