//! Python bindings.
//!
//! ```python
//! from hop import _hop
//!
//! result = _hop.compute_shortest_path([("A", "B", 1.0), ("B", "C", 2.0)], "A", "C")
//! # (["A", "B", "C"], 3.0), or None when unreachable
//! ```

use crate::types::Edge;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Find one minimum-weight path. Returns `(path, distance)` or `None`.
#[pyfunction]
#[pyo3(signature = (edges, start, end, frontier="linear"))]
fn compute_shortest_path(
    edges: Vec<(String, String, f64)>,
    start: &str,
    end: &str,
    frontier: &str,
) -> PyResult<Option<(Vec<String>, f64)>> {
    let frontier = frontier.parse().map_err(PyValueError::new_err)?;
    let edges: Vec<Edge> = edges
        .into_iter()
        .map(|(from, to, weight)| Edge::new(from, to, weight))
        .collect();

    Ok(crate::compute_shortest_path_with(&edges, start, end, frontier)
        .map(|found| (found.path, found.distance)))
}

/// Reject negative or non-finite weights, raising `ValueError`.
#[pyfunction]
fn validate_edges(edges: Vec<(String, String, f64)>) -> PyResult<()> {
    let edges: Vec<Edge> = edges
        .into_iter()
        .map(|(from, to, weight)| Edge::new(from, to, weight))
        .collect();
    crate::validate_edges(&edges).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Get the version of hop-core.
#[pyfunction]
fn version() -> &'static str {
    crate::version()
}

/// Python module definition.
#[pymodule]
fn _hop(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(compute_shortest_path, m)?)?;
    m.add_function(wrap_pyfunction!(validate_edges, m)?)?;
    m.add_function(wrap_pyfunction!(version, m)?)?;
    Ok(())
}
