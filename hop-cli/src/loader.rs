//! Edge-list loading.
//!
//! Two file formats are accepted, chosen by extension:
//!
//! - `.json`: an array of `{"from", "to", "weight"}` objects, or an object
//!   with an `edges` array of the same.
//! - anything else: one edge per line, `FROM TO WEIGHT`, separated by
//!   whitespace or commas. Everything after `#` is a comment; blank lines
//!   are skipped.
//!
//! ```text
//! # friends graph
//! alice bob 2
//! bob, carol, 1.5
//! ```

use hop_core::Edge;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading an edge list.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The JSON document does not describe an edge list.
    #[error("Invalid JSON edge list in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A line of the text format could not be parsed.
    #[error("{path}:{line}: {message}")]
    Syntax {
        path: String,
        /// 1-based line number.
        line: usize,
        message: String,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EdgeDocument {
    List(Vec<Edge>),
    Wrapped { edges: Vec<Edge> },
}

/// Load edges from a file, picking the format by extension.
pub async fn load_edges(path: &Path) -> Result<Vec<Edge>, LoadError> {
    let origin = path.display().to_string();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: origin.clone(),
            source,
        })?;

    let edges = if is_json(path) {
        parse_json(&content, &origin)?
    } else {
        parse_text(&content, &origin)?
    };

    tracing::debug!("Loaded {} edges from {}", edges.len(), origin);
    Ok(edges)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Parse a JSON edge list.
pub fn parse_json(content: &str, origin: &str) -> Result<Vec<Edge>, LoadError> {
    let document: EdgeDocument =
        serde_json::from_str(content).map_err(|source| LoadError::Json {
            path: origin.to_string(),
            source,
        })?;

    Ok(match document {
        EdgeDocument::List(edges) | EdgeDocument::Wrapped { edges } => edges,
    })
}

/// Parse the line-oriented text format.
pub fn parse_text(content: &str, origin: &str) -> Result<Vec<Edge>, LoadError> {
    let mut edges = Vec::new();

    for (i, raw) in content.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let syntax = |message: String| LoadError::Syntax {
            path: origin.to_string(),
            line: i + 1,
            message,
        };

        let fields: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|field| !field.is_empty())
            .collect();

        let [from, to, weight] = fields.as_slice() else {
            return Err(syntax(format!(
                "expected 'FROM TO WEIGHT', found {} field(s)",
                fields.len()
            )));
        };

        let weight: f64 = weight
            .parse()
            .map_err(|_| syntax(format!("'{}' is not a valid weight", weight)))?;

        edges.push(Edge::new(*from, *to, weight));
    }

    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_basic() {
        let edges = parse_text("a b 1\nb c 2.5\n", "test").unwrap();
        assert_eq!(edges, vec![Edge::new("a", "b", 1.0), Edge::new("b", "c", 2.5)]);
    }

    #[test]
    fn test_parse_text_comments_commas_and_blanks() {
        let content = "# header\n\nalice, bob, 2\n  bob\tcarol 1 # trailing\n";
        let edges = parse_text(content, "test").unwrap();
        assert_eq!(
            edges,
            vec![Edge::new("alice", "bob", 2.0), Edge::new("bob", "carol", 1.0)]
        );
    }

    #[test]
    fn test_parse_text_wrong_field_count() {
        let err = parse_text("a b 1\na b\n", "edges.txt").unwrap_err();
        match &err {
            LoadError::Syntax { line, path, .. } => {
                assert_eq!(*line, 2);
                assert_eq!(path, "edges.txt");
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
        assert!(err.to_string().starts_with("edges.txt:2:"));
    }

    #[test]
    fn test_parse_text_bad_weight() {
        let err = parse_text("a b heavy\n", "edges.txt").unwrap_err();
        assert!(err.to_string().contains("'heavy' is not a valid weight"));
    }

    #[test]
    fn test_parse_text_empty() {
        assert!(parse_text("", "test").unwrap().is_empty());
        assert!(parse_text("# only comments\n\n", "test").unwrap().is_empty());
    }

    #[test]
    fn test_parse_json_array() {
        let edges = parse_json(r#"[{"from":"a","to":"b","weight":1.5}]"#, "test").unwrap();
        assert_eq!(edges, vec![Edge::new("a", "b", 1.5)]);
    }

    #[test]
    fn test_parse_json_wrapped() {
        let edges = parse_json(
            r#"{"edges":[{"from":"a","to":"b","weight":1},{"from":"b","to":"c","weight":2}]}"#,
            "test",
        )
        .unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[1], Edge::new("b", "c", 2.0));
    }

    #[test]
    fn test_parse_json_invalid() {
        let err = parse_json(r#"[{"from":"a"}]"#, "graph.json").unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
        assert!(err.to_string().contains("graph.json"));
    }

    #[test]
    fn test_is_json() {
        assert!(is_json(Path::new("graph.json")));
        assert!(is_json(Path::new("GRAPH.JSON")));
        assert!(!is_json(Path::new("graph.txt")));
        assert!(!is_json(Path::new("graph")));
    }

    #[tokio::test]
    async fn test_load_edges_missing_file() {
        let err = load_edges(Path::new("/nonexistent/edges.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[tokio::test]
    async fn test_load_edges_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let text = dir.path().join("edges.txt");
        std::fs::write(&text, "a b 1\n").unwrap();
        assert_eq!(load_edges(&text).await.unwrap(), vec![Edge::new("a", "b", 1.0)]);

        let json = dir.path().join("edges.json");
        std::fs::write(&json, r#"[{"from":"x","to":"y","weight":3}]"#).unwrap();
        assert_eq!(load_edges(&json).await.unwrap(), vec![Edge::new("x", "y", 3.0)]);
    }
}
