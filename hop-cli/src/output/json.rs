//! JSON output formatting for machine-readable output.

use serde::Serialize;

/// JSON output formatter
pub struct JsonOutput;

impl JsonOutput {
    /// Format data as a pretty-printed JSON string
    pub fn format<T: Serialize + ?Sized>(data: &T) -> String {
        serde_json::to_string_pretty(data)
            .unwrap_or_else(|e| format!("{{\n  \"error\": \"{}\"\n}}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct TestData {
        name: String,
        distance: Option<f64>,
    }

    #[test]
    fn test_format_pretty() {
        let data = TestData {
            name: "test".to_string(),
            distance: Some(7.0),
        };
        let output = JsonOutput::format(&data);

        assert!(output.contains("\"name\": \"test\""));
        assert!(output.contains("\"distance\": 7.0"));
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_format_null() {
        let data = TestData {
            name: "test".to_string(),
            distance: None,
        };
        assert!(JsonOutput::format(&data).contains("\"distance\": null"));
    }

    #[test]
    fn test_format_non_finite_is_null() {
        let data = TestData {
            name: "test".to_string(),
            distance: Some(f64::INFINITY),
        };
        assert!(JsonOutput::format(&data).contains("\"distance\": null"));
    }
}
