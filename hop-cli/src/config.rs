//! HOP configuration loading from `.hoprc.toml`.
//!
//! Configuration is optional: a missing or unreadable file falls back to
//! defaults. Command-line flags always win over values set here.
//!
//! # Example Configuration
//!
//! ```toml
//! [search]
//! frontier = "heap"
//! strict_weights = true
//!
//! [output]
//! format = "json"
//! color = false
//! ```

use hop_core::Frontier;
use serde::Deserialize;
use std::path::Path;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = ".hoprc.toml";

/// Root configuration structure loaded from `.hoprc.toml`.
#[derive(Debug, Deserialize, Default)]
pub struct HopConfig {
    /// Search behavior.
    #[serde(default)]
    pub search: SearchConfig,

    /// Output formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Search configuration.
#[derive(Debug, Deserialize, Default)]
pub struct SearchConfig {
    /// Frontier strategy: `linear` (default) or `heap`.
    ///
    /// Both give the same answers; `heap` is faster on large graphs.
    #[serde(default)]
    pub frontier: Option<String>,

    /// Reject negative and non-finite weights before searching.
    ///
    /// Default: `false` (weights are used as given).
    #[serde(default)]
    pub strict_weights: bool,
}

/// Output formatting preferences.
///
/// `--format` on the command line overrides `format`.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Default output format: `table`, `json` or `mu`.
    #[serde(default)]
    pub format: Option<String>,

    /// Force colored output on or off. Unset means auto-detect.
    #[serde(default)]
    pub color: Option<bool>,
}

impl HopConfig {
    /// Load configuration from `.hoprc.toml` in the given directory.
    ///
    /// Parse errors are logged as warnings and the defaults are used.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    /// Configured frontier, if set and valid.
    ///
    /// An unknown value is logged and ignored.
    pub fn frontier(&self) -> Option<Frontier> {
        let raw = self.search.frontier.as_deref()?;
        match raw.parse() {
            Ok(frontier) => Some(frontier),
            Err(e) => {
                tracing::warn!("Ignoring [search].frontier in {}: {}", CONFIG_FILE, e);
                None
            }
        }
    }

    /// Whether strict weight validation is enabled.
    pub fn strict_weights(&self) -> bool {
        self.search.strict_weights
    }

    /// Get the default output format, if configured.
    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Configured color override, or `None` to auto-detect.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HopConfig::default();
        assert!(config.frontier().is_none());
        assert!(!config.strict_weights());
        assert!(config.default_format().is_none());
        assert!(config.use_color().is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[search]
frontier = "heap"
strict_weights = true

[output]
format = "json"
color = false
"#;
        let config: HopConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.frontier(), Some(Frontier::BinaryHeap));
        assert!(config.strict_weights());
        assert_eq!(config.default_format(), Some("json"));
        assert_eq!(config.use_color(), Some(false));
    }

    #[test]
    fn test_partial_config() {
        let config: HopConfig = toml::from_str("[output]\nformat = \"mu\"\n").unwrap();
        assert_eq!(config.default_format(), Some("mu"));
        assert!(!config.strict_weights());
        assert!(config.frontier().is_none());
    }

    #[test]
    fn test_invalid_frontier_is_ignored() {
        let config: HopConfig = toml::from_str("[search]\nfrontier = \"fibonacci\"\n").unwrap();
        assert!(config.frontier().is_none());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = HopConfig::load(dir.path());
        assert!(!config.strict_weights());
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[search]\nstrict_weights = true\n",
        )
        .unwrap();
        let config = HopConfig::load(dir.path());
        assert!(config.strict_weights());
    }

    #[test]
    fn test_load_malformed_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[search\nbroken").unwrap();
        let config = HopConfig::load(dir.path());
        assert!(!config.strict_weights());
    }
}
