//! Output formatting module for HOP CLI
//!
//! Every command result can be rendered as a human-readable table, as JSON,
//! or in the terse line-oriented MU sigil format.
//!
//! Colors are applied through `colored`, which already turns itself off when
//! stdout is not a terminal.

use clap::ValueEnum;
use serde::Serialize;
use std::str::FromStr;

mod json;
mod table;

pub use self::json::JsonOutput;
pub use self::table::TableOutput;

/// Output format for CLI results
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format (default)
    #[default]
    Table,
    /// JSON format for machine consumption
    Json,
    /// MU sigil format (`::` headers, `-` items, `#` notes)
    Mu,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "mu" => Ok(OutputFormat::Mu),
            _ => Err(format!("Unknown output format: '{}'", s)),
        }
    }
}

/// Types that can be displayed by the CLI.
///
/// JSON rendering comes for free from `Serialize`.
pub trait TableDisplay: Serialize {
    /// Convert to table format string
    fn to_table(&self) -> String;

    /// Convert to MU sigil format string
    fn to_mu(&self) -> String {
        self.to_table()
    }

    /// Render using the given format
    fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => self.to_table(),
            OutputFormat::Json => JsonOutput::format(self),
            OutputFormat::Mu => self.to_mu(),
        }
    }
}

/// Result wrapper for formatted output
pub struct Output<T> {
    data: T,
    format: OutputFormat,
}

impl<T: TableDisplay> Output<T> {
    /// Create a new output wrapper with specified format
    pub fn new(data: T, format: OutputFormat) -> Self {
        Self { data, format }
    }

    /// Render the output to stdout
    pub fn render(&self) -> anyhow::Result<()> {
        println!("{}", self.render_to_string());
        Ok(())
    }

    /// Get the rendered string without printing
    pub fn render_to_string(&self) -> String {
        self.data.render(self.format)
    }
}

/// Format a weight without a trailing `.0` for whole numbers.
pub fn format_weight(weight: f64) -> String {
    format!("{}", weight)
}
