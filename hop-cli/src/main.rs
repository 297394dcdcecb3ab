//! HOP CLI - Weighted shortest paths from the command line
//!
//! Loads an undirected, weighted edge list from a file and finds the
//! lowest-weight path between two nodes.

use clap::{CommandFactory, Parser, Subcommand};
use hop_core::Frontier;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Parse a frontier strategy name (`linear` or `heap`)
fn parse_frontier(s: &str) -> Result<Frontier, String> {
    s.parse()
}

mod commands;
mod config;
mod loader;
mod output;

use commands::*;
use config::HopConfig;
use output::OutputFormat;

/// Weighted shortest paths over edge-list files.
#[derive(Parser)]
#[command(name = "hop")]
#[command(author, version)]
#[command(about = "Weighted shortest paths over edge-list files")]
#[command(propagate_version = true)]
#[command(after_help = "Edge list formats:
  *.json            [{\"from\": \"a\", \"to\": \"b\", \"weight\": 2}, ...]
  anything else     one 'FROM TO WEIGHT' per line, '#' comments

Examples:
  hop path friends.txt alice dave     Lowest-weight path from alice to dave
  hop path g.json A F --format json   Same, as JSON
  hop inspect friends.txt             Nodes, neighbors and weight warnings")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the lowest-weight path between two nodes
    #[command(visible_alias = "p")]
    Path {
        /// Edge list file
        file: PathBuf,

        /// Start node
        from: String,

        /// Target node
        to: String,

        /// Frontier strategy: linear or heap (same results)
        #[arg(long, value_parser = parse_frontier)]
        frontier: Option<Frontier>,

        /// Reject negative and non-finite weights instead of searching
        #[arg(long)]
        strict: bool,
    },

    /// Summarize an edge list: nodes, neighbors, duplicate and suspicious edges
    #[command(visible_alias = "i")]
    Inspect {
        /// Edge list file
        file: PathBuf,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration from .hoprc.toml
    let config = HopConfig::load(std::path::Path::new("."));

    // Resolve output format: CLI flag > config default > Table
    let format = cli.format.unwrap_or_else(|| {
        config
            .default_format()
            .and_then(|f| f.parse().ok())
            .unwrap_or(OutputFormat::Table)
    });

    // Apply color override from config if set
    if let Some(use_color) = config.use_color() {
        colored::control::set_override(use_color);
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            let _ = Cli::command().print_help();
            println!();
            return Ok(());
        }
    };

    match command {
        Commands::Path {
            file,
            from,
            to,
            frontier,
            strict,
        } => {
            let options = path::PathOptions {
                frontier: frontier.or_else(|| config.frontier()).unwrap_or_default(),
                strict: strict || config.strict_weights(),
            };
            path::run(&file, &from, &to, options, format).await
        }
        Commands::Inspect { file } => inspect::run(&file, format).await,
    }
}
