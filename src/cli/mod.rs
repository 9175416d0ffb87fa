//! CLI argument parsing for bisearch
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::SearchArgs;
pub use bisearch_core::format::OutputFormat;
use parse::parse_format;

/// Bisearch - bidirectional path search over graph documents
#[derive(Parser, Debug)]
#[command(name = "bisearch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json or records
    /// (defaults to [output].format from the config file, then human)
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (e.g. debug, or bisearch_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to ./bisearch.toml when present)
    #[arg(long, global = true, env = "BISEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a path between two nodes of a graph document
    Path {
        /// Graph document (.json, .toml, .yaml or .yml)
        graph: PathBuf,

        /// Start node
        start: String,

        /// Goal node
        goal: String,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// Search the built-in sample graph (nodes A to F)
    Demo {
        /// Start node
        #[arg(long, default_value = bisearch_core::graph::sample::SAMPLE_START)]
        from: String,

        /// Goal node
        #[arg(long, default_value = bisearch_core::graph::sample::SAMPLE_GOAL)]
        to: String,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// Load a graph document and report structural issues
    Check {
        /// Graph document (.json, .toml, .yaml or .yml)
        graph: PathBuf,
    },
}
