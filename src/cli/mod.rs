//! CLI argument parsing for trains
//!
//! Global flags: --graph, --format, --strict, --config, --quiet, --verbose

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use parse::{parse_format, parse_node};
use trains_core::format::OutputFormat;

/// Trains - distances, trip counts and shortest routes on a one-way railway
#[derive(Parser, Debug)]
#[command(name = "trains")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// File whose first line is the graph spec
    #[arg(value_name = "GRAPHFILE")]
    pub graph_file: Option<PathBuf>,

    /// Inline graph spec, e.g. "Graph: AB5, BC4, CD8"
    #[arg(long, short, global = true)]
    pub graph: Option<String>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Reject malformed edge tokens and duplicate edges
    #[arg(long, global = true)]
    pub strict: bool,

    /// Report config file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the configured report (default: the ten standard queries)
    Report,

    /// Distance along an exact route
    Route {
        /// Towns in travel order
        #[arg(required = true, value_parser = parse_node)]
        nodes: Vec<char>,
    },

    /// Count trips limited by number of stops
    Trips {
        #[arg(value_parser = parse_node)]
        start: char,

        #[arg(value_parser = parse_node)]
        end: char,

        /// Maximum number of stops
        #[arg(long)]
        max_stops: u32,

        /// Only count trips with exactly --max-stops stops
        #[arg(long)]
        exact: bool,
    },

    /// Count trips shorter than a distance
    Within {
        #[arg(value_parser = parse_node)]
        start: char,

        #[arg(value_parser = parse_node)]
        end: char,

        /// Exclusive distance bound
        #[arg(long, allow_hyphen_values = true)]
        distance: i64,
    },

    /// Length of the shortest route
    Shortest {
        #[arg(value_parser = parse_node)]
        start: char,

        #[arg(value_parser = parse_node)]
        end: char,
    },

    /// List the edges of the parsed graph
    Edges,
}
