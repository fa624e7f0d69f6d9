//! Output format handling for trains
//!
//! Supports two output formats:
//! - human: `Output #<n>: <value>` lines, as the railroad problem expects
//! - json: Stable, machine-readable JSON

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, TrainsError};
use crate::graph::EdgeSpec;
use crate::query::{Answer, Query};

/// Output format for trains commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = TrainsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(TrainsError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// One numbered line of a report
#[derive(Debug, Clone, Serialize)]
pub struct OutputRecord<'a> {
    pub index: usize,
    pub query: &'a Query,
    pub result: Answer,
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    outputs: Vec<OutputRecord<'a>>,
}

#[derive(Serialize)]
struct EdgesDocument<'a> {
    edges: &'a [EdgeSpec],
}

/// Pair queries with their answers, numbering from 1
pub fn build_records<'a>(queries: &'a [Query], answers: &[Answer]) -> Vec<OutputRecord<'a>> {
    queries
        .iter()
        .zip(answers)
        .enumerate()
        .map(|(i, (query, &result))| OutputRecord {
            index: i + 1,
            query,
            result,
        })
        .collect()
}

/// Render a numbered report, one line per query in human mode
pub fn render_report(format: OutputFormat, records: Vec<OutputRecord<'_>>) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(records
            .iter()
            .map(|record| format!("Output #{}: {}\n", record.index, record.result))
            .collect()),
        OutputFormat::Json => {
            let doc = ReportDocument { outputs: records };
            Ok(format!("{}\n", serde_json::to_string_pretty(&doc)?))
        }
    }
}

/// Render an edge listing as `SDw` tokens or a JSON array
pub fn render_edges(format: OutputFormat, edges: &[EdgeSpec]) -> Result<String> {
    match format {
        OutputFormat::Human => {
            let tokens: Vec<String> = edges.iter().map(EdgeSpec::to_string).collect();
            Ok(format!("Graph: {}\n", tokens.join(", ")))
        }
        OutputFormat::Json => {
            let doc = EdgesDocument { edges };
            Ok(format!("{}\n", serde_json::to_string_pretty(&doc)?))
        }
    }
}
