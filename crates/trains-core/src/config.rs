//! Report configuration for trains
//!
//! A TOML file selects strict parsing and the list of queries a report runs:
//!
//! ```toml
//! strict = true
//!
//! [[queries]]
//! kind = "route"
//! path = ["A", "B", "C"]
//!
//! [[queries]]
//! kind = "trips"
//! start = "C"
//! end = "C"
//! max_stops = 3
//! ```
//!
//! Without a `queries` table the ten standard queries are used.

pub mod global;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrainsError};
use crate::query::{standard_queries, Query};

pub use global::{default_config_path, CONFIG_DIR_ENV_VAR};

/// Report configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Reject malformed edge tokens and duplicate edges
    #[serde(default)]
    pub strict: bool,

    /// Queries to evaluate, in output order
    #[serde(default = "standard_queries")]
    pub queries: Vec<Query>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            strict: false,
            queries: standard_queries(),
        }
    }
}

impl ReportConfig {
    /// Parse config text; `path` is only used for error messages
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| TrainsError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load a config file that must exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TrainsError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)
            .map_err(|e| TrainsError::io_operation("read config", path.display(), e))?;
        Self::from_toml_str(&content, path)
    }

    /// Load the explicit config if given, else the default file if present,
    /// else built-in defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "loading default config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}
