//! Error types and exit codes for trains
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (invalid graph spec or config)
//!
//! Graph queries never fail; "no route" is a value, not an error. Errors only
//! come from strict graph construction, configuration and the CLI layer.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph spec or config (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during trains operations
#[derive(Error, Debug)]
pub enum TrainsError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("invalid edge tokens: {}", .tokens.join(", "))]
    InvalidEdges { tokens: Vec<String> },

    #[error("duplicate edge {from}{to}: {first} then {second}")]
    DuplicateEdge {
        from: char,
        to: char,
        first: i64,
        second: i64,
    },

    #[error("config file not found: {path:?}")]
    ConfigNotFound { path: PathBuf },

    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl TrainsError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        TrainsError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TrainsError::UnknownFormat(_) | TrainsError::UsageError(_) => ExitCode::Usage,

            TrainsError::InvalidEdges { .. }
            | TrainsError::DuplicateEdge { .. }
            | TrainsError::ConfigNotFound { .. }
            | TrainsError::InvalidConfig { .. } => ExitCode::Data,

            TrainsError::Io(_)
            | TrainsError::Json(_)
            | TrainsError::FailedOperationWithTarget { .. }
            | TrainsError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            TrainsError::UnknownFormat(_) => "unknown_format",
            TrainsError::UsageError(_) => "usage_error",
            TrainsError::InvalidEdges { .. } => "invalid_edges",
            TrainsError::DuplicateEdge { .. } => "duplicate_edge",
            TrainsError::ConfigNotFound { .. } => "config_not_found",
            TrainsError::InvalidConfig { .. } => "invalid_config",
            TrainsError::Io(_) => "io_error",
            TrainsError::Json(_) => "json_error",
            TrainsError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            TrainsError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let TrainsError::InvalidEdges { tokens } = self {
            error_obj["tokens"] = serde_json::json!(tokens);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for trains operations
pub type Result<T> = std::result::Result<T, TrainsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            TrainsError::UsageError("x".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            TrainsError::InvalidEdges {
                tokens: vec!["A".into()]
            }
            .exit_code(),
            ExitCode::Data
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(TrainsError::from(io).exit_code(), ExitCode::Failure);
        assert_eq!(i32::from(ExitCode::Data), 3);
    }

    #[test]
    fn test_invalid_edges_message() {
        let err = TrainsError::InvalidEdges {
            tokens: vec!["AB".into(), "XYz".into()],
        };
        assert_eq!(err.to_string(), "invalid edge tokens: AB, XYz");
    }

    #[test]
    fn test_duplicate_edge_message() {
        let err = TrainsError::DuplicateEdge {
            from: 'A',
            to: 'B',
            first: 5,
            second: 7,
        };
        assert_eq!(err.to_string(), "duplicate edge AB: 5 then 7");
    }

    #[test]
    fn test_to_json_envelope() {
        let err = TrainsError::InvalidEdges {
            tokens: vec!["Q".into()],
        };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "invalid_edges");
        assert_eq!(json["error"]["tokens"][0], "Q");

        let usage = TrainsError::UsageError("no graph given".into()).to_json();
        assert_eq!(usage["error"]["code"], 2);
        assert_eq!(usage["error"]["type"], "usage_error");
        assert_eq!(usage["error"]["message"], "no graph given");
    }
}
