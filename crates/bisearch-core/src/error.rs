//! Error types and exit codes for bisearch
//!
//! Exit codes:
//! - 0: Success (including "no path found")
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing or invalid graph, unknown node, negative weight)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the bisearch CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing graph, invalid graph document, unknown node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during bisearch operations
///
/// A search that finds no path is not an error; it is reported through
/// [`crate::graph::SearchOutcome::NotFound`].
#[derive(Error, Debug)]
pub enum BisearchError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("graph not found: {path:?}")]
    GraphNotFound { path: PathBuf },

    #[error("invalid graph in {path:?}: {reason}")]
    InvalidGraph { path: PathBuf, reason: String },

    #[error("node not found in graph: {id}")]
    UnknownNode { id: String },

    #[error("negative or non-finite weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl BisearchError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        BisearchError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        BisearchError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a graph document that failed validation
    pub fn invalid_graph(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        BisearchError::InvalidGraph {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a node id missing from the graph
    pub fn unknown_node(id: impl std::fmt::Debug) -> Self {
        BisearchError::UnknownNode {
            id: display_id(&id),
        }
    }

    /// Create an error for an edge weight the weighted search cannot order
    pub fn negative_weight(
        from: impl std::fmt::Debug,
        to: impl std::fmt::Debug,
        weight: f64,
    ) -> Self {
        BisearchError::NegativeWeight {
            from: display_id(&from),
            to: display_id(&to),
            weight,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            BisearchError::UnknownFormat(_)
            | BisearchError::UsageError(_)
            | BisearchError::InvalidValue { .. }
            | BisearchError::Unsupported { .. } => ExitCode::Usage,

            BisearchError::GraphNotFound { .. }
            | BisearchError::InvalidGraph { .. }
            | BisearchError::UnknownNode { .. }
            | BisearchError::NegativeWeight { .. } => ExitCode::Data,

            BisearchError::Io(_)
            | BisearchError::Yaml(_)
            | BisearchError::Json(_)
            | BisearchError::Toml(_)
            | BisearchError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            BisearchError::UnknownFormat(_) => "unknown_format",
            BisearchError::UsageError(_) => "usage_error",
            BisearchError::InvalidValue { .. } => "invalid_value",
            BisearchError::Unsupported { .. } => "unsupported",
            BisearchError::GraphNotFound { .. } => "graph_not_found",
            BisearchError::InvalidGraph { .. } => "invalid_graph",
            BisearchError::UnknownNode { .. } => "unknown_node",
            BisearchError::NegativeWeight { .. } => "negative_weight",
            BisearchError::Io(_) => "io_error",
            BisearchError::Yaml(_) => "yaml_error",
            BisearchError::Json(_) => "json_error",
            BisearchError::Toml(_) => "toml_error",
            BisearchError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Render a node id for messages without the quotes `Debug` adds to strings
fn display_id(id: &impl std::fmt::Debug) -> String {
    let rendered = format!("{:?}", id);
    rendered
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .map(str::to_string)
        .unwrap_or(rendered)
}

/// Result type alias for bisearch operations
pub type Result<T> = std::result::Result<T, BisearchError>;
