//! Error types and exit codes for ravel
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid vertices or weights)
//! - 3: Data error (missing or malformed graph file)

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes reported by the ravel binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or malformed graph file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during ravel operations
///
/// Disconnection and unreachability are deliberately *not* represented here:
/// they are ordinary outcomes carried by [`crate::graph::MstResult`] and
/// [`crate::graph::PathResult`].
#[derive(Error, Debug)]
pub enum RavelError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("vertex {index} is out of range (graph has {count} vertices)")]
    InvalidVertexIndex { index: usize, count: usize },

    #[error("self-loops are not allowed (vertex {0} to itself)")]
    SelfLoop(usize),

    #[error("invalid edge weight {0} (must be a finite, non-negative number)")]
    InvalidWeight(f64),

    #[error("unknown vertex: {0} (expected an index like 2 or a label like C)")]
    UnknownVertex(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("graph file not found: {}", path.display())]
    GraphFileNotFound { path: PathBuf },

    #[error("malformed graph file {}: {reason}", path.display())]
    MalformedGraphFile { path: PathBuf, reason: String },

    #[error("invalid config {}: {reason}", path.display())]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl RavelError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RavelError::UnknownFormat(_)
            | RavelError::InvalidVertexIndex { .. }
            | RavelError::SelfLoop(_)
            | RavelError::InvalidWeight(_)
            | RavelError::UnknownVertex(_)
            | RavelError::UsageError(_) => ExitCode::Usage,

            RavelError::GraphFileNotFound { .. }
            | RavelError::MalformedGraphFile { .. }
            | RavelError::InvalidConfig { .. } => ExitCode::Data,

            RavelError::Io(_) | RavelError::Json(_) | RavelError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier used in the JSON envelope
    fn error_type(&self) -> &'static str {
        match self {
            RavelError::UnknownFormat(_) => "unknown_format",
            RavelError::InvalidVertexIndex { .. } => "invalid_vertex_index",
            RavelError::SelfLoop(_) => "self_loop",
            RavelError::InvalidWeight(_) => "invalid_weight",
            RavelError::UnknownVertex(_) => "unknown_vertex",
            RavelError::UsageError(_) => "usage_error",
            RavelError::GraphFileNotFound { .. } => "graph_file_not_found",
            RavelError::MalformedGraphFile { .. } => "malformed_graph_file",
            RavelError::InvalidConfig { .. } => "invalid_config",
            RavelError::Io(_) => "io_error",
            RavelError::Json(_) => "json_error",
            RavelError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for ravel operations
pub type Result<T> = std::result::Result<T, RavelError>;
