//! Error types for pondo
//!
//! Exit codes:
//! - 0: Success, and every reported-but-recoverable failure
//! - 1: Fatal (store could not be initialized)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for pondo CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FATAL: i32 = 1;
}

/// Main error type for pondo operations
#[derive(Error, Debug)]
pub enum Error {
    // Reported, process continues (exit code 0)
    #[error("{0}")]
    Validation(String),

    #[error("pondo is not initialized (missing {0})")]
    NotInitialized(PathBuf),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Tasks file is corrupt: {path}: {source}")]
    CorruptData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not generate an unused task ID after {0} attempts")]
    IdExhausted(usize),

    #[error("Could not determine the home directory")]
    HomeNotFound,

    // Fatal (exit code 1)
    #[error("Failed to initialize pondo in {path}: {source}")]
    InitFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InitFailed { .. } => exit_codes::FATAL,

            Error::HomeNotFound
            | Error::Validation(_)
            | Error::NotInitialized(_)
            | Error::TaskNotFound(_)
            | Error::CorruptData { .. }
            | Error::Io(_)
            | Error::Json(_)
            | Error::IdExhausted(_) => exit_codes::SUCCESS,
        }
    }

    /// True when the process must terminate with a non-zero status.
    pub fn is_fatal(&self) -> bool {
        self.exit_code() != exit_codes::SUCCESS
    }

    /// Stable machine-readable name of the error category.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Validation(_) => "validation_error",
            Error::NotInitialized(_) => "not_initialized",
            Error::TaskNotFound(_) => "not_found",
            Error::CorruptData { .. } => "corrupt_data",
            Error::Io(_) | Error::Json(_) | Error::IdExhausted(_) => "io_failure",
            Error::HomeNotFound => "no_home",
            Error::InitFailed { .. } => "fatal",
        }
    }

    /// Suggested next step for the user, if there is an obvious one.
    pub fn hint(&self) -> Option<String> {
        match self {
            Error::NotInitialized(_) => Some("run `pondo init` first".to_string()),
            Error::TaskNotFound(_) => Some("run `pondo list` to see task IDs".to_string()),
            Error::CorruptData { path, .. } => Some(format!(
                "fix or remove {} and run `pondo init`",
                path.display()
            )),
            Error::HomeNotFound => Some("pass --home <DIR> or set PONDO_HOME".to_string()),
            _ => None,
        }
    }

    /// Structured context for JSON error output.
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Error::NotInitialized(path) => Some(serde_json::json!({
                "tasks_file": path.display().to_string(),
            })),
            Error::TaskNotFound(id) => Some(serde_json::json!({ "id": id })),
            Error::CorruptData { path, source } => Some(serde_json::json!({
                "tasks_file": path.display().to_string(),
                "line": source.line(),
                "column": source.column(),
            })),
            Error::InitFailed { path, .. } => Some(serde_json::json!({
                "path": path.display().to_string(),
            })),
            _ => None,
        }
    }
}

/// Result type alias for pondo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wrapper for displaying errors in JSON format
#[derive(serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub kind: &'static str,
    pub code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        JsonError {
            error: err.to_string(),
            kind: err.kind(),
            code: err.exit_code(),
            details: err.details(),
        }
    }
}
