// Rust guideline compliant 2026-10-18

//! Error types for the Tasksync core library.

use thiserror::Error;

/// Result type alias for Tasksync operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Tasksync operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Standard input was not a valid JSON document.
    #[error("Received invalid JSON from Claude Code")]
    InvalidJson(#[source] serde_json::Error),

    /// IO error occurred.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error while writing or reading the backup.
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// A value did not have the shape the hook expects.
    #[error("{0}")]
    UnexpectedShape(String),

    /// The user's home directory could not be resolved.
    #[error("could not determine home directory")]
    HomeNotFound,
}

impl Error {
    /// Returns true if the error came from parsing malformed input.
    #[must_use]
    pub fn is_invalid_json(&self) -> bool {
        matches!(self, Error::InvalidJson(_))
    }
}
