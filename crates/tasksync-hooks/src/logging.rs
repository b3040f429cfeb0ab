// Rust guideline compliant 2026-10-18

//! Tracing setup for the hook binary.
//!
//! Tracing is off unless a level is requested, so the diagnostic stream only
//! carries the hook's own lines.

use std::fs::OpenOptions;
use std::path::PathBuf;
use thiserror::Error;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Logging options for the hook binary.
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Logging level, or `off`.
    pub log_level: String,
    /// Optional log file path; stderr otherwise.
    pub log_file: Option<PathBuf>,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            log_level: "off".to_string(),
            log_file: None,
        }
    }
}

/// Logging setup errors.
#[derive(Debug, Error)]
pub enum LogError {
    /// The log file could not be opened.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid log level provided.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Installs the global tracing subscriber.
///
/// # Arguments
///
/// * `options` - Level and destination
///
/// # Returns
///
/// A guard that flushes the file writer on drop, when logging to a file.
///
/// # Errors
///
/// Returns an error if the level is unknown or the log file cannot be opened.
pub fn init_tracing(options: &LogOptions) -> Result<Option<WorkerGuard>, LogError> {
    let Some(level) = parse_log_level(&options.log_level)? else {
        return Ok(None);
    };

    if let Some(path) = &options.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}

/// Parses a level name; `off` yields `None`.
///
/// # Errors
///
/// Returns `LogError::InvalidLogLevel` for unknown names.
pub fn parse_log_level(level: &str) -> Result<Option<Level>, LogError> {
    match level.to_lowercase().as_str() {
        "off" => Ok(None),
        "error" => Ok(Some(Level::ERROR)),
        "warn" => Ok(Some(Level::WARN)),
        "info" => Ok(Some(Level::INFO)),
        "debug" => Ok(Some(Level::DEBUG)),
        other => Err(LogError::InvalidLogLevel(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("off").unwrap(), None);
        assert_eq!(parse_log_level("DEBUG").unwrap(), Some(Level::DEBUG));
        assert_eq!(parse_log_level("warn").unwrap(), Some(Level::WARN));
    }

    #[test]
    fn test_parse_log_level_invalid() {
        let err = parse_log_level("loud").unwrap_err();
        assert_eq!(err.to_string(), "Invalid log level: loud");
    }

    #[test]
    fn test_init_tracing_off_installs_nothing() {
        let guard = init_tracing(&LogOptions::default()).unwrap();
        assert!(guard.is_none());
    }
}
