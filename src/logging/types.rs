//! Level and name types plus error definitions for the logging facility.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Severity of a log message.
///
/// Variants are declared from most to least severe, so `Error < Debug` under
/// the derived ordering. A message is emitted when `level <= threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Failures the caller should look at.
    Error,
    /// Something unexpected that did not stop the operation.
    Warn,
    /// General information.
    Info,
    /// Debugging detail.
    Debug,
}

impl LogLevel {
    /// All levels, most severe first.
    pub const ALL: [LogLevel; 4] = [LogLevel::Error, LogLevel::Warn, LogLevel::Info, LogLevel::Debug];

    /// Upper-case label used in formatted output.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Whether a message at `self` passes the given threshold.
    pub fn passes(&self, threshold: LogLevel) -> bool {
        *self <= threshold
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            _ => Err(LoggingError::UnknownLevel(s.to_string())),
        }
    }
}

/// Errors produced by the logging facility.
///
/// Emit calls never return these; only registry access and level parsing do.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoggingError {
    /// Logger name was empty or malformed.
    #[error("Invalid logger name: {0}")]
    InvalidArgument(String),

    /// Level string did not name a known level.
    #[error("Unknown log level: {0:?}")]
    UnknownLevel(String),

    /// The global registry was already created.
    #[error("Global logger registry already initialized")]
    AlreadyInitialized,
}

/// Check that `name` can be used as a registry key.
///
/// Rejects empty and whitespace-only names, and names containing control
/// characters since they would break the one-line-per-record output.
pub fn validate_name(name: &str) -> Result<(), LoggingError> {
    if name.trim().is_empty() {
        return Err(LoggingError::InvalidArgument(
            "logger name must not be empty".to_string(),
        ));
    }
    if name.chars().any(char::is_control) {
        return Err(LoggingError::InvalidArgument(format!(
            "logger name {:?} contains control characters",
            name
        )));
    }
    Ok(())
}
