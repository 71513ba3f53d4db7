//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Root configuration for the demo application.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Logger registry settings.
    pub logging: LoggingConfig,

    /// HTTP server settings.
    pub server: ServerConfig,
}

/// Where formatted log lines go.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Standard error, one line per record.
    #[default]
    Stderr,
    /// The process's `tracing` subscriber.
    Tracing,
}

/// Logger registry configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level name (error, warn, info, debug). Unset means all levels emit.
    pub min_level: Option<String>,

    /// Prefix each line with an RFC 3339 UTC timestamp.
    pub timestamps: bool,

    /// Output sink.
    pub sink: SinkKind,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            min_level: None,
            timestamps: false,
            sink: SinkKind::Stderr,
        }
    }
}

impl LoggingConfig {
    /// Effective threshold. Unset, blank or unparseable levels mean `Debug`;
    /// `validate_config` reports the unparseable case for file configs.
    pub fn threshold(&self) -> LogLevel {
        self.min_level
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .and_then(|s| s.parse().ok())
            .unwrap_or(LogLevel::Debug)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:3000").
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}
