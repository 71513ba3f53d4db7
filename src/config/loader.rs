//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::{AppConfig, LoggingConfig, SinkKind};
use crate::config::validation::{validate_config, ValidationError};
use crate::logging::LogLevel;

/// Environment variable holding the minimum level name.
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
/// Environment variable enabling timestamp prefixes.
pub const ENV_LOG_TIMESTAMPS: &str = "LOG_TIMESTAMPS";
/// Environment variable selecting the sink.
pub const ENV_LOG_SINK: &str = "LOG_SINK";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

impl LoggingConfig {
    /// Defaults overridden by `LOG_LEVEL`, `LOG_TIMESTAMPS` and `LOG_SINK`.
    ///
    /// See [`apply_env`](Self::apply_env) for how each value is interpreted.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Apply environment overrides using `lookup` to read variables.
    ///
    /// Unrecognized values leave the current setting untouched and log a
    /// warning; a mistyped `LOG_LEVEL` never widens the threshold. An empty
    /// `LOG_LEVEL` clears the threshold so every level emits.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            let level = level.trim();
            if level.is_empty() {
                self.min_level = None;
            } else if level.parse::<LogLevel>().is_ok() {
                self.min_level = Some(level.to_string());
            } else {
                tracing::warn!(value = %level, "Ignoring unknown {}", ENV_LOG_LEVEL);
            }
        }

        if let Some(flag) = lookup(ENV_LOG_TIMESTAMPS) {
            match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.timestamps = true,
                "0" | "false" | "no" | "off" | "" => self.timestamps = false,
                other => tracing::warn!(value = %other, "Ignoring unknown {}", ENV_LOG_TIMESTAMPS),
            }
        }

        if let Some(sink) = lookup(ENV_LOG_SINK) {
            match sink.trim().to_ascii_lowercase().as_str() {
                "stderr" => self.sink = SinkKind::Stderr,
                "tracing" => self.sink = SinkKind::Tracing,
                other => tracing::warn!(value = %other, "Ignoring unknown {}", ENV_LOG_SINK),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[logging]\nmin_level = \"info\"\ntimestamps = true\nsink = \"tracing\"\n\n[server]\nbind_address = \"0.0.0.0:4000\""
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.logging.threshold(), LogLevel::Info);
        assert!(config.logging.timestamps);
        assert_eq!(config.logging.sink, SinkKind::Tracing);
        assert_eq!(config.server.bind_address, "0.0.0.0:4000");
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/log-util.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[logging\nmin_level = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error_message() {
        let err = parse_config("[logging]\nmin_level = \"chatty\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref v) if v.len() == 1));
        assert!(err.to_string().contains("chatty"));
    }

    #[test]
    fn test_apply_env_overrides() {
        let vars = env(&[
            (ENV_LOG_LEVEL, "warn"),
            (ENV_LOG_TIMESTAMPS, "true"),
            (ENV_LOG_SINK, "tracing"),
        ]);
        let mut config = LoggingConfig::default();
        config.apply_env(|k| vars.get(k).cloned());

        assert_eq!(config.threshold(), LogLevel::Warn);
        assert!(config.timestamps);
        assert_eq!(config.sink, SinkKind::Tracing);
    }

    #[test]
    fn test_apply_env_unset_keeps_defaults() {
        let mut config = LoggingConfig::default();
        config.apply_env(|_| None);
        assert_eq!(config, LoggingConfig::default());
    }

    #[test]
    fn test_apply_env_empty_level_means_all() {
        let vars = env(&[(ENV_LOG_LEVEL, "")]);
        let mut config = LoggingConfig {
            min_level: Some("error".to_string()),
            ..LoggingConfig::default()
        };
        config.apply_env(|k| vars.get(k).cloned());
        assert_eq!(config.min_level, None);
        assert_eq!(config.threshold(), LogLevel::Debug);
    }

    #[test]
    fn test_apply_env_unknown_level_keeps_prior() {
        let vars = env(&[(ENV_LOG_LEVEL, "eror")]);

        let mut config = LoggingConfig {
            min_level: Some("error".to_string()),
            ..LoggingConfig::default()
        };
        config.apply_env(|k| vars.get(k).cloned());
        assert_eq!(config.min_level.as_deref(), Some("error"));
        assert_eq!(config.threshold(), LogLevel::Error);

        let mut config = LoggingConfig::default();
        config.apply_env(|k| vars.get(k).cloned());
        assert_eq!(config.min_level, None);
    }

    #[test]
    fn test_apply_env_ignores_bad_values() {
        let vars = env(&[(ENV_LOG_TIMESTAMPS, "sometimes"), (ENV_LOG_SINK, "syslog")]);
        let mut config = LoggingConfig::default();
        config.apply_env(|k| vars.get(k).cloned());
        assert!(!config.timestamps);
        assert_eq!(config.sink, SinkKind::Stderr);
    }
}
