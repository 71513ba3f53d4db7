//! Configuration validation.
//!
//! Semantic checks only; serde handles syntax. Returns every error found,
//! not just the first.

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::logging::LogLevel;

/// A single semantic problem in a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("logging.min_level {0:?} is not one of error, warn, info, debug")]
    UnknownLevel(String),

    #[error("server.bind_address {0:?} is not a socket address")]
    InvalidBindAddress(String),
}

/// Validate a loaded configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(level) = config.logging.min_level.as_deref() {
        if !level.trim().is_empty() && level.parse::<LogLevel>().is_err() {
            errors.push(ValidationError::UnknownLevel(level.to_string()));
        }
    }

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.server.bind_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
