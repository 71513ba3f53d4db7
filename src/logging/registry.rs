//! Name-keyed logger registry.

use dashmap::DashMap;
use std::sync::{Arc, OnceLock};

use crate::config::LoggingConfig;
use crate::logging::logger::Logger;
use crate::logging::sink::{sink_for, LogSink};
use crate::logging::types::{validate_name, LogLevel, LoggingError};

/// Creates and caches one [`Logger`] per name.
///
/// Every logger created by a registry shares its threshold, timestamp setting
/// and sink. The registry has no teardown; loggers live as long as it does.
pub struct LoggerRegistry {
    loggers: DashMap<String, Arc<Logger>>,
    threshold: LogLevel,
    timestamps: bool,
    sink: Arc<dyn LogSink>,
}

impl LoggerRegistry {
    /// Create a registry writing to the sink selected in `config`.
    pub fn new(config: &LoggingConfig) -> Self {
        Self::with_sink(config, sink_for(config.sink))
    }

    /// Create a registry writing to an explicit sink.
    pub fn with_sink(config: &LoggingConfig, sink: Arc<dyn LogSink>) -> Self {
        Self {
            loggers: DashMap::new(),
            threshold: config.threshold(),
            timestamps: config.timestamps,
            sink,
        }
    }

    /// Return the logger for `name`, creating it on first use.
    ///
    /// Concurrent first requests for one name all receive the same instance.
    pub fn get_logger(&self, name: &str) -> Result<Arc<Logger>, LoggingError> {
        validate_name(name)?;

        if let Some(existing) = self.loggers.get(name) {
            return Ok(Arc::clone(existing.value()));
        }

        // The entry holds the shard write lock, so only one creation can win.
        let logger = self
            .loggers
            .entry(name.to_string())
            .or_insert_with(|| {
                tracing::debug!(logger = %name, threshold = %self.threshold, "Logger created");
                Arc::new(Logger::new(
                    name.to_string(),
                    self.threshold,
                    self.timestamps,
                    Arc::clone(&self.sink),
                ))
            })
            .value()
            .clone();

        Ok(logger)
    }

    /// Default threshold given to new loggers.
    pub fn threshold(&self) -> LogLevel {
        self.threshold
    }

    /// Whether a logger for `name` has been created.
    pub fn contains(&self, name: &str) -> bool {
        self.loggers.contains_key(name)
    }

    /// Names of all loggers created so far, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.iter().map(|r| r.key().clone()).collect();
        names.sort();
        names
    }

    /// Number of loggers created so far.
    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    /// Whether no logger has been created yet.
    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new(&LoggingConfig::default())
    }
}

static GLOBAL: OnceLock<Arc<LoggerRegistry>> = OnceLock::new();

/// Install the process-wide registry with an explicit config.
///
/// Must run before the first [`get_logger`] call; afterwards the global
/// registry is fixed and this returns [`LoggingError::AlreadyInitialized`].
pub fn init_global(config: &LoggingConfig) -> Result<(), LoggingError> {
    let mut installed = false;
    GLOBAL.get_or_init(|| {
        installed = true;
        Arc::new(LoggerRegistry::new(config))
    });

    if installed {
        tracing::info!(threshold = %config.threshold(), sink = ?config.sink, "Logger registry initialized");
        Ok(())
    } else {
        Err(LoggingError::AlreadyInitialized)
    }
}

/// The process-wide registry, created from the environment on first access.
pub fn global_registry() -> &'static Arc<LoggerRegistry> {
    GLOBAL.get_or_init(|| Arc::new(LoggerRegistry::new(&LoggingConfig::from_env())))
}

/// Return the process-wide logger for `name`.
pub fn get_logger(name: &str) -> Result<Arc<Logger>, LoggingError> {
    global_registry().get_logger(name)
}
