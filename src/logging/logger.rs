//! Named logger handle.

use std::fmt;
use std::sync::Arc;

use crate::logging::record::LogRecord;
use crate::logging::sink::LogSink;
use crate::logging::types::LogLevel;

/// A logger bound to one subsystem name.
///
/// Loggers are normally obtained from a [`LoggerRegistry`](crate::logging::LoggerRegistry),
/// which hands out one shared instance per name. Emit calls never fail: if
/// the sink rejects a write the error is dropped.
pub struct Logger {
    name: String,
    threshold: LogLevel,
    timestamps: bool,
    sink: Arc<dyn LogSink>,
}

impl Logger {
    /// Create a logger; callers outside the crate go through a registry.
    pub(crate) fn new(
        name: String,
        threshold: LogLevel,
        timestamps: bool,
        sink: Arc<dyn LogSink>,
    ) -> Self {
        Self {
            name,
            threshold,
            timestamps,
            sink,
        }
    }

    /// Name this logger was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Least severe level this logger emits.
    pub fn threshold(&self) -> LogLevel {
        self.threshold
    }

    /// Whether a message at `level` would be written.
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.passes(self.threshold)
    }

    /// Emit `message` at `level` if the threshold allows it.
    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.is_enabled(level) {
            return;
        }

        let record = LogRecord::now(&self.name, level, message);
        let line = record.format_line(self.timestamps);
        let _ = self.sink.write_line(level, &line);
    }

    /// Log an error-level message.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Log a warning-level message.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Log an info-level message.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Log a debug-level message.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("threshold", &self.threshold)
            .field("timestamps", &self.timestamps)
            .finish_non_exhaustive()
    }
}
