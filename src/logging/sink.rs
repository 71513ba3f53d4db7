//! Output sinks for formatted log lines.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::config::SinkKind;
use crate::logging::types::LogLevel;

/// Destination for formatted log lines.
///
/// # Thread Safety
///
/// Implementations are shared between every logger of a registry and must
/// write each line atomically with respect to other callers.
pub trait LogSink: Send + Sync {
    /// Write one already formatted line (without trailing newline).
    fn write_line(&self, level: LogLevel, line: &str) -> io::Result<()>;
}

/// Writes lines to the process's standard error stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write_line(&self, _level: LogLevel, line: &str) -> io::Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        let mut stderr = io::stderr().lock();
        stderr.write_all(buf.as_bytes())?;
        stderr.flush()
    }
}

/// Keeps lines in memory so they can be inspected later.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far, in write order.
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Drop every captured line.
    pub fn clear(&self) {
        match self.lines.lock() {
            Ok(mut guard) => guard.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, _level: LogLevel, line: &str) -> io::Result<()> {
        let mut guard = self
            .lines
            .lock()
            .map_err(|_| io::Error::other("memory sink lock poisoned"))?;
        guard.push(line.to_string());
        Ok(())
    }
}

/// Target used for every event emitted by [`TracingSink`].
pub const TRACING_SINK_TARGET: &str = "log_util::sink";

/// Forwards lines to the `tracing` subscriber at the matching level.
///
/// The subscriber's filter must admit [`TRACING_SINK_TARGET`] at every level
/// or records the logger already accepted get dropped; see [`default_filter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write_line(&self, level: LogLevel, line: &str) -> io::Result<()> {
        match level {
            LogLevel::Error => tracing::error!(target: TRACING_SINK_TARGET, "{}", line),
            LogLevel::Warn => tracing::warn!(target: TRACING_SINK_TARGET, "{}", line),
            LogLevel::Info => tracing::info!(target: TRACING_SINK_TARGET, "{}", line),
            LogLevel::Debug => tracing::debug!(target: TRACING_SINK_TARGET, "{}", line),
        }
        Ok(())
    }
}

/// Build the sink selected in configuration.
pub fn sink_for(kind: SinkKind) -> Arc<dyn LogSink> {
    match kind {
        SinkKind::Stderr => Arc::new(StderrSink),
        SinkKind::Tracing => Arc::new(TracingSink),
    }
}

/// Default `EnvFilter` directives for the binary.
///
/// With the tracing sink the logger's own threshold is the only gate, so the
/// sink target is opened up to every level.
pub fn default_filter(kind: SinkKind) -> String {
    let base = "log_util=info,tower_http=info";
    match kind {
        SinkKind::Stderr => base.to_string(),
        SinkKind::Tracing => format!("{},{}=trace", base, TRACING_SINK_TARGET),
    }
}
