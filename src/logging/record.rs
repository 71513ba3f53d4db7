//! Per-call log record and its line format.

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;

use crate::logging::types::LogLevel;

/// A single emit call, built and consumed immediately.
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    pub timestamp: DateTime<Utc>,
    pub name: &'a str,
    pub level: LogLevel,
    pub message: &'a str,
}

impl<'a> LogRecord<'a> {
    /// Create a record stamped with the current time.
    pub fn now(name: &'a str, level: LogLevel, message: &'a str) -> Self {
        Self {
            timestamp: Utc::now(),
            name,
            level,
            message,
        }
    }

    /// Render as `[<LEVEL>] <name>: <message>`, optionally prefixed with an
    /// RFC 3339 timestamp.
    pub fn format_line(&self, with_timestamp: bool) -> String {
        if with_timestamp {
            format!(
                "{} {}",
                self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
                self
            )
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: ", self.level, self.name)?;
        write_escaped(f, self.message)
    }
}

/// Write `message` with control characters escaped so a record always
/// renders as a single line.
fn write_escaped(f: &mut fmt::Formatter<'_>, message: &str) -> fmt::Result {
    let mut rest = message;
    while let Some(pos) = rest.find(char::is_control) {
        f.write_str(&rest[..pos])?;
        let c = rest[pos..].chars().next().unwrap_or_default();
        write!(f, "{}", c.escape_debug())?;
        rest = &rest[pos + c.len_utf8()..];
    }
    f.write_str(rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_without_timestamp() {
        let record = LogRecord::now("app", LogLevel::Error, "boom");
        assert_eq!(record.format_line(false), "[ERROR] app: boom");
    }

    #[test]
    fn test_format_empty_message() {
        let record = LogRecord::now("app", LogLevel::Info, "");
        assert_eq!(record.format_line(false), "[INFO] app: ");
    }

    #[test]
    fn test_control_characters_escaped() {
        let record = LogRecord::now("app", LogLevel::Info, "ready\n[ERROR] admin: forged\r\t\u{1b}");
        let line = record.format_line(false);
        assert_eq!(line, "[INFO] app: ready\\n[ERROR] admin: forged\\r\\t\\u{1b}");
        assert_eq!(line.lines().count(), 1);
    }

    #[test]
    fn test_non_ascii_message_untouched() {
        let record = LogRecord::now("app", LogLevel::Info, "naïve café ✓");
        assert_eq!(record.format_line(false), "[INFO] app: naïve café ✓");
    }

    #[test]
    fn test_format_with_timestamp() {
        let record = LogRecord {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap(),
            name: "hello",
            level: LogLevel::Debug,
            message: "trace",
        };
        assert_eq!(
            record.format_line(true),
            "2024-03-01T12:30:05.000Z [DEBUG] hello: trace"
        );
    }
}
