//! Named, leveled loggers.
//!
//! # Data Flow
//! ```text
//! get_logger("app")
//!     → registry.rs (lookup, or create once per name)
//!     → Arc<Logger>
//!
//! logger.info("ready")
//!     → logger.rs (threshold check)
//!     → record.rs (LogRecord → "[INFO] app: ready")
//!     → sink.rs (stderr / memory / tracing)
//! ```
//!
//! # Design Decisions
//! - One logger instance per name, shared via Arc
//! - Registries are plain values; the global one is only a convenience
//! - Emit calls never fail; sink errors are dropped
//! - Threshold comes from `LoggingConfig`, read once per registry

pub mod logger;
pub mod record;
pub mod registry;
pub mod sink;
pub mod types;

pub use logger::Logger;
pub use record::LogRecord;
pub use registry::{get_logger, global_registry, init_global, LoggerRegistry};
pub use sink::{LogSink, MemorySink, StderrSink, TracingSink};
pub use types::{LogLevel, LoggingError};
