//! Named, leveled loggers for a small web application.
//!
//! ```
//! let logger = log_util::get_logger("app").unwrap();
//! logger.info("ready");
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod logging;

pub use config::{AppConfig, LoggingConfig};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use logging::{get_logger, LogLevel, Logger, LoggerRegistry, LoggingError};
