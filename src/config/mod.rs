//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)                 environment (LOG_LEVEL, ...)
//!     → loader.rs (parse)                → loader.rs (apply_env)
//!     → validation.rs (semantic checks)  │
//!     → AppConfig ───────────────────────┴→ LoggingConfig
//!     → LoggerRegistry / HttpServer
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; there is no reload
//! - All fields have defaults to allow minimal configs
//! - Environment lookups go through a closure so tests never touch the
//!   process environment

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{AppConfig, LoggingConfig, ServerConfig, SinkKind};
pub use validation::{validate_config, ValidationError};
