//! HTTP demo subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, trace layer)
//!     → handlers.rs (GET /, GET /api/hello)
//!         → LoggerRegistry::get_logger("app" | "hello")
//!     → HTML / JSON response
//! ```

pub mod handlers;
pub mod server;

pub use handlers::HelloResponse;
pub use server::{AppState, HttpServer};
