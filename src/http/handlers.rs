//! Request handlers for the demo pages.
//!
//! Each handler looks up its logger by name on every call, the same way a
//! page or API route would, and emits a few leveled messages.

use axum::{extract::State, response::Html, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::http::server::AppState;
use crate::logging::Logger;

/// Body returned by `/api/hello`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HelloResponse {
    pub name: String,
}

const INDEX_HTML: &str = "<!DOCTYPE html>\n<html>\n<head><title>log-util</title></head>\n<body>\n<main>\n<h1>log-util</h1>\n<p>Loggers: <code>app</code>, <code>hello</code>. See <a href=\"/api/hello\">/api/hello</a>.</p>\n</main>\n</body>\n</html>\n";

fn logger(state: &AppState, name: &str) -> Option<Arc<Logger>> {
    match state.registry.get_logger(name) {
        Ok(logger) => Some(logger),
        Err(e) => {
            tracing::error!(logger = %name, error = %e, "Logger lookup failed");
            None
        }
    }
}

/// Page handler; logs through the `app` logger on every render.
pub async fn index(State(state): State<AppState>) -> Html<&'static str> {
    if let Some(logger) = logger(&state, "app") {
        logger.error("a error message from _app");
        logger.debug("a debug message from _app");
        logger.info("a info message from _app");
    }

    Html(INDEX_HTML)
}

/// API handler; logs through the `hello` logger.
pub async fn hello(State(state): State<AppState>) -> Json<HelloResponse> {
    if let Some(logger) = logger(&state, "hello") {
        logger.debug("a debug message from hello.");
    }

    Json(HelloResponse {
        name: "John Doe".to_string(),
    })
}
