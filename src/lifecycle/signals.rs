//! OS signal handling.

use crate::lifecycle::shutdown::Shutdown;

/// Wait for Ctrl+C and fire the shutdown signal.
///
/// If the handler cannot be installed the error is logged and shutdown is
/// triggered right away rather than leaving the server unstoppable.
pub async fn shutdown_on_ctrl_c(shutdown: &Shutdown) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
    } else {
        tracing::info!("Ctrl+C received");
    }
    shutdown.trigger();
}
