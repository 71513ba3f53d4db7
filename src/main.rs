//! Demo web application.
//!
//! Serves a page at `/` and an API route at `/api/hello`, both of which log
//! through named loggers from the process-wide registry.
//!
//! Configuration precedence: defaults, then `--config` file, then the
//! `LOG_*` environment variables, then command line flags.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use log_util::config::{load_config, validate_config, AppConfig, ConfigError};
use log_util::lifecycle::signals::shutdown_on_ctrl_c;
use log_util::logging::sink::default_filter;
use log_util::logging::{global_registry, init_global};
use log_util::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "log-util")]
#[command(about = "Demo server for named, leveled loggers", long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address, overrides server.bind_address
    #[arg(short, long)]
    bind: Option<String>,

    /// Minimum log level (error, warn, info, debug)
    #[arg(short, long)]
    log_level: Option<String>,
}

fn resolve_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    config.logging.apply_env(|key| std::env::var(key).ok());

    if let Some(bind) = &cli.bind {
        config.server.bind_address = bind.clone();
    }
    if let Some(level) = &cli.log_level {
        config.logging.min_level = Some(level.clone());
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let resolved = resolve_config(&cli);

    // The sink choice decides the default filter, so config comes first.
    let sink = resolved
        .as_ref()
        .map(|config| config.logging.sink)
        .unwrap_or_default();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(sink).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("log-util v{} starting", env!("CARGO_PKG_VERSION"));

    let config = resolved.inspect_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
    })?;

    tracing::info!(
        bind_address = %config.server.bind_address,
        min_level = %config.logging.threshold(),
        timestamps = config.logging.timestamps,
        "Configuration loaded"
    );

    init_global(&config.logging)?;
    let registry = Arc::clone(global_registry());

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Arc::new(Shutdown::new());
    let server_shutdown = shutdown.subscribe();
    let signal_shutdown = Arc::clone(&shutdown);
    tokio::spawn(async move {
        shutdown_on_ctrl_c(&signal_shutdown).await;
    });

    let server = HttpServer::new(config, registry);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
