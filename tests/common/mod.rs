//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use log_util::config::{AppConfig, LoggingConfig};
use log_util::logging::{LoggerRegistry, MemorySink};
use log_util::{HttpServer, Shutdown};

/// A running demo server whose loggers write to memory.
pub struct TestServer {
    pub addr: SocketAddr,
    pub sink: MemorySink,
    pub registry: Arc<LoggerRegistry>,
    pub shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Registry with the given threshold writing into a fresh memory sink.
pub fn memory_registry(min_level: Option<&str>) -> (Arc<LoggerRegistry>, MemorySink) {
    let config = LoggingConfig {
        min_level: min_level.map(str::to_string),
        ..LoggingConfig::default()
    };
    let sink = MemorySink::new();
    let registry = Arc::new(LoggerRegistry::with_sink(&config, Arc::new(sink.clone())));
    (registry, sink)
}

/// Start the demo server on an ephemeral port.
pub async fn start_server(min_level: Option<&str>) -> TestServer {
    let (registry, sink) = memory_registry(min_level);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(AppConfig::default(), Arc::clone(&registry));
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer {
        addr,
        sink,
        registry,
        shutdown,
    }
}

/// HTTP client that never pools or proxies.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
