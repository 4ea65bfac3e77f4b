//! Startup orchestration.
//!
//! # Responsibilities
//! - Report configuration warnings
//! - Start the optional metrics endpoint
//! - Bind the listener and begin accepting traffic

use tokio::net::TcpListener;

use crate::config::validation::collect_warnings;
use crate::config::DutyConfig;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;

/// Serve `config` until `shutdown` fires.
pub async fn run(config: DutyConfig, shutdown: &Shutdown) -> Result<(), std::io::Error> {
    for warning in collect_warnings(&config) {
        tracing::warn!(%warning, "Configuration warning");
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        routes = config.routes.len(),
        status = %config.status,
        reset = %config.reset,
        set = %config.set,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics endpoint");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    HttpServer::new(config)
        .run(listener, shutdown.subscribe())
        .await
}
