//! Chandra HTTP service.
//!
//! Reads configuration from environment variables (see [`config::Config`]),
//! then serves the lunar snapshot API until SIGINT.
//!
//! ```bash
//! CHANDRA_PORT=8080 CHANDRA_LOG_LEVEL=chandra_search=debug,info \
//!   cargo run --bin chandra-server --release
//! curl 'localhost:8080/moon?iso=2025-08-08T12:00:00Z'
//! ```

use std::sync::Arc;

use anyhow::Context;
use chandra_ephem::AnalyticEphemeris;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

mod config;
mod error;
mod response;
mod routes;

use config::Config;
use routes::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // subscriber first, so configuration warnings are visible
    let filter =
        EnvFilter::try_from_env("CHANDRA_LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).compact().init();

    let config = Config::from_env();

    let addr = config.socket_addr()?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        %addr,
        log_level = %config.log_level,
        ayanamsha = config.ayanamsha.name(),
        request_timeout_ms = config.request_timeout_ms,
        search_deadline_ms = config.search_deadline_ms,
        "chandra server starting"
    );

    let state = Arc::new(AppState {
        source: Arc::new(AnalyticEphemeris::new()),
        snapshot: config.snapshot_config(),
        request_timeout: config.request_timeout(),
    });

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on http://{addr}");

    axum::serve(listener, routes::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("chandra server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // no signal handler available: run until killed
        std::future::pending::<()>().await;
    }
}
