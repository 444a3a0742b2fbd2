//! aecdash - BIM data dashboard backend
//!
//! Binary entry point: initializes logging, loads configuration, wires the
//! application context, and serves the HTTP API.

use std::net::SocketAddr;
use std::sync::Arc;

use aecdash_domain::{AecError, Result};
use aecdash_server::{build_router, AppContext};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging first so .env loading is visible
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load environment variables from .env file
    match dotenvy::dotenv() {
        Ok(path) => tracing::info!(path = %path.display(), "Loaded .env file"),
        Err(e) => tracing::debug!(error = %e, "No .env file loaded"),
    }

    let config = aecdash_infra::config::load()?;
    let port = config.server.port;

    let ctx = Arc::new(AppContext::new(config)?);
    let app = build_router(ctx);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AecError::Config(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(%addr, "aecdash listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AecError::Internal(format!("Server error: {e}")))?;

    tracing::info!("aecdash stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
