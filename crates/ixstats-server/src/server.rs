//! Dashboard HTTP server lifecycle management.
//!
//! Provides [`start_server`] which binds to a TCP port and runs the
//! Axum server until the process is terminated, and [`spawn_server`]
//! for running it on a background Tokio task.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// Configuration for the dashboard server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
        }
    }
}

/// Errors that can occur when starting or running the dashboard server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}

/// Start the dashboard HTTP server.
///
/// Binds to the configured address, builds the router, and serves
/// requests until the process is terminated. Returns `Ok(())` on
/// clean shutdown, or an error if binding or serving fails.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind or the server
/// encounters a fatal I/O error.
pub async fn start_server(config: &ServerConfig, state: Arc<AppState>) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| ServerError::Bind(format!("invalid address: {e}")))?;

    let router = build_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;

    info!(%addr, "Dashboard server listening");

    axum::serve(listener, router)
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))?;

    Ok(())
}

/// Spawn the dashboard HTTP server on a background Tokio task.
///
/// The server runs until the Tokio runtime is shut down or the task is
/// aborted. The caller should hold the returned handle and abort or
/// await it during clean shutdown.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the configured address does not
/// parse; bind failures after spawn are logged by the task.
pub async fn spawn_server(
    config: ServerConfig,
    state: Arc<AppState>,
) -> Result<JoinHandle<()>, ServerError> {
    // Verify the address is parseable before spawning the background
    // task, so obvious misconfigurations fail the caller directly.
    let addr_str = format!("{}:{}", config.host, config.port);
    let _: SocketAddr = addr_str
        .parse()
        .map_err(|e| ServerError::Bind(format!("invalid address {addr_str}: {e}")))?;

    let port = config.port;
    let handle = tokio::spawn(async move {
        if let Err(e) = start_server(&config, state).await {
            tracing::error!(error = %e, "Dashboard server exited with error");
        }
    });

    info!(port, "Dashboard server spawned on background task");

    Ok(handle)
}
