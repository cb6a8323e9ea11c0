//! HTTP server startup logic.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum_server::Handle;

use crate::config::HttpServerConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),
}

/// Start the HTTP server based on configuration.
///
/// Installs the signal-driven shutdown handler and blocks until the server
/// has drained and stopped.
pub async fn start_server(app: Router, config: &HttpServerConfig) -> Result<(), ServerError> {
    let addr = parse_addr(config)?;
    let handle = Handle::new();

    shutdown::setup_shutdown_handler(
        handle.clone(),
        Duration::from_secs(config.shutdown_grace_seconds),
    );

    serve(app, addr, handle).await
}

/// Bind `addr` and serve `app` until `handle` signals shutdown.
///
/// `handle.listening()` resolves to the bound address once the listener is
/// up, which is how callers learn the port when binding to port 0.
pub async fn serve(app: Router, addr: SocketAddr, handle: Handle) -> Result<(), ServerError> {
    tracing::info!(%addr, "Starting HTTP server");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

fn parse_addr(config: &HttpServerConfig) -> Result<SocketAddr, ServerError> {
    let addr = config.addr();
    addr.parse()
        .map_err(|source| ServerError::InvalidAddress { addr, source })
}
