//! Pulse: a liveness endpoint for monitoring and orchestration probes.
//!
//! Serves `GET /health`, answering with `{"status": "healthy", "timestamp": ...}`
//! for as long as the process is up and accepting connections.

pub mod config;
pub mod error;
pub mod health;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{Error, Result};

use config::AppConfig;
use routes::create_router;
use state::AppState;

/// Build the router from configuration and serve it until shutdown.
pub async fn run(config: AppConfig) -> Result<()> {
    let state = AppState::new(&config);
    let app = create_router(state);

    http::start_server(app, &config.http).await?;
    Ok(())
}
