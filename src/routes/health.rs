//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns 200 OK with a JSON status and the
//! current time whenever the process is running and accepting connections.
//! Used by Kubernetes, ECS, systemd, and load balancers to verify the service is alive.

use axum::{extract::State, Json};

use crate::health::HealthStatus;
use crate::state::AppState;

/// Health check handler.
///
/// Stateless and infallible: reads the clock, builds a fresh `HealthStatus`,
/// and returns it. Nothing is shared between invocations.
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus::now(state.timestamp_format))
}
