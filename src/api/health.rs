//! Health check endpoint.

use axum::{extract::State, http::StatusCode};

use crate::AppState;

/// GET /health - Report whether the database is reachable.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "OK"),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable")
        }
    }
}
