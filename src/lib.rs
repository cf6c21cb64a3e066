//! CMS node intake service
//!
//! Accepts content nodes as JSON and stores them in PostgreSQL. Served either
//! as a long-running HTTP server or as a serverless function.

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use db::NodeStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn NodeStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn NodeStore>) -> Self {
        Self { store }
    }
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/nodes", post(api::post_node))
        .route("/health", get(api::health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod testing;
