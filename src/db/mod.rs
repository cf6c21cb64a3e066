//! Database module for PostgreSQL persistence.
//!
//! One pool is built per process and shared by every request.

mod repository;

pub use repository::*;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;
use crate::errors::AppError;
use crate::models::Node;

/// Persistence operations the request handlers depend on.
#[async_trait]
pub trait NodeStore: Send + Sync {
    /// Insert the node's name and description as a new row.
    async fn insert_node(&self, node: &Node) -> Result<(), AppError>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}

/// Build the connection pool.
///
/// Connections are established lazily, so an unreachable database does not
/// prevent startup. Requests fail with a database error until it comes back.
pub fn init_pool(config: &DatabaseConfig) -> PgPool {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
        .ssl_mode(config.ssl_mode);

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy_with(options)
}
