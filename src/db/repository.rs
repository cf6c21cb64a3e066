//! Database repository for node writes.
//!
//! Values are always bound as statement parameters, never formatted into SQL.

use async_trait::async_trait;
use sqlx::{Connection, PgPool};

use super::NodeStore;
use crate::errors::AppError;
use crate::models::Node;

/// Statement used to persist a node.
pub const INSERT_NODE_SQL: &str =
    "INSERT INTO nodes (node_name, node_description) VALUES ($1, $2)";

/// PostgreSQL-backed node repository.
#[derive(Clone)]
pub struct Repository {
    pool: PgPool,
}

impl Repository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NodeStore for Repository {
    async fn insert_node(&self, node: &Node) -> Result<(), AppError> {
        sqlx::query(INSERT_NODE_SQL)
            .bind(&node.node_name)
            .bind(&node.node_description)
            .execute(&self.pool)
            .await?;

        if !node.sites.is_empty() {
            tracing::debug!(
                sites = node.sites.len(),
                "child_sites are not persisted with the node"
            );
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        let mut conn = self.pool.acquire().await?;
        conn.ping().await?;
        Ok(())
    }
}
