//! Node endpoints.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
};

use super::NodeCreated;
use crate::db::NodeStore;
use crate::errors::AppError;
use crate::models::Node;
use crate::AppState;

/// Decode a request body into a node.
pub fn decode_node(body: &[u8]) -> Result<Node, AppError> {
    Ok(serde_json::from_slice(body)?)
}

/// Decode the body and persist the node.
///
/// The store is never touched when decoding fails.
pub async fn create_node(store: &dyn NodeStore, body: &[u8]) -> Result<(), AppError> {
    tracing::debug!(bytes = body.len(), "Received create node request");

    let node = decode_node(body)?;

    store.insert_node(&node).await?;

    tracing::info!(node_name = %node.node_name, "Node created");
    Ok(())
}

/// POST /nodes - Create a node from the raw request body.
///
/// A body that cannot be buffered (over the size limit, aborted upload) is a
/// bad request like any other undecodable body.
pub async fn post_node(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<NodeCreated, AppError> {
    let body = body.map_err(|e| {
        tracing::warn!("Error reading request body: {}", e);
        AppError::BadRequest(format!("Unreadable body: {}", e))
    })?;
    create_node(state.store.as_ref(), &body).await?;
    Ok(NodeCreated)
}
