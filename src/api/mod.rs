//! Request handling for the node service.
//!
//! The same create-node operation is exposed over HTTP (axum) and as an API
//! Gateway proxy handler for the serverless binary.

mod gateway;
mod health;
mod nodes;

pub use gateway::*;
pub use health::*;
pub use nodes::*;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// Body returned after a node has been stored.
pub const NODE_CREATED: &str = "node created successfully";

/// Success response for a created node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeCreated;

impl IntoResponse for NodeCreated {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            NODE_CREATED,
        )
            .into_response()
    }
}
