//! API Gateway proxy handler used by the serverless binary.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::{create_node, NODE_CREATED};
use crate::db::NodeStore;
use crate::errors::AppError;
use crate::models::{GatewayRequest, GatewayResponse};

/// Handle one proxy invocation of the create-node operation.
pub async fn handle_gateway_request(
    store: &dyn NodeStore,
    request: GatewayRequest,
) -> GatewayResponse {
    let result = match request_body(&request) {
        Ok(body) => create_node(store, &body).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => GatewayResponse::new(200, NODE_CREATED)
            .with_header("Content-Type", "application/json"),
        Err(e) => GatewayResponse::new(e.status_code().as_u16(), e.public_message()),
    }
}

/// Raw body bytes of the event. A missing body is empty.
fn request_body(request: &GatewayRequest) -> Result<Vec<u8>, AppError> {
    let body = request.body.as_deref().unwrap_or_default();
    if !request.is_base64_encoded {
        return Ok(body.as_bytes().to_vec());
    }

    STANDARD.decode(body).map_err(|e| {
        tracing::warn!("Error decoding base64 request body: {}", e);
        AppError::BadRequest(format!("Invalid base64 body: {}", e))
    })
}
