//! Serverless entry point: one API Gateway proxy event per invocation.

use std::sync::Arc;

use lambda_runtime::{run, service_fn, Error, LambdaEvent};

use cms_nodes::api::handle_gateway_request;
use cms_nodes::config::{Config, LogFormat};
use cms_nodes::db::{self, NodeStore, Repository};
use cms_nodes::models::{GatewayRequest, GatewayResponse};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;

    // Log lines go to CloudWatch, so default to JSON unless told otherwise.
    let log_format = if std::env::var_os("CMS_LOG_FORMAT").is_some() {
        config.log_format
    } else {
        LogFormat::Json
    };
    cms_nodes::logging::init_tracing(&config.log_level, log_format);

    // The pool outlives individual invocations and is reused while the
    // execution environment stays warm.
    let store: Arc<dyn NodeStore> = Arc::new(Repository::new(db::init_pool(&config.database)));
    if let Err(e) = store.ping().await {
        tracing::warn!("Database not reachable at cold start: {}", e);
    }

    run(service_fn(move |event: LambdaEvent<GatewayRequest>| {
        let store = Arc::clone(&store);
        async move { handle(store.as_ref(), event).await }
    }))
    .await
}

async fn handle(
    store: &dyn NodeStore,
    event: LambdaEvent<GatewayRequest>,
) -> Result<GatewayResponse, Error> {
    tracing::debug!(request_id = %event.context.request_id, "Invocation received");
    Ok(handle_gateway_request(store, event.payload).await)
}
