//! HTTP server entry point.

use std::sync::Arc;

use cms_nodes::config::Config;
use cms_nodes::db::{self, NodeStore, Repository};
use cms_nodes::{create_router, logging, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    logging::init_tracing(&config.log_level, config.log_format);

    tracing::info!("Starting CMS node service");
    tracing::info!(
        "Database: {}:{}/{}",
        config.database.host,
        config.database.port,
        config.database.name
    );
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize database pool once for the whole process
    let pool = db::init_pool(&config.database);
    let repo = Repository::new(pool.clone());

    if let Err(e) = repo.ping().await {
        tracing::warn!("Database not reachable at startup, serving anyway: {}", e);
    }

    let app = create_router(AppState::new(Arc::new(repo)));

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Draining database pool");
    pool.close().await;

    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
