//! Composition root for runtime wiring.
//!
//! Picks the cluster store from configuration, builds the router on top of
//! it and runs the HTTP server until Ctrl-C.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::adapter::inbound::http::router;
use crate::adapter::outbound::{MemoryClusterStore, SqliteClusterStore};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Build the application router over the configured store.
///
/// A SQLite store is opened and migrated before this returns.
///
/// # Errors
/// Returns an error if the SQLite database cannot be opened or migrated.
pub fn build_app(config: &Config) -> Result<Router> {
    let timeout = config.server.request_timeout();

    match config.database.url() {
        Some(url) => {
            let store = SqliteClusterStore::connect(url, config.database.pool_options())?;
            info!(
                backend = "sqlite",
                max_connections = config.database.max_connections,
                "Cluster store ready"
            );
            Ok(router(Arc::new(store), timeout))
        }
        None => {
            info!(backend = "memory", "Cluster store ready (data is not persisted)");
            Ok(router(Arc::new(MemoryClusterStore::new()), timeout))
        }
    }
}

/// Serve the API until a shutdown signal arrives.
///
/// # Errors
/// Returns an error if the store cannot be initialized or the listener
/// cannot be bound.
pub async fn serve(config: &Config) -> Result<()> {
    let addr = config.server.socket_addr()?;
    let app = build_app(config)?;

    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    // An error here means the handler could not be installed; keep serving.
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
