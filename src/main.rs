use std::sync::Arc;

use anyhow::{Context, Result};
use record_demo::api::{router, AppState};
use record_demo::config::ServerConfig;
use record_demo::logging;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init("info,tower_http=debug");

    let config = ServerConfig::from_env().context("Failed to load server configuration")?;
    let app = router(Arc::new(AppState::default()));

    let addr = config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    tracing::info!("Record service running on http://{addr}");
    tracing::info!("   GET  /api/users            - List users");
    tracing::info!("   GET  /api/users/:id        - Fetch one user");
    tracing::info!("   POST /api/users            - Create a user");
    tracing::info!("   GET  /api/products         - List products");
    tracing::info!("   GET  /api/products/:id     - Fetch one product");
    tracing::info!("   POST /api/products         - Create a product");

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
