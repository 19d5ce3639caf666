// API Server Binary Entry Point
//
// Purpose: Serve the soil assessment engine over HTTP
// Usage: cargo run --features api --bin api_server

use anyhow::Context;
use soil_advisor_rust::{create_router, logging::init_tracing, AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env().context("Failed to read server configuration")?;

    init_tracing(&config.log_filter);

    tracing::info!("Configuration:");
    tracing::info!("  HOST: {}", config.host);
    tracing::info!("  PORT: {}", config.port);

    let app = create_router(AppState::new());

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
