// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use resource_hub::{domains::resources::ResourceStore, server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,resource_hub=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Learning Resources Hub");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Load the catalog; a corrupt dataset must stop startup
    let store = ResourceStore::load(&config.resources_file_path).with_context(|| {
        format!(
            "Failed to load resources from {}",
            config.resources_file_path.display()
        )
    })?;

    // Build application
    let app = build_app(Arc::new(store), &config.allowed_origins);

    // Start server
    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Catalog page: http://{}/", addr);
    tracing::info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
