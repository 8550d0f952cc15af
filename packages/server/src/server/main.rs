// Main entry point for the event importer API server

use std::sync::Arc;

use anyhow::{Context, Result};
use server_core::config::Config;
use server_core::kernel::{ScriptExtractor, WordPressClient};
use server_core::server::app::{build_app, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Event Importer API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    let extractor = Arc::new(ScriptExtractor::new(
        config.scraper_command.clone(),
        config.scraper_script.clone(),
    ));

    // The server stays up without credentials; /publish rejects requests
    // until WP_USERNAME and WP_APP_PASSWORD are set.
    let wordpress = match WordPressClient::from_config(&config) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            tracing::warn!("{e}; publishing is disabled");
            None
        }
    };

    let app = build_app(AppState {
        extractor,
        wordpress,
    });

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
