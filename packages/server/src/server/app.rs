//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::kernel::{BaseEventExtractor, WordPressClient};
use crate::server::routes::{health_handler, publish_handler, scrape_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn BaseEventExtractor>,
    /// None when WordPress credentials are not configured; publishing then
    /// fails with a configuration error while the rest of the API stays up.
    pub wordpress: Option<Arc<WordPressClient>>,
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/scrape", post(scrape_handler))
        .route("/publish", post(publish_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
