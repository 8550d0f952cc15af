use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use url::Url;

use crate::common::AppError;
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct ScrapeRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Extraction gateway: validate the URL, invoke the scraper once, return
/// the event record exactly as produced.
///
/// Both validation failures respond before any external call is made.
pub async fn scrape_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<ScrapeRequest>,
) -> Response {
    let url = match request.url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "URL is required" })),
            )
                .into_response()
        }
    };

    if Url::parse(&url).is_err() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid URL format" })),
        )
            .into_response();
    }

    match state.extractor.extract(&url).await {
        Ok(record) => Json(record).into_response(),
        Err(AppError::Extraction { message, details }) => {
            error!(details = %details, "Scraper failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message, "details": details })),
            )
                .into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to process request", "details": e.to_string() })),
        )
            .into_response(),
    }
}
