//! HTTP client for the import API server

use std::sync::OnceLock;

use serde::Deserialize;
use tracing::warn;

use crate::types::{EventData, PublishResult};

static API_URL: OnceLock<String> = OnceLock::new();

/// Initialize the API base URL. Call this at startup.
pub fn init_api_url(url: String) {
    API_URL.set(url).ok();
}

/// Get the configured API base URL (same-origin by default)
pub fn get_api_url() -> &'static str {
    API_URL.get().map(|s| s.as_str()).unwrap_or("")
}

/// Error body returned by the scrape route
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
}

/// Error type for API operations
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{0}")]
    Api(String),
}

/// Ask the server to scrape an event page
pub async fn scrape_event(url: &str) -> Result<EventData, ApiError> {
    let response = reqwest::Client::new()
        .post(format!("{}/scrape", get_api_url()))
        .json(&serde_json::json!({ "url": url }))
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|b| b.error)
            .unwrap_or_else(|| status.to_string());
        warn!(status = %status, message = %message, "Scrape request failed");
        return Err(ApiError::Api(message));
    }

    Ok(response.json::<EventData>().await?)
}

/// Publish the reviewed event. Failures come back as an unsuccessful result
/// rather than an error, so the result phase can render them directly.
pub async fn publish_event(event: &EventData) -> PublishResult {
    let request = async {
        let response = reqwest::Client::new()
            .post(format!("{}/publish", get_api_url()))
            .json(event)
            .send()
            .await?;
        // the publish route returns a result body on every status code
        response.json::<PublishResult>().await
    };

    match request.await {
        Ok(result) => result,
        Err(e) => {
            warn!(error = %e, "Publish request failed");
            PublishResult::failure(format!("Failed to create WordPress post: {}", e))
        }
    }
}
