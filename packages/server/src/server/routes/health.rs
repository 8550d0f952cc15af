use axum::Json;
use chrono::Utc;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    message: String,
    timestamp: String,
}

/// Health check endpoint. Always 200; the API holds no probeable state.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Event Importer API is running".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
