use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::common::{AppError, EventRecord, PublishResponse};
use crate::server::app::AppState;

/// Publication gateway: validate the record, then hand it to the WordPress
/// client (optional media upload followed by post creation).
///
/// Every failure path produces a structured `{"success": false}` body; no
/// error propagates out of this handler.
pub async fn publish_handler(
    Extension(state): Extension<AppState>,
    Json(event): Json<EventRecord>,
) -> Response {
    if event.missing_required_fields() {
        return (
            StatusCode::BAD_REQUEST,
            Json(PublishResponse::failed("Missing required event details")),
        )
            .into_response();
    }

    let Some(wordpress) = state.wordpress.as_ref() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(PublishResponse::failed(
                "WordPress credentials not configured",
            )),
        )
            .into_response();
    };

    match wordpress.publish_event(&event).await {
        Ok(post) => Json(PublishResponse::published(post.id, post.link)).into_response(),
        Err(AppError::Validation(message)) => {
            (StatusCode::BAD_REQUEST, Json(PublishResponse::failed(message))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create WordPress post");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(PublishResponse::failed(e.to_string())),
            )
                .into_response()
        }
    }
}
