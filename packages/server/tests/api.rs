//! Route-level tests driving the axum router directly.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use server_core::common::EventRecord;
use server_core::kernel::{BaseEventExtractor, MockEventExtractor, WordPressClient};
use server_core::server::app::{build_app, AppState};

fn sample_record() -> EventRecord {
    EventRecord {
        event_name: "Test Event".to_string(),
        date: "2025-04-15".to_string(),
        time: "7:00 PM".to_string(),
        location: "Test Location".to_string(),
        description: "Test Description".to_string(),
        host: "Test Host".to_string(),
        is_free: true,
        price: None,
        image_url: None,
    }
}

fn app(extractor: Arc<MockEventExtractor>, wordpress: Option<Arc<WordPressClient>>) -> axum::Router {
    build_app(AppState {
        extractor: extractor as Arc<dyn BaseEventExtractor>,
        wordpress,
    })
}

async fn post_json(router: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
    let router = app(Arc::new(MockEventExtractor::new()), None);

    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn scrape_requires_a_url() {
    let extractor = Arc::new(MockEventExtractor::new());

    let (status, body) = post_json(app(extractor.clone(), None), "/scrape", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "URL is required");
    assert!(extractor.extract_calls().is_empty());
}

#[tokio::test]
async fn scrape_rejects_malformed_urls_before_the_scraper() {
    let extractor = Arc::new(MockEventExtractor::new());

    let (status, body) = post_json(
        app(extractor.clone(), None),
        "/scrape",
        json!({ "url": "not a url" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid URL format");
    assert!(extractor.extract_calls().is_empty());
}

#[tokio::test]
async fn scrape_returns_the_record_unchanged() {
    let extractor = Arc::new(MockEventExtractor::new().with_record(sample_record()));

    let (status, body) = post_json(
        app(extractor.clone(), None),
        "/scrape",
        json!({ "url": "https://example.com/event" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::to_value(sample_record()).unwrap());
    assert_eq!(extractor.extract_calls(), vec!["https://example.com/event"]);
}

#[tokio::test]
async fn scrape_surfaces_scraper_diagnostics() {
    let extractor = Arc::new(
        MockEventExtractor::new()
            .with_failure("Failed to scrape event details", "Traceback: boom"),
    );

    let (status, body) = post_json(
        app(extractor, None),
        "/scrape",
        json!({ "url": "https://example.com/event" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to scrape event details");
    assert_eq!(body["details"], "Traceback: boom");
}

#[tokio::test]
async fn publish_validates_before_anything_else() {
    let mut record = sample_record();
    record.location = String::new();

    let (status, body) = post_json(
        app(Arc::new(MockEventExtractor::new()), None),
        "/publish",
        serde_json::to_value(record).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Missing required event details");

    // a body missing the key entirely gets the same validation failure
    let (status, body) = post_json(
        app(Arc::new(MockEventExtractor::new()), None),
        "/publish",
        json!({ "date": "2025-04-15", "time": "7:00 PM", "isFree": true }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required event details");
}

#[tokio::test]
async fn publish_without_credentials_is_a_configuration_error() {
    let (status, body) = post_json(
        app(Arc::new(MockEventExtractor::new()), None),
        "/publish",
        serde_json::to_value(sample_record()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "WordPress credentials not configured");
}

#[tokio::test]
async fn publish_maps_the_created_post() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 123,
            "link": "https://site/events/test-event"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let wordpress = Arc::new(WordPressClient::new(server.uri(), "editor", "app-password"));
    let (status, body) = post_json(
        app(Arc::new(MockEventExtractor::new()), Some(wordpress)),
        "/publish",
        serde_json::to_value(sample_record()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["postId"], 123);
    assert_eq!(body["postUrl"], "https://site/events/test-event");

    let requests = server.received_requests().await.unwrap();
    let outgoing: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(outgoing["meta"]["event_date"], "2025-04-15");
}

#[tokio::test]
async fn publish_reports_the_wordpress_error_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/posts"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "Term meta is broken" })),
        )
        .mount(&server)
        .await;

    let wordpress = Arc::new(WordPressClient::new(server.uri(), "editor", "app-password"));
    let (status, body) = post_json(
        app(Arc::new(MockEventExtractor::new()), Some(wordpress)),
        "/publish",
        serde_json::to_value(sample_record()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Term meta is broken"));
}
