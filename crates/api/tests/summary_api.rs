//! Integration tests for `/api/generate-summary`.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, build_test_app, send, test_config, unreachable_url, StubServer};
use serde_json::json;

async fn app_with_gemini(gemini_url: &str) -> axum::Router {
    let mut config = test_config(&unreachable_url().await);
    config.gemini.api_key = Some("test-key".to_string());
    config.gemini.api_url = gemini_url.to_string();
    build_test_app(config)
}

#[tokio::test]
async fn summary_is_public_and_returns_text() {
    let gemini = StubServer::start(
        StatusCode::OK,
        json!({
            "candidates": [{ "content": { "parts": [{ "text": "  A short summary.  " }] } }]
        }),
    )
    .await;
    let app = app_with_gemini(&gemini.url).await;

    let response = send(
        app,
        Method::POST,
        "/api/generate-summary",
        None,
        Some(json!({ "content": "Long article body about ownership and borrowing." })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "text": "A short summary." }));

    let call = gemini.single_request();
    assert_eq!(call.path, "/v1beta/models/gemini-test:generateContent");
    assert_eq!(call.query.as_deref(), Some("key=test-key"));
    assert_eq!(call.authorization, None);
    let prompt = call.body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.ends_with("Long article body about ownership and borrowing."));
}

#[tokio::test]
async fn summary_without_key_is_unavailable() {
    let app = build_test_app(test_config(&unreachable_url().await));

    let response = send(
        app,
        Method::POST,
        "/api/generate-summary",
        None,
        Some(json!({ "content": "Something worth summarizing." })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Summary service is not configured");
}

#[tokio::test]
async fn summary_requires_content() {
    let gemini = StubServer::start(StatusCode::OK, json!({})).await;
    let app = app_with_gemini(&gemini.url).await;

    let response = send(
        app,
        Method::POST,
        "/api/generate-summary",
        None,
        Some(json!({ "content": "  " })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(gemini.requests().is_empty());
}

#[tokio::test]
async fn gemini_error_status_forwarded() {
    let gemini = StubServer::start(
        StatusCode::FORBIDDEN,
        json!({ "error": { "code": 403, "message": "API key not valid" } }),
    )
    .await;
    let app = app_with_gemini(&gemini.url).await;

    let response = send(
        app,
        Method::POST,
        "/api/generate-summary",
        None,
        Some(json!({ "content": "Something worth summarizing." })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"], "API key not valid");
}
