mod common;

use std::sync::Arc;

use axum::{
    Router,
    http::header,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;
use vidlink::api::handlers::{download_handler, link_handler};

fn is_hex_link_id(value: &str) -> bool {
    value.len() == 16 && value.chars().all(|c| c.is_ascii_hexdigit())
}

fn download_app(state: vidlink::AppState) -> TestServer {
    let app = Router::new()
        .route("/api/download", post(download_handler))
        .route("/api/link/{link_id}", get(link_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_download_success_returns_fresh_link_id() {
    let server = download_app(common::default_test_state());

    let response = server
        .post("/api/download")
        .json(&json!({ "url": "https://www.instagram.com/reel/abc123" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["originalUrl"], "https://www.instagram.com/reel/abc123");
    assert_eq!(json["title"], "Sample Video Title - Amazing Content");
    assert!(json["thumbnail"].as_str().unwrap().starts_with("https://"));
    assert!(is_hex_link_id(json["linkId"].as_str().unwrap()));
}

#[tokio::test]
async fn test_download_ids_are_unique_across_submissions() {
    let server = download_app(common::default_test_state());

    let mut ids = std::collections::HashSet::new();
    for _ in 0..10 {
        let response = server
            .post("/api/download")
            .json(&json!({ "url": "https://youtu.be/abc123" }))
            .await;
        response.assert_status_ok();
        ids.insert(
            response.json::<serde_json::Value>()["linkId"]
                .as_str()
                .unwrap()
                .to_string(),
        );
    }

    assert_eq!(ids.len(), 10);
}

#[tokio::test]
async fn test_download_invalid_url_is_rejected() {
    let server = download_app(common::default_test_state());

    let response = server
        .post("/api/download")
        .json(&json!({ "url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_download_empty_url_is_rejected() {
    let server = download_app(common::default_test_state());

    let response = server
        .post("/api/download")
        .json(&json!({ "url": "" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_download_unsupported_platform_is_rejected() {
    let server = download_app(common::default_test_state());

    let response = server
        .post("/api/download")
        .json(&json!({ "url": "https://example.com/video" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "unsupported_platform");
}

#[tokio::test]
async fn test_download_succeeds_when_shortener_fails() {
    let server = download_app(common::create_test_state(Arc::new(
        common::FailingShortener,
    )));

    let response = server
        .post("/api/download")
        .json(&json!({ "url": "https://www.tiktok.com/@user/video/123" }))
        .await;

    response.assert_status_ok();

    // The record exists but carries no short URL.
    let link_id = response.json::<serde_json::Value>()["linkId"]
        .as_str()
        .unwrap()
        .to_string();
    let link_response = server.get(&format!("/api/link/{link_id}")).await;
    link_response.assert_status_ok();

    let link_json = link_response.json::<serde_json::Value>();
    assert!(link_json["linkData"].get("shrinkMeUrl").is_none());
}

#[tokio::test]
async fn test_download_shortens_the_landing_url() {
    let recorder = Arc::new(common::RecordingShortener::default());
    let server = download_app(common::create_test_state(recorder.clone()));

    let response = server
        .post("/api/download")
        .json(&json!({ "url": "https://www.youtube.com/watch?v=abc" }))
        .await;
    response.assert_status_ok();

    let link_id = response.json::<serde_json::Value>()["linkId"]
        .as_str()
        .unwrap()
        .to_string();

    let calls = recorder.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, format!("http://localhost:3000/link/{link_id}"));
    assert_eq!(calls[0].1, None);
}

#[tokio::test]
async fn test_download_derives_landing_base_from_host_header() {
    let recorder = Arc::new(common::RecordingShortener::default());
    let mut state = common::create_test_state(recorder.clone());
    state.public_base_url = None;
    let server = download_app(state);

    let response = server
        .post("/api/download")
        .add_header(header::HOST, "vidlink.example:8080")
        .json(&json!({ "url": "https://www.youtube.com/watch?v=abc" }))
        .await;
    response.assert_status_ok();

    let calls = recorder.calls.lock().unwrap();
    assert!(calls[0].0.starts_with("http://vidlink.example:8080/link/"));
}
