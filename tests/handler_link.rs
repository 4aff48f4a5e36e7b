mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;
use vidlink::api::handlers::{download_handler, link_handler};

fn app(state: vidlink::AppState) -> TestServer {
    let app = Router::new()
        .route("/api/download", post(download_handler))
        .route("/api/link/{link_id}", get(link_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

async fn submit_link(server: &TestServer) -> String {
    let response = server
        .post("/api/download")
        .json(&json!({ "url": "https://www.instagram.com/reel/abc123" }))
        .await;
    response.assert_status_ok();
    response.json::<serde_json::Value>()["linkId"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_each_view_increments_clicks_in_order() {
    let server = app(common::default_test_state());
    let link_id = submit_link(&server).await;

    for expected in 1..=3u64 {
        let response = server.get(&format!("/api/link/{link_id}")).await;
        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["success"], true);
        assert_eq!(json["linkData"]["clicks"], expected);
    }
}

#[tokio::test]
async fn test_link_payload_carries_full_record() {
    let server = app(common::default_test_state());
    let link_id = submit_link(&server).await;

    let response = server.get(&format!("/api/link/{link_id}")).await;
    response.assert_status_ok();

    let data = &response.json::<serde_json::Value>()["linkData"];
    assert_eq!(data["id"], link_id.as_str());
    assert_eq!(data["originalUrl"], "https://www.instagram.com/reel/abc123");
    assert_eq!(data["shrinkMeUrl"], "https://shrinkme.io/test");
    assert!(data["createdAt"].is_string());

    // The download URL is present from the very first response; the landing
    // page countdown is purely a client-side delay.
    let video = &data["videoInfo"];
    assert_eq!(video["title"], "Sample Video Title - Amazing Content");
    assert!(video["downloadUrl"].as_str().unwrap().ends_with(".mp4"));
    assert_eq!(video["duration"], 120);
    assert_eq!(video["quality"], "720p");
}

#[tokio::test]
async fn test_unknown_link_id_is_not_found() {
    let server = app(common::default_test_state());

    let response = server.get("/api/link/0000000000000000").await;
    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "Link not found or expired");
}

#[tokio::test]
async fn test_not_found_lookup_does_not_create_a_record() {
    let server = app(common::default_test_state());

    server.get("/api/link/0000000000000000").await;
    let response = server.get("/api/link/0000000000000000").await;

    response.assert_status_not_found();
}
