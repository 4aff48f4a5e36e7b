//! API route configuration.

use crate::api::handlers::{download_handler, link_handler, ping_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /download`        - Submit a video URL, returns a new link id
/// - `GET  /link/{linkId}`   - Fetch a link record and count the view
/// - `POST /shorten`         - Shorten an arbitrary URL
/// - `GET  /ping`            - Liveness probe
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/download", post(download_handler))
        .route("/link/{link_id}", get(link_handler))
        .route("/shorten", post(shorten_handler))
        .route("/ping", get(ping_handler))
}
