//! CORS middleware for the browser front end.

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS layer.
///
/// The API serves a public single-page front end and carries no credentials,
/// so any origin may call it.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}
