//! Handler for the ping endpoint.

use axum::{Json, extract::State};

use crate::api::dto::ping::PingResponse;
use crate::state::AppState;

/// Liveness probe used by the presentation layer during development.
///
/// # Endpoint
///
/// `GET /api/ping`
pub async fn ping_handler(State(state): State<AppState>) -> Json<PingResponse> {
    Json(PingResponse {
        message: state.ping_message.clone(),
    })
}
