//! Handler for the direct URL shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_url::validate_submission_url;

/// Shortens an arbitrary URL via the configured provider.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page", "alias": "my-alias" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "status": "success",
///   "shortenedUrl": "https://shrinkme.io/abc",
///   "originalUrl": "https://example.com/page"
/// }
/// ```
///
/// With a fail-closed shortener, upstream failure yields `status: "error"`
/// and no `shortenedUrl`; the HTTP status stays 200 because the shorten
/// operation itself is non-failing by contract.
///
/// # Errors
///
/// Returns 400 for a missing or malformed URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;
    validate_submission_url(&payload.url)
        .map_err(|e| AppError::bad_request(e.to_string(), serde_json::json!({})))?;

    let outcome = state
        .shortener
        .shorten(&payload.url, payload.alias.as_deref())
        .await;

    Ok(Json(outcome.into()))
}
