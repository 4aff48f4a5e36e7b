//! Handler for the download submission endpoint.

use axum::{Json, extract::State, http::HeaderMap};
use validator::Validate;

use crate::api::dto::download::{DownloadRequest, DownloadResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_url::landing_base_from_headers;

/// Submits a video URL and creates a gated download link.
///
/// # Endpoint
///
/// `POST /api/download`
///
/// # Request Body
///
/// ```json
/// { "url": "https://www.instagram.com/reel/abc123" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "linkId": "a1b2c3d4e5f60718",
///   "originalUrl": "https://www.instagram.com/reel/abc123",
///   "title": "Sample Video Title - Amazing Content",
///   "thumbnail": "https://via.placeholder.com/640x360?text=Video+Thumbnail"
/// }
/// ```
///
/// # Errors
///
/// - 400 for a missing/malformed URL or an unsupported platform host
/// - 500 for registry failures (generic message, cause logged server-side)
///
/// The landing URL handed to the shortener is built from the request's own
/// host unless `PUBLIC_BASE_URL` is configured. Shortener failure is absorbed
/// and never fails this endpoint.
pub async fn download_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<DownloadRequest>,
) -> Result<Json<DownloadResponse>, AppError> {
    payload.validate()?;

    let landing_base = match &state.public_base_url {
        Some(base) => base.clone(),
        None => landing_base_from_headers(&headers)?,
    };

    let outcome = state.downloads.submit(&payload.url, &landing_base).await?;

    Ok(Json(DownloadResponse {
        success: true,
        link_id: outcome.id,
        original_url: outcome.original_url,
        title: outcome.title,
        thumbnail: outcome.thumbnail,
    }))
}
