//! Handler for the link page data endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::link::{LinkData, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns a link record for the landing page and counts the view.
///
/// # Endpoint
///
/// `GET /api/link/{linkId}`
///
/// Every successful call increments the record's click counter; the response
/// carries the post-increment value. The full record is returned up front,
/// including `videoInfo.downloadUrl` - the landing page countdown is a
/// client-side delay, not server-side gating.
///
/// # Errors
///
/// Returns 404 with "Link not found or expired" for unknown ids. No expiry
/// is enforced; the wording matches the landing page copy.
pub async fn link_handler(
    Path(link_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let record = state.links.get_and_touch(&link_id).await?;

    Ok(Json(LinkResponse {
        success: true,
        link_data: LinkData::from(record),
    }))
}
