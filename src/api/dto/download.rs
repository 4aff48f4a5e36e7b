//! DTOs for the download submission endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to submit a video URL.
#[derive(Debug, Deserialize, Validate)]
pub struct DownloadRequest {
    /// The video URL to process (must be a valid HTTP/HTTPS URL on a
    /// supported platform).
    #[validate(length(min = 1, message = "Valid video URL is required"))]
    pub url: String,
}

/// Response for a successful submission: the new link id plus minimal
/// preview fields for the client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResponse {
    pub success: bool,
    pub link_id: String,
    pub original_url: String,
    pub title: String,
    pub thumbnail: String,
}
