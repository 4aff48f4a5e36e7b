//! DTOs for the direct shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::infrastructure::shortener::ShortenOutcome;

/// Request to shorten an arbitrary URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(min = 1, message = "Valid URL is required"))]
    pub url: String,

    /// Optional alias requested from the shortening provider.
    pub alias: Option<String>,
}

/// Response mirroring the ShrinkMe wire format.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortened_url: Option<String>,
    pub original_url: String,
}

impl From<ShortenOutcome> for ShortenResponse {
    fn from(outcome: ShortenOutcome) -> Self {
        Self {
            status: outcome.status.as_str(),
            shortened_url: outcome.shortened_url,
            original_url: outcome.original_url,
        }
    }
}
