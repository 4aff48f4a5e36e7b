//! ShrinkMe API client with swallow-and-fallback failure handling.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::infrastructure::shortener::{ShortenOutcome, Shortener};
use crate::utils::token::generate_fallback_token;

/// Base of locally fabricated short URLs used when the API is unreachable.
const FALLBACK_BASE: &str = "https://shrinkme.io";

#[derive(Serialize)]
struct ShrinkMeApiRequest<'a> {
    url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    alias: Option<&'a str>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShrinkMeApiResponse {
    shortened_url: Option<String>,
}

/// HTTP client for the ShrinkMe shortening API.
///
/// Authenticates with a bearer key. The request timeout is bounded by the
/// injected [`reqwest::Client`]. Failure handling depends on `fail_open`:
///
/// - `true`: any failure is masked with a fabricated `demo_` URL and
///   reported as success
/// - `false`: failures are reported as [`ShortenOutcome::failed`]
pub struct ShrinkMeClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    fail_open: bool,
}

impl ShrinkMeClient {
    pub fn new(http: reqwest::Client, api_url: String, api_key: String, fail_open: bool) -> Self {
        Self {
            http,
            api_url,
            api_key,
            fail_open,
        }
    }

    async fn call_api(
        &self,
        destination_url: &str,
        alias: Option<&str>,
    ) -> Result<Option<String>, reqwest::Error> {
        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&ShrinkMeApiRequest {
                url: destination_url,
                alias,
            })
            .send()
            .await?
            .error_for_status()?;

        let body: ShrinkMeApiResponse = response.json().await?;
        Ok(body.shortened_url)
    }

    fn fallback(&self, destination_url: &str) -> ShortenOutcome {
        if self.fail_open {
            let url = format!("{FALLBACK_BASE}/demo_{}", generate_fallback_token());
            ShortenOutcome::success(url, destination_url.to_string())
        } else {
            ShortenOutcome::failed(destination_url.to_string())
        }
    }
}

#[async_trait]
impl Shortener for ShrinkMeClient {
    async fn shorten<'a>(&self, destination_url: &str, alias: Option<&'a str>) -> ShortenOutcome {
        match self.call_api(destination_url, alias).await {
            Ok(Some(shortened_url)) => {
                ShortenOutcome::success(shortened_url, destination_url.to_string())
            }
            Ok(None) => {
                // 2xx response without the expected field. Treated like a failure.
                warn!("ShrinkMe response missing shortenedUrl");
                self.fallback(destination_url)
            }
            Err(e) => {
                warn!(error = %e, "ShrinkMe API call failed");
                self.fallback(destination_url)
            }
        }
    }
}
