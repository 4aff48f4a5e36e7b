//! Monetized URL shortening.
//!
//! Provides a [`Shortener`] trait with one production implementation,
//! [`ShrinkMeClient`]. The trait is deliberately infallible: external
//! shortener failure must never block link creation, so implementations
//! report failure through [`ShortenOutcome::status`] instead of an error.

mod shrinkme;

pub use shrinkme::ShrinkMeClient;

use async_trait::async_trait;

/// Result of a shorten attempt. Never an error by contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenOutcome {
    pub status: ShortenStatus,
    /// `None` only when the shortener runs fail-closed and the upstream call
    /// failed.
    pub shortened_url: Option<String>,
    pub original_url: String,
}

impl ShortenOutcome {
    pub fn success(shortened_url: String, original_url: String) -> Self {
        Self {
            status: ShortenStatus::Success,
            shortened_url: Some(shortened_url),
            original_url,
        }
    }

    pub fn failed(original_url: String) -> Self {
        Self {
            status: ShortenStatus::Failed,
            shortened_url: None,
            original_url,
        }
    }
}

/// Whether the shortener produced a usable URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortenStatus {
    Success,
    Failed,
}

impl ShortenStatus {
    /// Wire representation used by the `/api/shorten` response.
    pub fn as_str(self) -> &'static str {
        match self {
            ShortenStatus::Success => "success",
            ShortenStatus::Failed => "error",
        }
    }
}

/// Wraps a third-party URL-shortening HTTP API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Shortener: Send + Sync {
    /// Shortens a destination URL, optionally under a requested alias.
    ///
    /// Never fails: transport errors and non-2xx upstream responses are
    /// absorbed. Fail-open implementations substitute a locally generated
    /// fallback URL; fail-closed ones report [`ShortenStatus::Failed`].
    async fn shorten<'a>(&self, destination_url: &str, alias: Option<&'a str>) -> ShortenOutcome;
}
