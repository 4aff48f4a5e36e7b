//! Video metadata resolution.
//!
//! Provides a [`VideoResolver`] trait so a real extraction backend (yt-dlp or
//! a hosted extraction API) can be substituted without touching callers. The
//! only implementation shipped today is [`StubVideoResolver`], which validates
//! the platform allow-list and returns fixed metadata.

mod stub;

pub use stub::StubVideoResolver;

use crate::domain::entities::VideoInfo;
use crate::error::AppError;
use async_trait::async_trait;
use url::Url;

/// Turns a raw video URL into descriptive metadata.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoResolver: Send + Sync {
    /// Resolves metadata for a video URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnsupportedPlatform`] when the URL host is not on
    /// the platform allow-list. Returns [`AppError::Internal`] on extraction
    /// backend failures.
    async fn resolve(&self, url: &Url) -> Result<VideoInfo, AppError>;
}
