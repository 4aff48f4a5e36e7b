//! Stub resolver returning fixed metadata for supported platforms.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use url::Url;

use crate::domain::entities::VideoInfo;
use crate::domain::platform::supported_platform;
use crate::error::AppError;
use crate::infrastructure::resolver::VideoResolver;

/// Demo resolver standing in for a real extraction backend.
///
/// Validates the URL host against the platform allow-list, waits for a
/// configurable artificial delay to approximate extraction latency, then
/// returns fixed metadata.
pub struct StubVideoResolver {
    delay: Duration,
}

impl StubVideoResolver {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl VideoResolver for StubVideoResolver {
    async fn resolve(&self, url: &Url) -> Result<VideoInfo, AppError> {
        let Some(platform) = supported_platform(url) else {
            return Err(AppError::unsupported_platform(
                "Unsupported platform. Please use a supported video platform URL.",
                json!({ "host": url.host_str() }),
            ));
        };

        tracing::debug!(%platform, "resolving video info");

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(VideoInfo::new(
            "Sample Video Title - Amazing Content".to_string(),
            "https://via.placeholder.com/640x360?text=Video+Thumbnail".to_string(),
            "https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_1mb.mp4".to_string(),
            Some(120),
            Some("720p".to_string()),
        ))
    }
}
