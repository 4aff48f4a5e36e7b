//! Video metadata entity returned by the resolver.

/// Descriptive metadata for a video at a supported platform URL.
///
/// Immutable once resolved; owned by a [`crate::domain::entities::LinkRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoInfo {
    pub title: String,
    pub thumbnail: String,
    pub download_url: String,
    /// Duration in seconds, when the extractor reports one.
    pub duration: Option<u32>,
    /// Quality label such as `720p`, when the extractor reports one.
    pub quality: Option<String>,
}

impl VideoInfo {
    /// Creates a new VideoInfo instance.
    pub fn new(
        title: String,
        thumbnail: String,
        download_url: String,
        duration: Option<u32>,
        quality: Option<String>,
    ) -> Self {
        Self {
            title,
            thumbnail,
            download_url,
            duration,
            quality,
        }
    }
}
