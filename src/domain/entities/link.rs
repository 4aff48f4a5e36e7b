//! Link record entity associating a generated id with a source video URL.

use chrono::{DateTime, Utc};

use crate::domain::entities::VideoInfo;

/// A stored link record backing one gated landing page.
///
/// Created once when a download is submitted. Only `clicks` mutates afterwards,
/// and only upwards; records are never deleted during the process lifetime.
#[derive(Debug, Clone)]
pub struct LinkRecord {
    /// Opaque unique token, 16 lowercase hex characters.
    pub id: String,
    pub original_url: String,
    pub video_info: VideoInfo,
    /// Monetized short URL for sharing. `None` when the shortener ran
    /// fail-closed and reported failure.
    pub shrink_me_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
}

impl LinkRecord {
    /// Creates a fresh record with `clicks = 0` and the current timestamp.
    pub fn new(
        id: String,
        original_url: String,
        video_info: VideoInfo,
        shrink_me_url: Option<String>,
    ) -> Self {
        Self {
            id,
            original_url,
            video_info,
            shrink_me_url,
            created_at: Utc::now(),
            clicks: 0,
        }
    }
}

/// Input data for creating a new link record.
#[derive(Debug, Clone)]
pub struct NewLinkRecord {
    pub id: String,
    pub original_url: String,
    pub video_info: VideoInfo,
    pub shrink_me_url: Option<String>,
}
