//! DTOs for the link page endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{LinkRecord, VideoInfo};

/// Serialized video metadata.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoInfoData {
    pub title: String,
    pub thumbnail: String,
    pub download_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
}

impl From<VideoInfo> for VideoInfoData {
    fn from(info: VideoInfo) -> Self {
        Self {
            title: info.title,
            thumbnail: info.thumbnail,
            download_url: info.download_url,
            duration: info.duration,
            quality: info.quality,
        }
    }
}

/// Full serialized link record, as rendered by the landing page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkData {
    pub id: String,
    pub original_url: String,
    pub video_info: VideoInfoData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shrink_me_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
}

impl From<LinkRecord> for LinkData {
    fn from(record: LinkRecord) -> Self {
        Self {
            id: record.id,
            original_url: record.original_url,
            video_info: record.video_info.into(),
            shrink_me_url: record.shrink_me_url,
            created_at: record.created_at,
            clicks: record.clicks,
        }
    }
}

/// Response envelope for `GET /api/link/{linkId}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub success: bool,
    pub link_data: LinkData,
}
