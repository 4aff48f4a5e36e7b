//! Download submission orchestrator.
//!
//! Composes the video resolver, the URL shortener, and the link registry to
//! answer a "submit URL" request with a new link id.

use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};

use crate::application::services::LinkService;
use crate::domain::entities::NewLinkRecord;
use crate::error::AppError;
use crate::infrastructure::resolver::VideoResolver;
use crate::infrastructure::shortener::Shortener;
use crate::utils::request_url::validate_submission_url;

/// Minimal preview fields returned to the submitting client.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub id: String,
    pub original_url: String,
    pub title: String,
    pub thumbnail: String,
}

/// Orchestrates download submissions.
pub struct DownloadService {
    resolver: Arc<dyn VideoResolver>,
    shortener: Arc<dyn Shortener>,
    links: Arc<LinkService>,
}

impl DownloadService {
    pub fn new(
        resolver: Arc<dyn VideoResolver>,
        shortener: Arc<dyn Shortener>,
        links: Arc<LinkService>,
    ) -> Self {
        Self {
            resolver,
            shortener,
            links,
        }
    }

    /// Handles a submitted video URL.
    ///
    /// Steps: validate the URL, resolve video metadata, mint a link id, build
    /// the landing URL `<landing_base>/link/<id>`, shorten it, and create the
    /// record. Shortener failure never blocks record creation; the record is
    /// stored without a short URL when the shortener ran fail-closed.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] for malformed or non-http(s) URLs
    /// - [`AppError::UnsupportedPlatform`] propagated from the resolver
    /// - [`AppError::Internal`] on registry failure
    pub async fn submit(
        &self,
        raw_url: &str,
        landing_base: &str,
    ) -> Result<SubmitOutcome, AppError> {
        let url = validate_submission_url(raw_url)
            .map_err(|e| AppError::bad_request(e.to_string(), json!({ "url": raw_url })))?;

        let video_info = self.resolver.resolve(&url).await?;

        let id = self.links.mint_id().await?;
        let landing_url = format!("{}/link/{}", landing_base.trim_end_matches('/'), id);

        let shorten_outcome = self.shortener.shorten(&landing_url, None).await;
        if shorten_outcome.shortened_url.is_none() {
            warn!(link_id = %id, "continuing without shortened URL");
        }

        let record = self
            .links
            .create_link(NewLinkRecord {
                id,
                original_url: raw_url.to_string(),
                video_info,
                shrink_me_url: shorten_outcome.shortened_url,
            })
            .await?;

        info!(link_id = %record.id, original_url = %record.original_url, "link created");

        Ok(SubmitOutcome {
            id: record.id,
            original_url: record.original_url,
            title: record.video_info.title,
            thumbnail: record.video_info.thumbnail,
        })
    }
}
