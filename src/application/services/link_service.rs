//! Link registry service: id minting, record creation, lookup-and-touch.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{LinkRecord, NewLinkRecord};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::token::generate_link_id;

/// Service for creating and retrieving link records.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Mints a link id that is not currently registered.
    ///
    /// Ids carry 64 bits of entropy, so collisions are not expected in
    /// practice; still retries up to 10 times before failing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] after too many collisions.
    pub async fn mint_id(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let id = generate_link_id();

            if self.repository.get(&id).await?.is_none() {
                return Ok(id);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique link id",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Creates a record. The id must come from [`Self::mint_id`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on registry failure.
    pub async fn create_link(&self, new_record: NewLinkRecord) -> Result<LinkRecord, AppError> {
        self.repository.create(new_record).await
    }

    /// Looks up a record and increments its view counter, returning the
    /// post-increment record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown ids. The "or expired"
    /// wording matches the landing page copy; no expiry is enforced.
    pub async fn get_and_touch(&self, id: &str) -> Result<LinkRecord, AppError> {
        self.repository
            .increment_clicks(id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Link not found or expired", json!({ "linkId": id }))
            })
    }
}
