//! Repository trait for link record data access.

use crate::domain::entities::{LinkRecord, NewLinkRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the link registry.
///
/// Mutations (`create`, `increment_clicks`) must be atomic with respect to
/// each other per id: two concurrent increments on the same id may never lose
/// an update.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryLinkRepository`] - process-lifetime map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new record with `clicks = 0` and the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the id already exists. Callers are
    /// expected to mint ids via [`crate::application::services::LinkService`],
    /// which retries on collision.
    async fn create(&self, new_record: NewLinkRecord) -> Result<LinkRecord, AppError>;

    /// Looks up a record without touching its counter.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(LinkRecord))` if found
    /// - `Ok(None)` if not found
    async fn get(&self, id: &str) -> Result<Option<LinkRecord>, AppError>;

    /// Atomically increments `clicks` and returns the post-increment record,
    /// or `Ok(None)` when the id is unknown.
    async fn increment_clicks(&self, id: &str) -> Result<Option<LinkRecord>, AppError>;
}
