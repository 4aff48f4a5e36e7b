//! In-memory implementation of the link repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Mutex;

use crate::domain::entities::{LinkRecord, NewLinkRecord};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Process-lifetime link registry backed by a mutex-guarded map.
///
/// Records live until the process restarts: no persistence, no eviction, no
/// TTL. All mutations go through a single async mutex, which gives per-id
/// atomicity for create and click-increment.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    records: Arc<Mutex<HashMap<String, LinkRecord>>>,
}

impl InMemoryLinkRepository {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently stored. Used by the health endpoint.
    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    /// Returns true when no records are stored.
    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_record: NewLinkRecord) -> Result<LinkRecord, AppError> {
        let mut records = self.records.lock().await;

        if records.contains_key(&new_record.id) {
            return Err(AppError::internal(
                "Link id collision",
                json!({ "id": new_record.id }),
            ));
        }

        let record = LinkRecord::new(
            new_record.id.clone(),
            new_record.original_url,
            new_record.video_info,
            new_record.shrink_me_url,
        );
        records.insert(new_record.id, record.clone());

        Ok(record)
    }

    async fn get(&self, id: &str) -> Result<Option<LinkRecord>, AppError> {
        Ok(self.records.lock().await.get(id).cloned())
    }

    async fn increment_clicks(&self, id: &str) -> Result<Option<LinkRecord>, AppError> {
        let mut records = self.records.lock().await;

        Ok(records.get_mut(id).map(|record| {
            record.clicks += 1;
            record.clone()
        }))
    }
}
