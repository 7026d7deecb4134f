use std::sync::Arc;

use hub_core::model::TopicId;
use storage::repository::KeyValueStore;

use crate::error::ProgressError;

/// A JSON array of topic ids stored under one key.
#[derive(Clone)]
pub(crate) struct IdListSlot {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
}

impl IdListSlot {
    pub(crate) fn new(store: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        Self { store, key }
    }

    pub(crate) fn key(&self) -> &'static str {
        self.key
    }

    /// Read the stored list. A missing key reads as empty; duplicates are dropped.
    pub(crate) async fn read(&self) -> Result<Vec<TopicId>, ProgressError> {
        let Some(raw) = self.store.get(self.key).await? else {
            return Ok(Vec::new());
        };
        let ids: Vec<TopicId> = serde_json::from_str(&raw)?;
        let mut unique: Vec<TopicId> = Vec::with_capacity(ids.len());
        for id in ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        Ok(unique)
    }

    pub(crate) async fn write(&self, ids: &[TopicId]) -> Result<(), ProgressError> {
        let raw = serde_json::to_string(ids)?;
        self.store.set(self.key, &raw).await?;
        Ok(())
    }
}
