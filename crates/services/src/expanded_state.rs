use std::sync::Arc;

use hub_core::model::{Catalog, TopicId};
use storage::repository::KeyValueStore;

use crate::error::ProgressError;
use crate::id_list::IdListSlot;

/// Storage key of the expanded-cards list in the session namespace.
pub const EXPANDED_KEY: &str = "dbLearningExpanded";

/// Which topic cards are open, mirrored to session storage.
///
/// Independent of `ProgressTracker`: resetting progress leaves it alone.
pub struct ExpandedState {
    slot: IdListSlot,
    expanded: Vec<TopicId>,
}

impl ExpandedState {
    /// Restore the expanded set from `store`, dropping ids the catalog does not know.
    pub async fn load(catalog: &Catalog, store: Arc<dyn KeyValueStore>) -> Self {
        let slot = IdListSlot::new(store, EXPANDED_KEY);
        let expanded = match slot.read().await {
            Ok(ids) => ids
                .into_iter()
                .filter(|id| catalog.contains_topic(id))
                .collect(),
            Err(err) => {
                tracing::warn!(key = slot.key(), error = %err, "could not restore expanded state");
                Vec::new()
            }
        };
        Self { slot, expanded }
    }

    #[must_use]
    pub fn is_expanded(&self, topic_id: &TopicId) -> bool {
        self.expanded.contains(topic_id)
    }

    #[must_use]
    pub fn expanded(&self) -> &[TopicId] {
        &self.expanded
    }

    /// Set the expansion of one card. Returns `true` if anything changed.
    pub fn set_expanded(&mut self, topic_id: &TopicId, expand: bool) -> bool {
        let position = self.expanded.iter().position(|id| id == topic_id);
        match (position, expand) {
            (None, true) => {
                self.expanded.push(topic_id.clone());
                true
            }
            (Some(index), false) => {
                self.expanded.remove(index);
                true
            }
            _ => false,
        }
    }

    /// Persist the expanded set, logging failures.
    pub async fn save(&self) {
        if let Err(err) = self.try_save().await {
            tracing::warn!(key = self.slot.key(), error = %err, "could not save expanded state");
        }
    }

    /// # Errors
    ///
    /// Returns `ProgressError` if serialization or the storage write fails.
    pub async fn try_save(&self) -> Result<(), ProgressError> {
        self.slot.write(&self.expanded).await
    }
}
