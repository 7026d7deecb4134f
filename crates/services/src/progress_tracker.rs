use std::sync::Arc;

use hub_core::model::{Catalog, ModuleId, Progress, TopicId};
use storage::repository::KeyValueStore;

use crate::error::ProgressError;
use crate::id_list::IdListSlot;

/// Storage key of the completed-topics list in the persistent namespace.
pub const PROGRESS_KEY: &str = "dbLearningProgress";

/// Single source of truth for which topics the user has completed.
///
/// Mutations (`toggle`) do not persist on their own; call `save` afterwards.
/// Storage failures never reach the caller: loads fall back to an empty set
/// and saves leave the in-memory state authoritative.
pub struct ProgressTracker {
    catalog: Arc<Catalog>,
    slot: IdListSlot,
    completed: Vec<TopicId>,
}

impl ProgressTracker {
    /// Build a tracker and load the completed set from `store`.
    pub async fn load(catalog: Arc<Catalog>, store: Arc<dyn KeyValueStore>) -> Self {
        let slot = IdListSlot::new(store, PROGRESS_KEY);
        let completed = match slot.read().await {
            Ok(ids) => ids,
            Err(err) => {
                tracing::warn!(key = slot.key(), error = %err, "could not load progress");
                Vec::new()
            }
        };
        tracing::debug!(completed = completed.len(), "progress loaded");
        Self {
            catalog,
            slot,
            completed,
        }
    }

    /// Persist the completed set, logging failures.
    pub async fn save(&self) {
        if let Err(err) = self.try_save().await {
            tracing::warn!(key = self.slot.key(), error = %err, "could not save progress");
        }
    }

    /// Persist the completed set.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if serialization or the storage write fails.
    pub async fn try_save(&self) -> Result<(), ProgressError> {
        self.slot.write(&self.completed).await
    }

    /// Flip completion of `topic_id`. Returns `true` if it is now complete.
    ///
    /// Ids outside the catalog are accepted.
    pub fn toggle(&mut self, topic_id: &TopicId) -> bool {
        if let Some(index) = self.completed.iter().position(|id| id == topic_id) {
            self.completed.remove(index);
            false
        } else {
            self.completed.push(topic_id.clone());
            true
        }
    }

    #[must_use]
    pub fn is_completed(&self, topic_id: &TopicId) -> bool {
        self.completed.contains(topic_id)
    }

    /// Completed ids in the order they were marked.
    #[must_use]
    pub fn completed(&self) -> &[TopicId] {
        &self.completed
    }

    /// Progress across the whole catalog. Stale ids are not counted.
    #[must_use]
    pub fn progress(&self) -> Progress {
        let completed = self
            .completed
            .iter()
            .filter(|id| self.catalog.contains_topic(id))
            .count();
        Progress::from_counts(to_u32(completed), to_u32(self.catalog.topic_count()))
    }

    /// Progress within one module; unknown modules report all zeros.
    #[must_use]
    pub fn module_progress(&self, module_id: &ModuleId) -> Progress {
        let Some(module) = self.catalog.module(module_id) else {
            return Progress::empty();
        };
        let completed = module
            .topic_ids()
            .iter()
            .filter(|id| self.is_completed(id))
            .count();
        Progress::from_counts(to_u32(completed), module.total_topics())
    }

    /// Clear every completion and persist the empty set.
    pub async fn reset(&mut self) {
        self.completed.clear();
        self.save().await;
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_core::builtin_catalog;
    use storage::repository::InMemoryStore;

    async fn tracker(store: &InMemoryStore) -> ProgressTracker {
        ProgressTracker::load(Arc::new(builtin_catalog()), Arc::new(store.clone())).await
    }

    #[tokio::test]
    async fn toggle_twice_returns_true_then_false() {
        let store = InMemoryStore::new();
        let mut tracker = tracker(&store).await;
        let id = TopicId::new("cte");

        assert!(tracker.toggle(&id));
        assert!(tracker.is_completed(&id));
        assert!(!tracker.toggle(&id));
        assert!(!tracker.is_completed(&id));
        assert!(tracker.completed().is_empty());
    }

    #[tokio::test]
    async fn completion_follows_toggle_parity() {
        let store = InMemoryStore::new();
        let mut tracker = tracker(&store).await;
        let id = TopicId::new("deadlock");
        for n in 1..=7 {
            tracker.toggle(&id);
            assert_eq!(tracker.is_completed(&id), n % 2 == 1, "after {n} toggles");
        }
    }

    #[tokio::test]
    async fn toggle_does_not_persist_until_save() {
        let store = InMemoryStore::new();
        let mut tracker = tracker(&store).await;
        tracker.toggle(&TopicId::new("cte"));
        assert_eq!(store.get(PROGRESS_KEY).await.unwrap(), None);

        tracker.save().await;
        assert_eq!(
            store.get(PROGRESS_KEY).await.unwrap().as_deref(),
            Some(r#"["cte"]"#)
        );
    }

    #[tokio::test]
    async fn progress_percentage_rounds() {
        let store = InMemoryStore::new();
        let mut tracker = tracker(&store).await;
        assert_eq!(tracker.progress(), Progress::from_counts(0, 25));

        for id in ["normalization", "denormalization", "surrogate-key"] {
            tracker.toggle(&TopicId::new(id));
        }
        let progress = tracker.progress();
        assert_eq!(progress.completed, 3);
        assert_eq!(progress.total, 25);
        assert_eq!(progress.percentage, 12);

        let module = tracker.module_progress(&ModuleId::new("1"));
        assert_eq!(module, Progress::from_counts(3, 3));
        assert_eq!(module.percentage, 100);
    }

    #[tokio::test]
    async fn full_catalog_is_one_hundred_percent() {
        let store = InMemoryStore::new();
        let mut tracker = tracker(&store).await;
        let ids: Vec<TopicId> = tracker
            .catalog()
            .topics()
            .iter()
            .map(|t| t.id().clone())
            .collect();
        for id in &ids {
            tracker.toggle(id);
        }
        assert_eq!(tracker.progress().percentage, 100);
    }

    #[tokio::test]
    async fn unknown_module_reports_zeros() {
        let store = InMemoryStore::new();
        let tracker = tracker(&store).await;
        assert_eq!(
            tracker.module_progress(&ModuleId::new("404")),
            Progress {
                completed: 0,
                total: 0,
                percentage: 0
            }
        );
    }

    #[tokio::test]
    async fn stale_ids_are_ignored_for_ratios() {
        let store = InMemoryStore::new();
        store
            .set(PROGRESS_KEY, r#"["removed-topic","cte"]"#)
            .await
            .unwrap();
        let tracker = tracker(&store).await;

        assert!(tracker.is_completed(&TopicId::new("removed-topic")));
        assert_eq!(tracker.progress().completed, 1);
    }

    #[tokio::test]
    async fn corrupt_storage_loads_empty() {
        let store = InMemoryStore::new();
        store.set(PROGRESS_KEY, "{not json").await.unwrap();
        let tracker = tracker(&store).await;
        assert!(tracker.completed().is_empty());
    }

    #[tokio::test]
    async fn reset_clears_and_persists() {
        let store = InMemoryStore::new();
        let mut tracker = tracker(&store).await;
        tracker.toggle(&TopicId::new("pivot"));
        tracker.toggle(&TopicId::new("ntile"));
        tracker.save().await;

        tracker.reset().await;
        assert_eq!(tracker.progress().completed, 0);
        assert_eq!(store.get(PROGRESS_KEY).await.unwrap().as_deref(), Some("[]"));
    }
}
