use serde::Serialize;

use crate::model::ids::{ModuleId, TopicId};

/// A named group of topics with a declared expected total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
    id: ModuleId,
    name: String,
    total_topics: u32,
    topic_ids: Vec<TopicId>,
}

impl Module {
    /// Builds a module whose declared total is the number of topic ids.
    #[must_use]
    pub fn new(id: ModuleId, name: impl Into<String>, topic_ids: Vec<TopicId>) -> Self {
        let total_topics = u32::try_from(topic_ids.len()).unwrap_or(u32::MAX);
        Self {
            id,
            name: name.into(),
            total_topics,
            topic_ids,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ModuleId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn total_topics(&self) -> u32 {
        self.total_topics
    }

    #[must_use]
    pub fn topic_ids(&self) -> &[TopicId] {
        &self.topic_ids
    }

    /// Section identifier of the module detail view.
    #[must_use]
    pub fn section_id(&self) -> String {
        self.id.section_id()
    }
}
