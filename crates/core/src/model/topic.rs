use serde::Serialize;

use crate::model::ids::{ModuleId, TopicId};

/// One learning unit, shown as an expandable card inside its module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    id: TopicId,
    title: String,
    module_id: ModuleId,
    module_name: String,
    body: Option<String>,
}

impl Topic {
    #[must_use]
    pub fn new(
        id: TopicId,
        title: impl Into<String>,
        module_id: ModuleId,
        module_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            module_id,
            module_name: module_name.into(),
            body: None,
        }
    }

    /// Attach a markdown body to the topic.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        let body = body.into();
        self.body = if body.trim().is_empty() { None } else { Some(body) };
        self
    }

    #[must_use]
    pub fn id(&self) -> &TopicId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn module_id(&self) -> &ModuleId {
        &self.module_id
    }

    #[must_use]
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// Markdown body, if the catalog provides one.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Case-insensitive substring match on title or module name.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.module_name.to_lowercase().contains(needle)
    }
}
