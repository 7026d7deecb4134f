use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::{ModuleId, TopicId};
use crate::model::module::Module;
use crate::model::topic::Topic;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog must contain at least one module")]
    Empty,

    #[error("module id cannot be empty")]
    EmptyModuleId,

    #[error("topic id cannot be empty (module {module})")]
    EmptyTopicId { module: ModuleId },

    #[error("topic title cannot be empty ({topic})")]
    EmptyTitle { topic: TopicId },

    #[error("duplicate module id: {0}")]
    DuplicateModule(ModuleId),

    #[error("duplicate topic id: {0}")]
    DuplicateTopic(TopicId),

    #[error("module {module} declares {declared} topics but lists {actual}")]
    TotalMismatch {
        module: ModuleId,
        declared: u32,
        actual: usize,
    },

    #[error("invalid catalog json: {0}")]
    Json(String),
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated catalog shape, as written in a catalog file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogDraft {
    pub modules: Vec<ModuleDraft>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModuleDraft {
    pub id: String,
    pub name: String,
    /// Declared topic count; must match `topics.len()` when present.
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub topics: Vec<TopicDraft>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopicDraft {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
}

impl CatalogDraft {
    /// Parse a draft from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Json` when the input is not a valid catalog document.
    pub fn from_json(input: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(input).map_err(|err| CatalogError::Json(err.to_string()))
    }

    /// Validate ids and declared totals, producing an immutable `Catalog`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on empty or duplicate ids, empty titles, or a
    /// declared total that disagrees with the listed topics.
    pub fn validate(self) -> Result<Catalog, CatalogError> {
        if self.modules.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen_modules = HashSet::new();
        let mut seen_topics = HashSet::new();
        let mut modules = Vec::with_capacity(self.modules.len());
        let mut topics = Vec::new();

        for draft in self.modules {
            let module_id = ModuleId::new(draft.id.trim());
            if module_id.as_str().is_empty() {
                return Err(CatalogError::EmptyModuleId);
            }
            if !seen_modules.insert(module_id.clone()) {
                return Err(CatalogError::DuplicateModule(module_id));
            }
            if let Some(declared) = draft.total {
                if usize::try_from(declared).ok() != Some(draft.topics.len()) {
                    return Err(CatalogError::TotalMismatch {
                        module: module_id,
                        declared,
                        actual: draft.topics.len(),
                    });
                }
            }

            let mut topic_ids = Vec::with_capacity(draft.topics.len());
            for topic in draft.topics {
                let topic_id = TopicId::new(topic.id.trim());
                if topic_id.as_str().is_empty() {
                    return Err(CatalogError::EmptyTopicId {
                        module: module_id.clone(),
                    });
                }
                if topic.title.trim().is_empty() {
                    return Err(CatalogError::EmptyTitle { topic: topic_id });
                }
                if !seen_topics.insert(topic_id.clone()) {
                    return Err(CatalogError::DuplicateTopic(topic_id));
                }
                let mut built = Topic::new(
                    topic_id.clone(),
                    topic.title.trim(),
                    module_id.clone(),
                    draft.name.trim(),
                );
                if let Some(body) = topic.body {
                    built = built.with_body(body);
                }
                topic_ids.push(topic_id);
                topics.push(built);
            }

            modules.push(Module::new(module_id, draft.name.trim(), topic_ids));
        }

        Ok(Catalog::from_parts(topics, modules))
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// The canonical, immutable set of modules and topics.
///
/// Built once at startup and shared by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    topics: Vec<Topic>,
    modules: Vec<Module>,
    topic_index: HashMap<TopicId, usize>,
    module_index: HashMap<ModuleId, usize>,
}

impl Catalog {
    fn from_parts(topics: Vec<Topic>, modules: Vec<Module>) -> Self {
        let topic_index = topics
            .iter()
            .enumerate()
            .map(|(idx, topic)| (topic.id().clone(), idx))
            .collect();
        let module_index = modules
            .iter()
            .enumerate()
            .map(|(idx, module)| (module.id().clone(), idx))
            .collect();
        Self {
            topics,
            modules,
            topic_index,
            module_index,
        }
    }

    /// All topics in catalog order.
    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// All modules in catalog order.
    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    #[must_use]
    pub fn topic(&self, id: &TopicId) -> Option<&Topic> {
        self.topic_index.get(id).map(|idx| &self.topics[*idx])
    }

    #[must_use]
    pub fn module(&self, id: &ModuleId) -> Option<&Module> {
        self.module_index.get(id).map(|idx| &self.modules[*idx])
    }

    #[must_use]
    pub fn contains_topic(&self, id: &TopicId) -> bool {
        self.topic_index.contains_key(id)
    }

    /// Topics of one module, in module order. Empty for unknown modules.
    #[must_use]
    pub fn topics_in_module(&self, id: &ModuleId) -> Vec<&Topic> {
        self.module(id)
            .map(|module| {
                module
                    .topic_ids()
                    .iter()
                    .filter_map(|topic_id| self.topic(topic_id))
                    .collect()
            })
            .unwrap_or_default()
    }
}
