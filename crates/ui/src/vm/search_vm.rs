use hub_core::model::{ModuleId, Topic, TopicId};
use hub_core::search::SearchOutcome;

pub const NO_RESULTS_TEXT: &str = "No results found";

/// One entry of the search result dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResultVm {
    pub topic_id: TopicId,
    pub module_id: ModuleId,
    pub title: String,
    pub module_name: String,
}

impl SearchResultVm {
    #[must_use]
    pub fn from_topic(topic: &Topic) -> Self {
        Self {
            topic_id: topic.id().clone(),
            module_id: topic.module_id().clone(),
            title: topic.title().to_owned(),
            module_name: topic.module_name().to_owned(),
        }
    }
}

/// What the search dropdown currently holds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchListVm {
    #[default]
    Empty,
    NoResults,
    Results(Vec<SearchResultVm>),
}

impl SearchListVm {
    #[must_use]
    pub fn from_outcome(outcome: &SearchOutcome<'_>) -> Self {
        match outcome {
            SearchOutcome::Cleared => Self::Empty,
            SearchOutcome::NoResults => Self::NoResults,
            SearchOutcome::Matches(topics) => {
                Self::Results(topics.iter().map(|t| SearchResultVm::from_topic(t)).collect())
            }
        }
    }

    /// Number of rendered entries, counting the placeholder.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::NoResults => 1,
            Self::Results(items) => items.len(),
        }
    }
}
