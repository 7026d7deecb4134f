//! Descriptions of UI changes produced by `UiController` handlers.

use std::time::Duration;

use hub_core::model::{ModuleId, Progress, Section, TopicId};

use crate::vm::SearchResultVm;

/// One change the view layer should apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiChange {
    /// Deactivate every section and activate this one.
    ShowSection(Section),
    /// Mark the navigation link of this section as current.
    SetActiveNav(Section),
    ScrollToTop,
    /// Show or hide the navigation drawer together with its overlay.
    SetSidebar { open: bool },
    SetCardExpanded {
        topic: TopicId,
        expanded: bool,
        label: &'static str,
    },
    /// Ask the highlighter to colorize code blocks inside one card.
    HighlightCode { topic: TopicId },
    /// Ask the highlighter to colorize every code block on the page.
    HighlightAll,
    ScrollIntoView { topic: TopicId },
    SetCardCompleted {
        topic: TopicId,
        completed: bool,
        glyph: &'static str,
        title: &'static str,
    },
    SetOverallProgress(Progress),
    SetModuleProgress { module: ModuleId, progress: Progress },
    /// Replace the result list with these entries and show it.
    RenderSearchResults(Vec<SearchResultVm>),
    /// Replace the result list with the single "no results" placeholder and show it.
    RenderNoResults,
    /// Empty the result list and hide it.
    ClearSearchResults,
    SetSearchResultsVisible(bool),
    ClearSearchInput,
    FocusSearch,
    /// Suppress the default action of the triggering key event.
    PreventDefault,
    /// Expand and scroll to `topic` once `after` has elapsed.
    ScheduleReveal { topic: TopicId, after: Duration },
}

/// Ordered list of changes produced by one handler call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiDelta {
    changes: Vec<UiChange>,
}

impl UiDelta {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, change: UiChange) {
        self.changes.push(change);
    }

    pub fn extend(&mut self, other: UiDelta) {
        self.changes.extend(other.changes);
    }

    #[must_use]
    pub fn changes(&self) -> &[UiChange] {
        &self.changes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, change: &UiChange) -> bool {
        self.changes.contains(change)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UiChange> {
        self.changes.iter()
    }
}

impl IntoIterator for UiDelta {
    type Item = UiChange;
    type IntoIter = std::vec::IntoIter<UiChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}

impl From<Vec<UiChange>> for UiDelta {
    fn from(changes: Vec<UiChange>) -> Self {
        Self { changes }
    }
}
