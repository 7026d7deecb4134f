//! Turns user gestures into state changes and UI deltas.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use hub_core::deep_link::{self, DeepLink};
use hub_core::model::{Catalog, Section, TopicId};
use hub_core::search;
use services::{ExpandedState, ProgressTracker};

use crate::delta::{UiChange, UiDelta};
use crate::intent::{HubIntent, ShortcutKey};
use crate::vm::{
    HubVm, ModuleCardVm, SearchListVm, TopicCardVm, completion_glyph, completion_title,
    expand_label, has_code_block, render_bodies,
};

/// Delay between switching to a topic's section and revealing its card.
pub const REVEAL_DELAY: Duration = Duration::from_millis(100);

pub const RESET_CONFIRMATION: &str =
    "Are you sure you want to reset all progress? This cannot be undone.";

/// Owns the visible section, expanded cards, sidebar and search state.
///
/// Every handler returns the `UiDelta` the view layer should apply; the
/// current state can be rendered at any time from `snapshot`.
pub struct UiController {
    catalog: Arc<Catalog>,
    progress: ProgressTracker,
    expanded: ExpandedState,
    bodies: HashMap<TopicId, String>,
    active: Section,
    sidebar_open: bool,
    search_query: String,
    search_visible: bool,
    search_list: SearchListVm,
}

impl UiController {
    #[must_use]
    pub fn new(progress: ProgressTracker, expanded: ExpandedState) -> Self {
        let catalog = Arc::clone(progress.catalog());
        let bodies = render_bodies(catalog.topics());
        Self {
            catalog,
            progress,
            expanded,
            bodies,
            active: Section::Home,
            sidebar_open: false,
            search_query: String::new(),
            search_visible: false,
            search_list: SearchListVm::Empty,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    #[must_use]
    pub fn active_section(&self) -> &Section {
        &self.active
    }

    #[must_use]
    pub fn is_expanded(&self, topic_id: &TopicId) -> bool {
        self.expanded.is_expanded(topic_id)
    }

    #[must_use]
    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    #[must_use]
    pub fn search_visible(&self) -> bool {
        self.search_visible
    }

    /// Route one intent to its handler.
    pub async fn handle(&mut self, intent: HubIntent) -> UiDelta {
        match intent {
            HubIntent::Navigate(section_id) => self.navigate(&section_id),
            HubIntent::ToggleCard(topic) => self.toggle_card(&topic).await,
            HubIntent::ToggleComplete(topic) => self.toggle_complete(&topic).await,
            HubIntent::Search(query) => self.search(&query),
            HubIntent::SearchFocused => self.search_focused(),
            HubIntent::ClickedOutsideSearch => self.hide_search_results(),
            HubIntent::ActivateSearchResult(topic) => self.activate_search_result(&topic),
            HubIntent::RevealTopic(topic) => self.reveal_topic(&topic).await,
            HubIntent::ResetProgress { confirmed } => self.reset_progress(confirmed).await,
            HubIntent::Key {
                key,
                target_is_text_input,
            } => self.key_down(key, target_is_text_input),
            HubIntent::SetSidebar(open) => self.set_sidebar(open),
            HubIntent::DeepLink(raw) => self.open_deep_link(&raw),
        }
    }

    /// Startup render: progress, highlight-all, restored expanded cards.
    #[must_use]
    pub fn init(&self) -> UiDelta {
        let mut delta = self.progress_delta();
        for topic in self.catalog.topics() {
            if self.progress.is_completed(topic.id()) {
                delta.push(completed_change(topic.id(), true));
            }
        }
        delta.push(UiChange::HighlightAll);
        for topic in self.expanded.expanded() {
            delta.push(UiChange::SetCardExpanded {
                topic: topic.clone(),
                expanded: true,
                label: expand_label(true),
            });
        }
        let progress = self.progress.progress();
        tracing::info!(
            "Progress: {}/{} topics",
            progress.completed,
            progress.total
        );
        delta
    }

    /// Navigate to a section by id. Unknown ids are ignored.
    pub fn navigate(&mut self, section_id: &str) -> UiDelta {
        match Section::resolve(section_id, &self.catalog) {
            Some(section) => self.show_section(section),
            None => {
                tracing::debug!(section_id, "ignoring navigation to unknown section");
                UiDelta::new()
            }
        }
    }

    fn show_section(&mut self, section: Section) -> UiDelta {
        tracing::debug!(from = %self.active, to = %section, "show section");
        self.active = section.clone();
        self.sidebar_open = false;
        UiDelta::from(vec![
            UiChange::ShowSection(section.clone()),
            UiChange::SetActiveNav(section),
            UiChange::ScrollToTop,
            UiChange::SetSidebar { open: false },
        ])
    }

    /// Expand a collapsed card or collapse an expanded one.
    pub async fn toggle_card(&mut self, topic_id: &TopicId) -> UiDelta {
        if !self.catalog.contains_topic(topic_id) {
            return UiDelta::new();
        }
        let expand = !self.expanded.is_expanded(topic_id);
        let mut delta = self.set_card_expanded(topic_id, expand).await;
        if expand {
            delta.extend(self.highlight_code(topic_id));
        }
        delta
    }

    /// Highlight request for a card, skipped when its body has no code block.
    fn highlight_code(&self, topic_id: &TopicId) -> UiDelta {
        let has_code = self
            .bodies
            .get(topic_id)
            .is_some_and(|html| has_code_block(html));
        if !has_code {
            return UiDelta::new();
        }
        UiDelta::from(vec![UiChange::HighlightCode {
            topic: topic_id.clone(),
        }])
    }

    async fn set_card_expanded(&mut self, topic_id: &TopicId, expand: bool) -> UiDelta {
        self.expanded.set_expanded(topic_id, expand);
        self.expanded.save().await;
        UiDelta::from(vec![UiChange::SetCardExpanded {
            topic: topic_id.clone(),
            expanded: expand,
            label: expand_label(expand),
        }])
    }

    /// Flip completion of a topic, persist it, and refresh progress displays.
    pub async fn toggle_complete(&mut self, topic_id: &TopicId) -> UiDelta {
        let completed = self.progress.toggle(topic_id);
        self.progress.save().await;
        tracing::debug!(topic = %topic_id, completed, "toggled completion");

        let mut delta = UiDelta::from(vec![completed_change(topic_id, completed)]);
        delta.extend(self.progress_delta());
        delta
    }

    /// Re-run the search for the current input value.
    pub fn search(&mut self, raw_query: &str) -> UiDelta {
        self.search_query = raw_query.to_owned();
        let outcome = search::search(&self.catalog, raw_query);
        self.search_list = SearchListVm::from_outcome(&outcome);

        match &self.search_list {
            SearchListVm::Empty => {
                self.search_visible = false;
                UiDelta::from(vec![UiChange::ClearSearchResults])
            }
            SearchListVm::NoResults => {
                self.search_visible = true;
                UiDelta::from(vec![UiChange::RenderNoResults])
            }
            SearchListVm::Results(items) => {
                self.search_visible = true;
                UiDelta::from(vec![UiChange::RenderSearchResults(items.clone())])
            }
        }
    }

    /// Focusing the field re-shows results when there is a query.
    pub fn search_focused(&mut self) -> UiDelta {
        if self.search_query.trim().is_empty() {
            return UiDelta::new();
        }
        self.search_visible = true;
        UiDelta::from(vec![UiChange::SetSearchResultsVisible(true)])
    }

    pub fn hide_search_results(&mut self) -> UiDelta {
        self.search_visible = false;
        UiDelta::from(vec![UiChange::SetSearchResultsVisible(false)])
    }

    /// Jump to a search hit: switch section, reset the search box, reveal later.
    pub fn activate_search_result(&mut self, topic_id: &TopicId) -> UiDelta {
        let mut delta = self.navigate_to_topic(topic_id);
        if delta.is_empty() {
            return delta;
        }
        delta.extend(self.hide_search_results());
        self.search_query.clear();
        delta.push(UiChange::ClearSearchInput);
        delta
    }

    /// Switch to a topic's module and schedule the card reveal.
    pub fn navigate_to_topic(&mut self, topic_id: &TopicId) -> UiDelta {
        let Some(module_id) = self
            .catalog
            .topic(topic_id)
            .map(|topic| topic.module_id().clone())
        else {
            return UiDelta::new();
        };
        let mut delta = self.show_section(Section::Module(module_id));
        delta.push(UiChange::ScheduleReveal {
            topic: topic_id.clone(),
            after: REVEAL_DELAY,
        });
        delta
    }

    /// Deferred half of a topic navigation: expand, scroll, highlight.
    pub async fn reveal_topic(&mut self, topic_id: &TopicId) -> UiDelta {
        if !self.catalog.contains_topic(topic_id) {
            return UiDelta::new();
        }
        let mut delta = self.set_card_expanded(topic_id, true).await;
        delta.push(UiChange::ScrollIntoView {
            topic: topic_id.clone(),
        });
        delta.extend(self.highlight_code(topic_id));
        delta
    }

    /// Clear all progress once the user has confirmed.
    pub async fn reset_progress(&mut self, confirmed: bool) -> UiDelta {
        if !confirmed {
            return UiDelta::new();
        }
        self.progress.reset().await;
        tracing::info!("progress reset");

        let mut delta = self.progress_delta();
        for topic in self.catalog.topics() {
            delta.push(completed_change(topic.id(), false));
        }
        delta
    }

    /// Global keyboard shortcuts.
    pub fn key_down(&mut self, key: ShortcutKey, target_is_text_input: bool) -> UiDelta {
        match key {
            ShortcutKey::Escape => {
                let mut delta = self.set_sidebar(false);
                delta.extend(self.hide_search_results());
                delta
            }
            ShortcutKey::Slash if !target_is_text_input => {
                UiDelta::from(vec![UiChange::PreventDefault, UiChange::FocusSearch])
            }
            ShortcutKey::Slash | ShortcutKey::Other => UiDelta::new(),
        }
    }

    /// Show or hide the navigation drawer and its overlay together.
    pub fn set_sidebar(&mut self, open: bool) -> UiDelta {
        self.sidebar_open = open;
        UiDelta::from(vec![UiChange::SetSidebar { open }])
    }

    /// Apply a startup deep link. Unknown targets are ignored.
    pub fn open_deep_link(&mut self, raw: &str) -> UiDelta {
        match deep_link::resolve(raw, &self.catalog) {
            Some(DeepLink::Topic { topic, .. }) => self.navigate_to_topic(&topic),
            Some(DeepLink::Section(section)) => self.show_section(section),
            None => {
                tracing::debug!(raw, "deep link did not match a topic or module");
                UiDelta::new()
            }
        }
    }

    fn progress_delta(&self) -> UiDelta {
        let mut delta = UiDelta::from(vec![UiChange::SetOverallProgress(
            self.progress.progress(),
        )]);
        for module in self.catalog.modules() {
            delta.push(UiChange::SetModuleProgress {
                module: module.id().clone(),
                progress: self.progress.module_progress(module.id()),
            });
        }
        delta
    }

    /// Current state as a render-ready view model.
    #[must_use]
    pub fn snapshot(&self) -> HubVm {
        let modules = self
            .catalog
            .modules()
            .iter()
            .map(|module| ModuleCardVm::new(module, self.progress.module_progress(module.id())))
            .collect();
        let cards = self
            .catalog
            .topics()
            .iter()
            .map(|topic| {
                TopicCardVm::from_topic(
                    topic,
                    self.bodies.get(topic.id()).cloned(),
                    self.expanded.is_expanded(topic.id()),
                    self.progress.is_completed(topic.id()),
                )
            })
            .collect();

        HubVm {
            active: self.active.clone(),
            sidebar_open: self.sidebar_open,
            search_query: self.search_query.clone(),
            search_visible: self.search_visible,
            search: self.search_list.clone(),
            overall: self.progress.progress(),
            modules,
            cards,
        }
    }
}

fn completed_change(topic_id: &TopicId, completed: bool) -> UiChange {
    UiChange::SetCardCompleted {
        topic: topic_id.clone(),
        completed,
        glyph: completion_glyph(completed),
        title: completion_title(completed),
    }
}
