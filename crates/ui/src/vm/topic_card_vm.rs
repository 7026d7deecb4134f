use hub_core::model::{ModuleId, Topic, TopicId};

use super::markdown_vm::markdown_to_html;

pub const EXPAND_LABEL: &str = "Read More ↓";
pub const COLLAPSE_LABEL: &str = "Show Less ↑";
pub const COMPLETED_GLYPH: &str = "✓";
pub const PENDING_GLYPH: &str = "○";
pub const MARK_INCOMPLETE_TITLE: &str = "Mark as incomplete";
pub const MARK_COMPLETE_TITLE: &str = "Mark as complete";

#[must_use]
pub fn expand_label(expanded: bool) -> &'static str {
    if expanded { COLLAPSE_LABEL } else { EXPAND_LABEL }
}

#[must_use]
pub fn completion_glyph(completed: bool) -> &'static str {
    if completed { COMPLETED_GLYPH } else { PENDING_GLYPH }
}

#[must_use]
pub fn completion_title(completed: bool) -> &'static str {
    if completed {
        MARK_INCOMPLETE_TITLE
    } else {
        MARK_COMPLETE_TITLE
    }
}

/// UI-ready state of one topic card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicCardVm {
    pub id: TopicId,
    pub module_id: ModuleId,
    pub title: String,
    pub body_html: Option<String>,
    pub expanded: bool,
    pub completed: bool,
}

impl TopicCardVm {
    #[must_use]
    pub fn from_topic(topic: &Topic, body_html: Option<String>, expanded: bool, completed: bool) -> Self {
        Self {
            id: topic.id().clone(),
            module_id: topic.module_id().clone(),
            title: topic.title().to_owned(),
            body_html,
            expanded,
            completed,
        }
    }

    #[must_use]
    pub fn expand_label(&self) -> &'static str {
        expand_label(self.expanded)
    }

    #[must_use]
    pub fn glyph(&self) -> &'static str {
        completion_glyph(self.completed)
    }

    #[must_use]
    pub fn glyph_title(&self) -> &'static str {
        completion_title(self.completed)
    }

    /// CSS classes of the card container.
    #[must_use]
    pub fn class(&self) -> String {
        let mut class = String::from("topic-card");
        if self.expanded {
            class.push_str(" expanded");
        }
        if self.completed {
            class.push_str(" completed");
        }
        class
    }
}

/// Render every topic body once, keyed by topic id.
#[must_use]
pub fn render_bodies(topics: &[Topic]) -> std::collections::HashMap<TopicId, String> {
    topics
        .iter()
        .filter_map(|topic| {
            topic
                .body()
                .map(|body| (topic.id().clone(), markdown_to_html(body)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(expanded: bool, completed: bool) -> TopicCardVm {
        let topic = Topic::new(TopicId::new("cte"), "CTE", ModuleId::new("2"), "SQL Operations");
        TopicCardVm::from_topic(&topic, None, expanded, completed)
    }

    #[test]
    fn labels_follow_state() {
        let closed = card(false, false);
        assert_eq!(closed.expand_label(), "Read More ↓");
        assert_eq!(closed.glyph(), "○");
        assert_eq!(closed.glyph_title(), "Mark as complete");

        let open = card(true, true);
        assert_eq!(open.expand_label(), "Show Less ↑");
        assert_eq!(open.glyph(), "✓");
        assert_eq!(open.glyph_title(), "Mark as incomplete");
    }

    #[test]
    fn class_reflects_flags() {
        assert_eq!(card(false, false).class(), "topic-card");
        assert_eq!(card(true, true).class(), "topic-card expanded completed");
    }
}
