use hub_core::model::TopicId;

/// Keys the hub reacts to globally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShortcutKey {
    Escape,
    Slash,
    Other,
}

impl ShortcutKey {
    /// Classify a key by its `KeyboardEvent.key` name.
    #[must_use]
    pub fn from_key_name(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Self::Escape,
            "/" => Self::Slash,
            _ => Self::Other,
        }
    }

    /// Whether the key's default action must be suppressed.
    #[must_use]
    pub fn suppresses_default(self, target_is_text_input: bool) -> bool {
        matches!(self, Self::Slash) && !target_is_text_input
    }
}

/// A user gesture routed into `UiController::handle`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HubIntent {
    /// Nav link, module card, or back button pointing at a section id.
    Navigate(String),
    ToggleCard(TopicId),
    ToggleComplete(TopicId),
    Search(String),
    SearchFocused,
    ClickedOutsideSearch,
    ActivateSearchResult(TopicId),
    /// Deferred continuation of a topic navigation.
    RevealTopic(TopicId),
    ResetProgress { confirmed: bool },
    Key {
        key: ShortcutKey,
        target_is_text_input: bool,
    },
    SetSidebar(bool),
    DeepLink(String),
}
