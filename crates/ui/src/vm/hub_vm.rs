use hub_core::model::{Module, ModuleId, Progress, Section};

use super::search_vm::SearchListVm;
use super::topic_card_vm::TopicCardVm;

/// A module tile on the home section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleCardVm {
    pub id: ModuleId,
    pub name: String,
    pub section_id: String,
    pub progress: Progress,
}

impl ModuleCardVm {
    #[must_use]
    pub fn new(module: &Module, progress: Progress) -> Self {
        Self {
            id: module.id().clone(),
            name: module.name().to_owned(),
            section_id: module.section_id(),
            progress,
        }
    }

    /// Inline width of the module progress bar.
    #[must_use]
    pub fn bar_style(&self) -> String {
        bar_style(self.progress)
    }
}

#[must_use]
pub fn bar_style(progress: Progress) -> String {
    format!("width: {}%", progress.percentage)
}

/// Everything the views need to render the hub, taken from `UiController::snapshot`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HubVm {
    pub active: Section,
    pub sidebar_open: bool,
    pub search_query: String,
    pub search_visible: bool,
    pub search: SearchListVm,
    pub overall: Progress,
    pub modules: Vec<ModuleCardVm>,
    pub cards: Vec<TopicCardVm>,
}

impl HubVm {
    /// Cards of one module in catalog order.
    pub fn cards_in<'a>(&'a self, module_id: &'a ModuleId) -> impl Iterator<Item = &'a TopicCardVm> {
        self.cards.iter().filter(move |card| &card.module_id == module_id)
    }

    #[must_use]
    pub fn module(&self, module_id: &ModuleId) -> Option<&ModuleCardVm> {
        self.modules.iter().find(|module| &module.id == module_id)
    }

    #[must_use]
    pub fn is_nav_active(&self, section: &Section) -> bool {
        &self.active == section
    }
}
