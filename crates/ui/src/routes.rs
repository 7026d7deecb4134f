use dioxus::prelude::*;
use dioxus_router::Routable;
use hub_core::model::{ModuleId, Section};

use crate::views::{HomeView, Layout, ModuleView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/module/:id", ModuleView)] Module { id: String },
}

impl Route {
    /// The route that renders `section`.
    #[must_use]
    pub fn from_section(section: &Section) -> Self {
        match section {
            Section::Home => Self::Home {},
            Section::Module(module_id) => Self::Module {
                id: module_id.as_str().to_owned(),
            },
        }
    }

    #[must_use]
    pub fn section(&self) -> Section {
        match self {
            Self::Home {} => Section::Home,
            Self::Module { id } => Section::Module(ModuleId::new(id.as_str())),
        }
    }
}
