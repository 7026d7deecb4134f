use std::fmt;

use crate::model::catalog::Catalog;
use crate::model::ids::ModuleId;

/// Identifier of the home section.
pub const HOME_SECTION_ID: &str = "home";

/// One top-level navigable view. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    Module(ModuleId),
}

impl Section {
    /// Resolve a section identifier (`home`, `module4`) against the catalog.
    ///
    /// Returns `None` for unknown identifiers.
    #[must_use]
    pub fn resolve(section_id: &str, catalog: &Catalog) -> Option<Self> {
        let section_id = section_id.trim();
        if section_id == HOME_SECTION_ID {
            return Some(Self::Home);
        }
        ModuleId::from_section_id(section_id)
            .filter(|id| catalog.module(id).is_some())
            .map(Self::Module)
    }

    /// Identifier used by navigation links and deep links.
    #[must_use]
    pub fn id(&self) -> String {
        match self {
            Self::Home => HOME_SECTION_ID.to_owned(),
            Self::Module(module_id) => module_id.section_id(),
        }
    }

    #[must_use]
    pub fn module_id(&self) -> Option<&ModuleId> {
        match self {
            Self::Home => None,
            Self::Module(module_id) => Some(module_id),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_data::builtin_catalog;

    #[test]
    fn resolves_home_and_known_modules() {
        let catalog = builtin_catalog();
        assert_eq!(Section::resolve("home", &catalog), Some(Section::Home));
        assert_eq!(
            Section::resolve("module3", &catalog),
            Some(Section::Module(ModuleId::new("3")))
        );
    }

    #[test]
    fn unknown_sections_do_not_resolve() {
        let catalog = builtin_catalog();
        assert_eq!(Section::resolve("module99", &catalog), None);
        assert_eq!(Section::resolve("settings", &catalog), None);
    }

    #[test]
    fn id_round_trips() {
        let section = Section::Module(ModuleId::new("6"));
        assert_eq!(section.id(), "module6");
        assert_eq!(Section::Home.to_string(), "home");
    }
}
