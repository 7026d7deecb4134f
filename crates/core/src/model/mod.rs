mod catalog;
mod ids;
mod module;
mod progress;
mod section;
mod topic;

pub use catalog::{Catalog, CatalogDraft, CatalogError, ModuleDraft, TopicDraft};
pub use ids::{MODULE_SECTION_PREFIX, ModuleId, ParseIdError, TopicId};
pub use module::Module;
pub use progress::Progress;
pub use section::{HOME_SECTION_ID, Section};
pub use topic::Topic;
