mod components;
mod dispatch;
mod home;
mod layout;
mod module;

pub use components::{ModuleCard, ProgressSummary, SearchResults, TopicCard};
pub use dispatch::Dispatcher;
pub use home::HomeView;
pub use layout::Layout;
pub use module::ModuleView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
