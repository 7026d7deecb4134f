pub mod app;
pub mod context;
pub mod controller;
pub mod delta;
pub mod intent;
pub mod routes;
pub mod scripts;
pub mod views;
pub mod vm;

pub use app::App;
pub use context::{AppContext, build_app_context};
pub use controller::{REVEAL_DELAY, RESET_CONFIRMATION, UiController};
pub use delta::{UiChange, UiDelta};
pub use intent::{HubIntent, ShortcutKey};
