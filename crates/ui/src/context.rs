use std::sync::{Arc, Mutex as StdMutex};

use tokio::sync::Mutex;

use crate::controller::UiController;
use crate::delta::UiDelta;
use crate::vm::HubVm;

/// Shared handle to the controller plus the state needed for the first render.
///
/// All controller access goes through one async mutex, so completion and
/// expansion state are only ever mutated by one task at a time.
#[derive(Clone)]
pub struct AppContext {
    controller: Arc<Mutex<UiController>>,
    initial: HubVm,
    startup: Arc<StdMutex<Option<UiDelta>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(controller: UiController, startup: UiDelta) -> Self {
        let initial = controller.snapshot();
        Self {
            controller: Arc::new(Mutex::new(controller)),
            initial,
            startup: Arc::new(StdMutex::new(Some(startup))),
        }
    }

    #[must_use]
    pub fn controller(&self) -> Arc<Mutex<UiController>> {
        Arc::clone(&self.controller)
    }

    /// State rendered before the first intent is handled.
    #[must_use]
    pub fn initial(&self) -> HubVm {
        self.initial.clone()
    }

    /// The startup delta, handed out once.
    #[must_use]
    pub fn take_startup(&self) -> Option<UiDelta> {
        self.startup.lock().ok().and_then(|mut guard| guard.take())
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext`, running the controller's startup steps and the optional deep link.
#[must_use]
pub fn build_app_context(mut controller: UiController, deep_link: Option<&str>) -> AppContext {
    let mut startup = controller.init();
    if let Some(raw) = deep_link {
        startup.extend(controller.open_deep_link(raw));
    }
    AppContext::new(controller, startup)
}
