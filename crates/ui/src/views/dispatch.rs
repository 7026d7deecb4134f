use dioxus::prelude::*;
use dioxus_router::Navigator;

use crate::context::AppContext;
use crate::delta::{UiChange, UiDelta};
use crate::intent::HubIntent;
use crate::routes::Route;
use crate::scripts::{
    focus_search_script, highlight_all_script, highlight_card_script, run_script,
    scroll_into_view_script, scroll_to_top_script,
};
use crate::vm::HubVm;

/// Sends intents to the controller and applies the resulting deltas.
///
/// State changes reach the screen through the `hub` snapshot signal; the
/// remaining changes (routing, scrolling, focus, highlighting, deferred
/// reveals) are applied here.
#[derive(Clone)]
pub struct Dispatcher {
    ctx: AppContext,
    hub: Signal<HubVm>,
    navigator: Navigator,
}

impl Dispatcher {
    #[must_use]
    pub fn new(ctx: AppContext, hub: Signal<HubVm>, navigator: Navigator) -> Self {
        Self {
            ctx,
            hub,
            navigator,
        }
    }

    /// Handle `intent` on a new task.
    pub fn send(&self, intent: HubIntent) {
        let this = self.clone();
        spawn(async move {
            this.run(intent).await;
        });
    }

    async fn run(&self, intent: HubIntent) {
        let controller = self.ctx.controller();
        let delta = {
            let mut guard = controller.lock().await;
            let delta = guard.handle(intent).await;
            let mut hub = self.hub;
            hub.set(guard.snapshot());
            delta
        };
        self.apply(delta).await;
    }

    /// Apply the effects of a delta that the snapshot does not cover.
    pub async fn apply(&self, delta: UiDelta) {
        for change in delta {
            match change {
                UiChange::ShowSection(section) => {
                    self.navigator.push(Route::from_section(&section));
                }
                UiChange::ScrollToTop => run_script(&scroll_to_top_script()).await,
                UiChange::HighlightAll => run_script(&highlight_all_script()).await,
                UiChange::HighlightCode { topic } => {
                    run_script(&highlight_card_script(&topic)).await;
                }
                UiChange::ScrollIntoView { topic } => {
                    run_script(&scroll_into_view_script(&topic)).await;
                }
                UiChange::FocusSearch => run_script(&focus_search_script()).await,
                UiChange::ScheduleReveal { topic, after } => {
                    let this = self.clone();
                    spawn(async move {
                        tokio::time::sleep(after).await;
                        this.send(HubIntent::RevealTopic(topic));
                    });
                }
                // rendered from the snapshot
                UiChange::SetActiveNav(_)
                | UiChange::SetSidebar { .. }
                | UiChange::SetCardExpanded { .. }
                | UiChange::SetCardCompleted { .. }
                | UiChange::SetOverallProgress(_)
                | UiChange::SetModuleProgress { .. }
                | UiChange::RenderSearchResults(_)
                | UiChange::RenderNoResults
                | UiChange::ClearSearchResults
                | UiChange::SetSearchResultsVisible(_)
                | UiChange::ClearSearchInput
                | UiChange::PreventDefault => {}
            }
        }
    }
}
