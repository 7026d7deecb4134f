use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use hub_core::builtin_catalog;
use hub_core::model::TopicId;
use services::AppServices;

use crate::context::{AppContext, build_app_context};
use crate::controller::UiController;
use crate::intent::HubIntent;
use crate::routes::Route;

use super::components::SearchResults;
use super::layout::use_hub_dispatcher;

#[derive(Props, Clone)]
struct HubHarnessProps {
    ctx: AppContext,
}

impl PartialEq for HubHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn HubRouterHarness(props: HubHarnessProps) -> Element {
    use_context_provider(|| props.ctx.clone());
    rsx! { Router::<Route> {} }
}

pub struct HubHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
    pub ctx: AppContext,
}

impl HubHarness {
    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Drive spawned tasks and effects until `done` accepts the rendered HTML.
    pub async fn drive_until(&mut self, done: impl Fn(&str) -> bool) -> String {
        for _ in 0..40 {
            drive_async(&mut self.dom).await;
            let html = self.render();
            if done(&html) {
                return html;
            }
        }
        self.render()
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn drive_async(dom: &mut VirtualDom) {
    let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Build a controller over in-memory storage and mount the routed hub.
pub async fn setup_hub_harness() -> HubHarness {
    setup_hub_harness_with(AppServices::in_memory(Arc::new(builtin_catalog()))).await
}

pub async fn setup_hub_harness_with(services: AppServices) -> HubHarness {
    setup_hub_harness_linked(services, None).await
}

/// Mount the routed hub as if launched with `deep_link`.
pub async fn setup_hub_harness_linked(services: AppServices, deep_link: Option<&str>) -> HubHarness {
    let controller = UiController::new(
        services.progress_tracker().await,
        services.expanded_state().await,
    );
    let ctx = build_app_context(controller, deep_link);

    let mut dom = VirtualDom::new_with_props(
        HubRouterHarness,
        HubHarnessProps { ctx: ctx.clone() },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);

    HubHarness { dom, services, ctx }
}

/// Intent callback registered by the dispatch harness once it mounts.
#[derive(Clone, Default)]
pub struct IntentHandle(Rc<RefCell<Option<Callback<HubIntent>>>>);

impl IntentHandle {
    pub fn send(&self, intent: HubIntent) {
        let callback = *self.0.borrow();
        callback.expect("dispatch harness not mounted").call(intent);
    }
}

#[derive(Props, Clone)]
struct DispatchHarnessProps {
    ctx: AppContext,
    handle: IntentHandle,
}

impl PartialEq for DispatchHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum DispatchRoute {
    #[route("/")]
    SearchOnly {},
}

#[component]
fn DispatchRouterHarness(props: DispatchHarnessProps) -> Element {
    use_context_provider(|| props.ctx.clone());
    use_context_provider(|| props.handle.clone());
    rsx! { Router::<DispatchRoute> {} }
}

#[component]
fn SearchOnly() -> Element {
    let handle = use_context::<IntentHandle>();
    let (dispatcher, hub) = use_hub_dispatcher();
    let send = use_callback(move |intent: HubIntent| dispatcher.send(intent));
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *handle.0.borrow_mut() = Some(send);
    }

    let state = hub();
    rsx! {
        SearchResults {
            list: state.search.clone(),
            visible: state.search_visible,
            on_pick: move |_: TopicId| {},
        }
    }
}

/// Mount only the search results behind a live dispatcher.
pub async fn setup_dispatch_harness() -> (VirtualDom, IntentHandle) {
    let services = AppServices::in_memory(Arc::new(builtin_catalog()));
    let controller = UiController::new(
        services.progress_tracker().await,
        services.expanded_state().await,
    );
    let handle = IntentHandle::default();
    let props = DispatchHarnessProps {
        ctx: build_app_context(controller, None),
        handle: handle.clone(),
    };

    let mut dom = VirtualDom::new_with_props(DispatchRouterHarness, props);
    dom.rebuild_in_place();
    drive_dom(&mut dom);

    (dom, handle)
}

/// Render a prop-less root component to HTML.
pub fn render_root(root: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
