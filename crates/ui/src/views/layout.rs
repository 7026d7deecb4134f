use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::{Outlet, use_navigator};
use hub_core::model::{Section, TopicId};

use crate::context::AppContext;
use crate::intent::{HubIntent, ShortcutKey};
use crate::routes::Route;
use crate::scripts::{HUB_ROOT_ID, confirm_reset, focus_hub_script};
use crate::vm::HubVm;

use super::components::{ProgressSummary, SearchResults};
use super::dispatch::Dispatcher;

fn shortcut_from(key: &Key) -> ShortcutKey {
    match key {
        Key::Escape => ShortcutKey::Escape,
        Key::Character(value) => ShortcutKey::from_key_name(value),
        _ => ShortcutKey::Other,
    }
}

/// Create the hub snapshot and its dispatcher, and provide both to descendants.
pub fn use_hub_dispatcher() -> (Dispatcher, Signal<HubVm>) {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let hub = use_signal(|| ctx.initial());
    let dispatcher = use_context_provider(|| Dispatcher::new(ctx.clone(), hub, navigator));
    use_context_provider(|| hub);
    (dispatcher, hub)
}

#[component]
pub fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let (dispatcher, hub) = use_hub_dispatcher();

    // shortcuts are bound on the root, so it needs focus before the first click
    use_effect(|| {
        let _ = eval(&focus_hub_script());
    });

    let startup_ctx = ctx.clone();
    let startup_dispatcher = dispatcher.clone();
    use_effect(move || {
        if let Some(delta) = startup_ctx.take_startup() {
            let dispatcher = startup_dispatcher.clone();
            spawn(async move {
                dispatcher.apply(delta).await;
            });
        }
    });

    let state = hub();
    let sidebar_class = if state.sidebar_open { "sidebar open" } else { "sidebar" };
    let overlay_class = if state.sidebar_open { "overlay active" } else { "overlay" };

    let on_key = {
        let dispatcher = dispatcher.clone();
        move |evt: KeyboardEvent| {
            let key = shortcut_from(&evt.data.key());
            if key.suppresses_default(false) {
                evt.prevent_default();
            }
            if key != ShortcutKey::Other {
                dispatcher.send(HubIntent::Key {
                    key,
                    target_is_text_input: false,
                });
            }
        }
    };
    let on_root_click = {
        let dispatcher = dispatcher.clone();
        move |_: MouseEvent| {
            if hub.read().search_visible {
                dispatcher.send(HubIntent::ClickedOutsideSearch);
            }
        }
    };

    rsx! {
        div {
            id: HUB_ROOT_ID,
            class: "hub",
            tabindex: "0",
            onkeydown: on_key,
            onclick: on_root_click,
            header { class: "topbar",
                button {
                    id: "menuToggle",
                    class: "menu-toggle",
                    r#type: "button",
                    aria_label: "Open navigation",
                    onclick: {
                        let dispatcher = dispatcher.clone();
                        move |_: MouseEvent| dispatcher.send(HubIntent::SetSidebar(true))
                    },
                    "☰"
                }
                h1 { class: "brand", "Database Learning Hub" }
                SearchBox { state: state.clone() }
                ProgressSummary { progress: state.overall }
            }
            Sidebar { state: state.clone(), class: sidebar_class }
            div {
                id: "overlay",
                class: "{overlay_class}",
                onclick: {
                    let dispatcher = dispatcher.clone();
                    move |_: MouseEvent| dispatcher.send(HubIntent::SetSidebar(false))
                },
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn SearchBox(state: HubVm) -> Element {
    let dispatcher = use_context::<Dispatcher>();
    let on_input = {
        let dispatcher = dispatcher.clone();
        move |evt: FormEvent| dispatcher.send(HubIntent::Search(evt.value()))
    };
    let on_focus = {
        let dispatcher = dispatcher.clone();
        move |_: FocusEvent| dispatcher.send(HubIntent::SearchFocused)
    };
    let on_key = {
        let dispatcher = dispatcher.clone();
        move |evt: KeyboardEvent| {
            evt.stop_propagation();
            if matches!(evt.data.key(), Key::Escape) {
                dispatcher.send(HubIntent::Key {
                    key: ShortcutKey::Escape,
                    target_is_text_input: true,
                });
            }
        }
    };
    let on_pick = {
        let dispatcher = dispatcher.clone();
        move |topic: TopicId| dispatcher.send(HubIntent::ActivateSearchResult(topic))
    };
    let query = state.search_query.clone();

    rsx! {
        div { class: "search-container", onclick: move |evt| evt.stop_propagation(),
            input {
                id: "searchInput",
                class: "search-input",
                r#type: "search",
                placeholder: "Search topics… (press /)",
                value: "{query}",
                oninput: on_input,
                onfocus: on_focus,
                onkeydown: on_key,
            }
            SearchResults { list: state.search.clone(), visible: state.search_visible, on_pick }
        }
    }
}

#[component]
fn Sidebar(state: HubVm, class: &'static str) -> Element {
    let dispatcher = use_context::<Dispatcher>();
    let home_active = state.is_nav_active(&Section::Home);
    let on_close = {
        let dispatcher = dispatcher.clone();
        move |_: MouseEvent| dispatcher.send(HubIntent::SetSidebar(false))
    };
    let on_reset = {
        let dispatcher = dispatcher.clone();
        move |_: MouseEvent| {
            let dispatcher = dispatcher.clone();
            spawn(async move {
                let confirmed = confirm_reset().await;
                dispatcher.send(HubIntent::ResetProgress { confirmed });
            });
        }
    };

    rsx! {
        nav { id: "sidebar", class: "{class}",
            button {
                id: "closeSidebar",
                class: "close-sidebar",
                r#type: "button",
                aria_label: "Close navigation",
                onclick: on_close,
                "×"
            }
            ul {
                NavLink { section_id: "home", label: "Home", active: home_active }
                for module in state.modules.iter() {
                    NavLink {
                        key: "{module.section_id}",
                        section_id: module.section_id.clone(),
                        label: module.name.clone(),
                        active: state.is_nav_active(&Section::Module(module.id.clone())),
                    }
                }
            }
            button {
                id: "resetProgress",
                class: "reset-progress",
                r#type: "button",
                onclick: on_reset,
                "Reset progress"
            }
        }
    }
}

#[component]
fn NavLink(section_id: String, label: String, active: bool) -> Element {
    let dispatcher = use_context::<Dispatcher>();
    let class = if active { "nav-link active" } else { "nav-link" };
    let href = format!("#{section_id}");
    let target = section_id.clone();
    rsx! {
        li {
            a {
                class: "{class}",
                href: "{href}",
                "data-section": "{section_id}",
                onclick: move |evt| {
                    evt.prevent_default();
                    dispatcher.send(HubIntent::Navigate(target.clone()));
                },
                "{label}"
            }
        }
    }
}
