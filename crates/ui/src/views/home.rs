use dioxus::prelude::*;

use crate::intent::HubIntent;
use crate::vm::HubVm;

use super::components::ModuleCard;
use super::dispatch::Dispatcher;

#[component]
pub fn HomeView() -> Element {
    let hub = use_context::<Signal<HubVm>>();
    let dispatcher = use_context::<Dispatcher>();
    let state = hub();
    let on_intent = EventHandler::new(move |intent: HubIntent| dispatcher.send(intent));

    rsx! {
        section { id: "home", class: "content-section active",
            h2 { "Modules" }
            p { class: "section-lead", "Pick a module to start reading. Progress is saved on this machine." }
            div { class: "module-grid",
                for module in state.modules.iter() {
                    ModuleCard { key: "{module.section_id}", module: module.clone(), on_intent }
                }
            }
        }
    }
}
