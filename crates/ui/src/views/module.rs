use dioxus::prelude::*;
use hub_core::model::ModuleId;

use crate::intent::HubIntent;
use crate::vm::{HubVm, bar_style};

use super::components::TopicCard;
use super::dispatch::Dispatcher;

#[component]
pub fn ModuleView(id: String) -> Element {
    let hub = use_context::<Signal<HubVm>>();
    let dispatcher = use_context::<Dispatcher>();
    let state = hub();
    let module_id = ModuleId::new(id.as_str());

    let Some(module) = state.module(&module_id).cloned() else {
        return rsx! {
            section { class: "content-section active",
                p { class: "muted", "Unknown module." }
            }
        };
    };

    let cards: Vec<_> = state.cards_in(&module_id).cloned().collect();
    let section_id = module.section_id.clone();
    let name = module.name.clone();
    let completed = module.progress.completed;
    let total = module.progress.total;
    let style = bar_style(module.progress);
    let on_back = {
        let dispatcher = dispatcher.clone();
        move |_: MouseEvent| dispatcher.send(HubIntent::Navigate("home".into()))
    };
    let on_intent = EventHandler::new(move |intent: HubIntent| dispatcher.send(intent));

    rsx! {
        section { id: "{section_id}", class: "content-section active",
            button { class: "back-btn", r#type: "button", onclick: on_back, "← Back to modules" }
            h2 { "{name}" }
            div { class: "module-summary",
                span { "{completed} / {total} completed" }
                div { class: "module-progress",
                    div { class: "module-progress-bar", style: "{style}" }
                }
            }
            div { class: "topic-list",
                for card in cards.iter() {
                    TopicCard { key: "{card.id}", card: card.clone(), on_intent }
                }
            }
        }
    }
}
