use dioxus::prelude::*;
use hub_core::model::{Progress, TopicId};

use crate::intent::HubIntent;
use crate::vm::{
    ModuleCardVm, NO_RESULTS_TEXT, SearchListVm, SearchResultVm, TopicCardVm, bar_style,
};

#[component]
pub fn ProgressSummary(progress: Progress) -> Element {
    let style = bar_style(progress);
    let percentage = progress.percentage;
    let completed = progress.completed;
    let total = progress.total;
    rsx! {
        div { class: "progress-summary",
            div { class: "progress-track",
                div { id: "progressFill", class: "progress-fill", style: "{style}" }
            }
            span { id: "progressPercent", "{percentage}%" }
            span { class: "progress-count",
                span { id: "completedCount", "{completed}" }
                " / {total} topics"
            }
        }
    }
}

#[component]
pub fn ModuleCard(module: ModuleCardVm, on_intent: EventHandler<HubIntent>) -> Element {
    let section_id = module.section_id.clone();
    let href = format!("#{section_id}");
    let style = module.bar_style();
    let name = module.name.clone();
    let module_id = module.id.to_string();
    let completed = module.progress.completed;
    let total = module.progress.total;
    rsx! {
        a {
            class: "module-card",
            href: "{href}",
            onclick: move |evt| {
                evt.prevent_default();
                on_intent.call(HubIntent::Navigate(section_id.clone()));
            },
            h3 { "{name}" }
            p { class: "module-count", "{completed} / {total} completed" }
            div { class: "module-progress",
                div {
                    class: "module-progress-bar",
                    "data-module": "{module_id}",
                    style: "{style}",
                }
            }
        }
    }
}

#[component]
pub fn TopicCard(card: TopicCardVm, on_intent: EventHandler<HubIntent>) -> Element {
    let expand_id = card.id.clone();
    let complete_id = card.id.clone();
    let topic_id = card.id.to_string();
    let class = card.class();
    let title = card.title.clone();
    let glyph = card.glyph();
    let glyph_title = card.glyph_title();
    let expand_label = card.expand_label();
    // kept in the DOM while collapsed so highlighting always has targets
    let body = card.body_html.clone();
    rsx! {
        article { class: "{class}", "data-topic": "{topic_id}",
            header { class: "topic-header",
                h3 { "{title}" }
                button {
                    class: "mark-complete",
                    r#type: "button",
                    "data-topic": "{topic_id}",
                    title: "{glyph_title}",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_intent.call(HubIntent::ToggleComplete(complete_id.clone()));
                    },
                    "{glyph}"
                }
            }
            if let Some(body) = body {
                div { class: "topic-body", dangerous_inner_html: "{body}" }
            }
            button {
                class: "expand-btn",
                r#type: "button",
                onclick: move |_| on_intent.call(HubIntent::ToggleCard(expand_id.clone())),
                "{expand_label}"
            }
        }
    }
}

#[component]
pub fn SearchResults(list: SearchListVm, visible: bool, on_pick: EventHandler<TopicId>) -> Element {
    let class = if visible && list.entry_count() > 0 {
        "search-results active"
    } else {
        "search-results"
    };
    rsx! {
        div { id: "searchResults", class: "{class}",
            match list {
                SearchListVm::Empty => rsx! {},
                SearchListVm::NoResults => rsx! {
                    div { class: "search-result-item", "{NO_RESULTS_TEXT}" }
                },
                SearchListVm::Results(items) => rsx! {
                    for item in items {
                        SearchResultEntry { key: "{item.topic_id}", item: item.clone(), on_pick }
                    }
                },
            }
        }
    }
}

#[component]
fn SearchResultEntry(item: SearchResultVm, on_pick: EventHandler<TopicId>) -> Element {
    let topic = item.topic_id.clone();
    let topic_attr = item.topic_id.to_string();
    let module_attr = item.module_id.to_string();
    let title = item.title.clone();
    let module_name = item.module_name.clone();
    rsx! {
        div {
            class: "search-result-item",
            "data-topic": "{topic_attr}",
            "data-module": "{module_attr}",
            onclick: move |_| on_pick.call(topic.clone()),
            div { class: "search-result-title", "{title}" }
            div { class: "search-result-module", "{module_name}" }
        }
    }
}
