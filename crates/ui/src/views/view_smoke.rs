use std::sync::Arc;

use dioxus::prelude::*;
use hub_core::builtin_catalog;
use hub_core::model::{ModuleId, Progress, TopicId};
use services::AppServices;

use super::components::{ProgressSummary, SearchResults, TopicCard};
use super::test_harness::{
    drive_async, render_root, setup_dispatch_harness, setup_hub_harness, setup_hub_harness_linked,
    setup_hub_harness_with,
};
use crate::intent::HubIntent;
use crate::vm::{
    COMPLETED_GLYPH, MARK_INCOMPLETE_TITLE, NO_RESULTS_TEXT, SearchListVm, SearchResultVm,
    TopicCardVm, markdown_to_html,
};

#[tokio::test(flavor = "current_thread")]
async fn hub_smoke_renders_header_navigation_and_modules() {
    let harness = setup_hub_harness().await;
    let html = harness.render();

    assert!(html.contains("Database Learning Hub"), "missing title in {html}");
    assert!(html.contains("id=\"hub\""), "missing focus target in {html}");
    assert!(html.contains("tabindex=\"0\""), "hub root must be focusable in {html}");
    assert!(html.contains("id=\"searchInput\""), "missing search box in {html}");
    assert!(html.contains("Database Fundamentals"), "missing module in {html}");
    assert!(html.contains("data-section=\"module6\""), "missing nav link in {html}");
    assert!(html.contains(" / 25 topics"), "missing overall progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn deep_link_routes_to_module_and_reveals_topic() {
    let services = AppServices::in_memory(Arc::new(builtin_catalog()));
    let mut harness = setup_hub_harness_linked(services, Some("#deadlock")).await;

    let html = harness
        .drive_until(|html| html.contains("id=\"module4\"") && html.contains("topic-card expanded"))
        .await;
    assert!(html.contains("id=\"module4\""), "deep link should open module 4 in {html}");
    assert!(html.contains("topic-card expanded"), "deadlock card should open in {html}");
    assert_eq!(html.matches("topic-card expanded").count(), 1, "in {html}");
    assert!(harness.ctx.take_startup().is_none(), "startup delta runs once");

    let expanded = harness.services.expanded_state().await;
    assert!(expanded.is_expanded(&TopicId::new("deadlock")));
}

#[tokio::test(flavor = "current_thread")]
async fn outside_click_hides_open_search_results() {
    let (mut dom, handle) = setup_dispatch_harness().await;

    handle.send(HubIntent::Search("lock".into()));
    let mut html = String::new();
    for _ in 0..10 {
        drive_async(&mut dom).await;
        html = dioxus_ssr::render(&dom);
        if html.contains("search-results active") {
            break;
        }
    }
    assert!(html.contains("search-results active"), "results should open in {html}");

    handle.send(HubIntent::ClickedOutsideSearch);
    for _ in 0..10 {
        drive_async(&mut dom).await;
        html = dioxus_ssr::render(&dom);
        if !html.contains("search-results active") {
            break;
        }
    }
    assert!(!html.contains("search-results active"), "results should hide in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn hub_smoke_reflects_stored_progress() {
    let services = AppServices::in_memory(Arc::new(builtin_catalog()));
    let mut tracker = services.progress_tracker().await;
    tracker.toggle(&TopicId::new("normalization"));
    tracker.toggle(&TopicId::new("denormalization"));
    tracker.save().await;

    let harness = setup_hub_harness_with(services).await;
    let html = harness.render();
    assert!(html.contains("2 / 3 completed"), "missing module count in {html}");
    assert!(html.contains("width: 67%"), "missing module bar in {html}");
    assert!(html.contains("8%"), "missing overall percentage in {html}");
}

fn completed_card_root() -> Element {
    let card = TopicCardVm {
        id: TopicId::new("deadlock"),
        module_id: ModuleId::new("4"),
        title: "Deadlock".into(),
        body_html: Some("<p>Two transactions wait on each other.</p>".into()),
        expanded: true,
        completed: true,
    };
    rsx! { TopicCard { card, on_intent: move |_: HubIntent| {} } }
}

#[test]
fn topic_card_smoke_renders_completed_expanded_state() {
    let html = render_root(completed_card_root);
    assert!(html.contains("topic-card expanded completed"), "missing classes in {html}");
    assert!(html.contains(COMPLETED_GLYPH), "missing glyph in {html}");
    assert!(html.contains(MARK_INCOMPLETE_TITLE), "missing title attr in {html}");
    assert!(html.contains("Two transactions wait"), "missing body in {html}");
    assert!(html.contains("data-topic=\"deadlock\""), "missing data attr in {html}");
}

fn collapsed_card_root() -> Element {
    let card = TopicCardVm {
        id: TopicId::new("acid"),
        module_id: ModuleId::new("4"),
        title: "ACID Properties".into(),
        body_html: Some(markdown_to_html("Atomicity.\n\n```sql\nBEGIN;\n```")),
        expanded: false,
        completed: false,
    };
    rsx! { TopicCard { card, on_intent: move |_: HubIntent| {} } }
}

#[test]
fn topic_card_smoke_keeps_collapsed_body_in_dom() {
    let html = render_root(collapsed_card_root);
    assert!(html.contains("class=\"topic-card\""), "card should be collapsed in {html}");
    assert!(!html.contains("expanded"), "card should be collapsed in {html}");
    assert!(html.contains("topic-body"), "body must stay mounted in {html}");
    assert!(html.contains("<pre><code class=\"language-sql\">"), "missing code block in {html}");
    assert!(html.contains("Read More"), "missing expand label in {html}");
}

fn no_results_root() -> Element {
    rsx! {
        SearchResults {
            list: SearchListVm::NoResults,
            visible: true,
            on_pick: move |_: TopicId| {},
        }
    }
}

#[test]
fn search_results_smoke_renders_single_placeholder() {
    let html = render_root(no_results_root);
    assert_eq!(html.matches(NO_RESULTS_TEXT).count(), 1, "in {html}");
    assert_eq!(html.matches("search-result-item").count(), 1, "in {html}");
    assert!(html.contains("search-results active"), "results should be shown in {html}");
}

fn matches_root() -> Element {
    let list = SearchListVm::Results(vec![
        SearchResultVm {
            topic_id: TopicId::new("deadlock"),
            module_id: ModuleId::new("4"),
            title: "Deadlock".into(),
            module_name: "Module 4: Transaction Management".into(),
        },
        SearchResultVm {
            topic_id: TopicId::new("locking"),
            module_id: ModuleId::new("4"),
            title: "Locking Protocols".into(),
            module_name: "Module 4: Transaction Management".into(),
        },
    ]);
    rsx! { SearchResults { list, visible: true, on_pick: move |_: TopicId| {} } }
}

#[test]
fn search_results_smoke_renders_matches_with_module_names() {
    let html = render_root(matches_root);
    assert!(html.contains("data-topic=\"deadlock\""), "in {html}");
    assert!(html.contains("data-topic=\"locking\""), "in {html}");
    assert_eq!(html.matches("Module 4: Transaction Management").count(), 2, "in {html}");
}

fn progress_root() -> Element {
    rsx! { ProgressSummary { progress: Progress::from_counts(13, 25) } }
}

#[test]
fn progress_summary_smoke_renders_rounded_percentage() {
    let html = render_root(progress_root);
    assert!(html.contains("52%"), "missing percentage in {html}");
    assert!(html.contains("width: 52%"), "missing bar width in {html}");
    assert!(html.contains(" / 25 topics"), "missing total in {html}");
}
