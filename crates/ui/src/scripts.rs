//! Webview scripts for the effects the virtual DOM cannot express.

use dioxus::document::eval;

use hub_core::model::TopicId;

use crate::controller::RESET_CONFIRMATION;

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_owned())
}

/// Highlight every code block on the page, if the highlighter is loaded.
#[must_use]
pub fn highlight_all_script() -> String {
    r#"
    if (typeof hljs !== "undefined") { hljs.highlightAll(); }
    "#
    .to_owned()
}

/// Highlight the code blocks of one card in place.
#[must_use]
pub fn highlight_card_script(topic: &TopicId) -> String {
    format!(
        r#"
    if (typeof hljs !== "undefined") {{
        const card = document.querySelector(`.topic-card[data-topic="${{{id}}}"]`);
        if (card) {{ card.querySelectorAll("pre code").forEach((block) => hljs.highlightElement(block)); }}
    }}
    "#,
        id = js_string(topic.as_str())
    )
}

#[must_use]
pub fn scroll_to_top_script() -> String {
    r#"window.scrollTo({ top: 0, behavior: "smooth" });"#.to_owned()
}

#[must_use]
pub fn scroll_into_view_script(topic: &TopicId) -> String {
    format!(
        r#"
    const card = document.querySelector(`.topic-card[data-topic="${{{id}}}"]`);
    if (card) {{ card.scrollIntoView({{ behavior: "smooth", block: "center" }}); }}
    "#,
        id = js_string(topic.as_str())
    )
}

/// Element id of the hub root that carries the keyboard shortcuts.
pub const HUB_ROOT_ID: &str = "hub";

#[must_use]
pub fn focus_hub_script() -> String {
    format!(
        "document.getElementById({})?.focus({{ preventScroll: true }});",
        js_string(HUB_ROOT_ID)
    )
}

#[must_use]
pub fn focus_search_script() -> String {
    r#"
    const input = document.getElementById("searchInput");
    if (input) { input.focus(); }
    "#
    .to_owned()
}

#[must_use]
pub fn confirm_reset_script() -> String {
    format!("return confirm({});", js_string(RESET_CONFIRMATION))
}

pub async fn run_script(script: &str) {
    let _ = eval(script).await;
}

/// Ask the user to confirm a progress reset. Treats a failed prompt as a decline.
pub async fn confirm_reset() -> bool {
    eval(&confirm_reset_script()).join::<bool>().await.unwrap_or(false)
}
