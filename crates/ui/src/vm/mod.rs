mod hub_vm;
mod markdown_vm;
mod search_vm;
mod topic_card_vm;

pub use hub_vm::{HubVm, ModuleCardVm, bar_style};
pub use markdown_vm::{has_code_block, markdown_to_html, sanitize_html};
pub use search_vm::{NO_RESULTS_TEXT, SearchListVm, SearchResultVm};
pub use topic_card_vm::{
    COLLAPSE_LABEL, COMPLETED_GLYPH, EXPAND_LABEL, MARK_COMPLETE_TITLE, MARK_INCOMPLETE_TITLE,
    PENDING_GLYPH, TopicCardVm, completion_glyph, completion_title, expand_label, render_bodies,
};
