//! Startup deep links: `#deadlock`, `module4`, or a full URL with a fragment.

use url::Url;

use crate::model::{Catalog, ModuleId, Section, TopicId};

/// Where a deep link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeepLink {
    /// A topic card inside its module section.
    Topic { module: ModuleId, topic: TopicId },
    /// A whole section.
    Section(Section),
}

/// Extract the fragment from a raw deep link.
///
/// Accepts absolute URLs (`hub://local/#deadlock`), `#fragment`, or a bare fragment.
#[must_use]
pub fn fragment_of(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let fragment = match Url::parse(raw) {
        Ok(url) => url.fragment().map(str::to_owned)?,
        Err(_) => raw.strip_prefix('#').unwrap_or(raw).to_owned(),
    };

    let fragment = fragment.trim();
    if fragment.is_empty() {
        None
    } else {
        Some(fragment.to_owned())
    }
}

/// Resolve a raw deep link against the catalog.
///
/// Topic ids win over section ids. Anything unknown resolves to `None`.
#[must_use]
pub fn resolve(raw: &str, catalog: &Catalog) -> Option<DeepLink> {
    let fragment = fragment_of(raw)?;

    if let Some(topic) = catalog.topic(&TopicId::new(fragment.as_str())) {
        return Some(DeepLink::Topic {
            module: topic.module_id().clone(),
            topic: topic.id().clone(),
        });
    }

    ModuleId::from_section_id(&fragment)?;
    Section::resolve(&fragment, catalog).map(DeepLink::Section)
}
