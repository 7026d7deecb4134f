use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix used when a module is addressed as a top-level section.
pub const MODULE_SECTION_PREFIX: &str = "module";

/// Stable identifier of a topic, e.g. `deadlock`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(String);

impl TopicId {
    /// Creates a new `TopicId`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of a module, e.g. `4`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(String);

impl ModuleId {
    /// Creates a new `ModuleId`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Section identifier of this module's detail view (`module4`).
    #[must_use]
    pub fn section_id(&self) -> String {
        format!("{MODULE_SECTION_PREFIX}{}", self.0)
    }

    /// Parses a section identifier (`module4`) back into a module id.
    #[must_use]
    pub fn from_section_id(section_id: &str) -> Option<Self> {
        section_id
            .strip_prefix(MODULE_SECTION_PREFIX)
            .filter(|rest| !rest.is_empty())
            .map(Self::new)
    }
}

impl fmt::Debug for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TopicId({})", self.0)
    }
}

impl fmt::Debug for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModuleId({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TopicId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<&str> for ModuleId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

/// Error type for parsing ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

fn parse_non_blank(s: &str, kind: &'static str) -> Result<String, ParseIdError> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return Err(ParseIdError { kind });
    }
    Ok(trimmed.to_owned())
}

impl FromStr for TopicId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_non_blank(s, "TopicId").map(TopicId)
    }
}

impl FromStr for ModuleId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_non_blank(s, "ModuleId").map(ModuleId)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_id_display() {
        let id = TopicId::new("deadlock");
        assert_eq!(id.to_string(), "deadlock");
    }

    #[test]
    fn test_topic_id_from_str_trims() {
        let id: TopicId = "  locking ".parse().unwrap();
        assert_eq!(id, TopicId::new("locking"));
    }

    #[test]
    fn test_topic_id_from_str_invalid() {
        assert!("".parse::<TopicId>().is_err());
        assert!("two words".parse::<TopicId>().is_err());
    }

    #[test]
    fn test_module_section_id() {
        let id = ModuleId::new("4");
        assert_eq!(id.section_id(), "module4");
        assert_eq!(ModuleId::from_section_id("module4"), Some(id));
    }

    #[test]
    fn test_module_from_section_id_rejects_bare_prefix() {
        assert_eq!(ModuleId::from_section_id("module"), None);
        assert_eq!(ModuleId::from_section_id("home"), None);
    }

    #[test]
    fn test_topic_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&vec![TopicId::new("cte")]).unwrap();
        assert_eq!(json, r#"["cte"]"#);
    }
}
