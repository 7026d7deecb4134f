//! Substring search over the topic catalog.

use crate::model::{Catalog, Topic};

/// Result of running a search query against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// The query was empty after trimming; the result list should be cleared and hidden.
    Cleared,
    /// The query matched nothing; a single placeholder entry should be shown.
    NoResults,
    /// Matching topics, in catalog order.
    Matches(Vec<&'a Topic>),
}

impl SearchOutcome<'_> {
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        matches!(self, Self::Cleared)
    }

    /// Number of matched topics (0 for `Cleared` and `NoResults`).
    #[must_use]
    pub fn match_count(&self) -> usize {
        match self {
            Self::Matches(topics) => topics.len(),
            Self::Cleared | Self::NoResults => 0,
        }
    }
}

/// Trim and lowercase a raw query.
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Find topics whose title or module name contains the query, case-insensitively.
#[must_use]
pub fn search<'a>(catalog: &'a Catalog, raw_query: &str) -> SearchOutcome<'a> {
    let needle = normalize_query(raw_query);
    if needle.is_empty() {
        return SearchOutcome::Cleared;
    }

    let matches: Vec<&Topic> = catalog
        .topics()
        .iter()
        .filter(|topic| topic.matches_lowercase(&needle))
        .collect();

    if matches.is_empty() {
        SearchOutcome::NoResults
    } else {
        SearchOutcome::Matches(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_data::builtin_catalog;

    fn ids(outcome: &SearchOutcome<'_>) -> Vec<String> {
        match outcome {
            SearchOutcome::Matches(topics) => {
                topics.iter().map(|t| t.id().to_string()).collect()
            }
            _ => Vec::new(),
        }
    }

    #[test]
    fn lock_matches_deadlock_and_locking_only() {
        let catalog = builtin_catalog();
        let outcome = search(&catalog, "lock");
        assert_eq!(ids(&outcome), vec!["deadlock", "locking"]);
    }

    #[test]
    fn query_is_trimmed_and_case_insensitive() {
        let catalog = builtin_catalog();
        assert_eq!(ids(&search(&catalog, "  LOCK ")), vec!["deadlock", "locking"]);
    }

    #[test]
    fn empty_query_clears() {
        let catalog = builtin_catalog();
        assert!(search(&catalog, "").is_cleared());
        assert!(search(&catalog, "   ").is_cleared());
    }

    #[test]
    fn unmatched_query_reports_no_results() {
        let catalog = builtin_catalog();
        assert_eq!(search(&catalog, "zzz-no-match"), SearchOutcome::NoResults);
    }

    #[test]
    fn module_name_matches_every_topic_in_module() {
        let catalog = builtin_catalog();
        let outcome = search(&catalog, "data warehousing");
        assert_eq!(ids(&outcome), vec!["etl-vs-elt", "star-schema", "olap-vs-oltp"]);
    }
}
