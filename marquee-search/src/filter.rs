//! Title matching strategies
//!
//! The matcher is a seam: the default substring scan is fine for a
//! small static catalog, and a precomputed index (trigram sets, for
//! example) can slot in behind the same trait without changing match
//! semantics or result ordering.

/// Normalizes a query or title for matching: trimmed and lower-cased.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Strategy for deciding whether a normalized title matches a
/// normalized query.
///
/// Both arguments are pre-normalized by the caller; implementations
/// must be pure so that repeated searches stay idempotent.
pub trait TitleFilter: Send + Sync + std::fmt::Debug {
    /// Whether `title` matches `query`. An empty query matches
    /// everything.
    fn matches(&self, title: &str, query: &str) -> bool;
}

/// Default matcher: case-insensitive substring containment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringFilter;

impl TitleFilter for SubstringFilter {
    fn matches(&self, title: &str, query: &str) -> bool {
        query.is_empty() || title.contains(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  ASSAMESE Blockbuster "), "assamese blockbuster");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_substring_filter_matches() {
        let filter = SubstringFilter;
        assert!(filter.matches("assamese blockbuster", "assamese"));
        assert!(filter.matches("assamese blockbuster", "block"));
        assert!(!filter.matches("assamese blockbuster", "heist"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let filter = SubstringFilter;
        assert!(filter.matches("anything", ""));
        assert!(filter.matches("", ""));
    }
}
