//! Catalog search service
//!
//! Pure query-time filtering over the catalog. No index is maintained
//! and nothing is cached: each call walks the immutable catalog in
//! configuration order, so identical queries always return identical
//! ordered results.

use std::sync::Arc;

use marquee_core::catalog::{CatalogStore, Category, ContentItem};

use crate::filter::{SubstringFilter, TitleFilter, normalize};

/// Search service over the catalog.
#[derive(Debug)]
pub struct CatalogSearch {
    catalog: Arc<CatalogStore>,
    filter: Box<dyn TitleFilter>,
}

impl CatalogSearch {
    /// Creates a search service with the default substring matcher.
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self::with_filter(catalog, Box::new(SubstringFilter))
    }

    /// Creates a search service with a custom matcher.
    pub fn with_filter(catalog: Arc<CatalogStore>, filter: Box<dyn TitleFilter>) -> Self {
        Self { catalog, filter }
    }

    /// Searches the whole catalog by title.
    ///
    /// Returns a lazy iterator over matching items in catalog order.
    /// This is a stable filter, not a ranked search: an empty or
    /// all-whitespace query matches every item, matching is
    /// case-insensitive, and order always follows the catalog.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a ContentItem> + 'a {
        let needle = normalize(query);
        tracing::debug!(query = %needle, "catalog search");
        self.catalog
            .all()
            .iter()
            .filter(move |item| self.filter.matches(&normalize(&item.title), &needle))
    }

    /// Searches within a single category.
    pub fn search_category<'a>(
        &'a self,
        query: &str,
        category: Category,
    ) -> impl Iterator<Item = &'a ContentItem> + 'a {
        self.search(query)
            .filter(move |item| item.category == category)
    }

    /// Searches movies only.
    pub fn search_movies<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a ContentItem> + 'a {
        self.search_category(query, Category::Movie)
    }

    /// Searches series only.
    pub fn search_series<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a ContentItem> + 'a {
        self.search_category(query, Category::Series)
    }

    /// Searches documentaries only.
    pub fn search_documentaries<'a>(
        &'a self,
        query: &str,
    ) -> impl Iterator<Item = &'a ContentItem> + 'a {
        self.search_category(query, Category::Documentary)
    }
}

#[cfg(test)]
mod tests {
    use marquee_core::catalog::CatalogStore;

    use super::*;

    fn demo_search() -> CatalogSearch {
        CatalogSearch::new(Arc::new(CatalogStore::demo()))
    }

    fn ids<'a>(items: impl Iterator<Item = &'a ContentItem>) -> Vec<&'a str> {
        items.map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_full_catalog_in_order() {
        let search = demo_search();

        let all: Vec<&str> = search.catalog.all().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids(search.search("")), all);
        assert_eq!(ids(search.search("   ")), all);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let search = demo_search();

        let results = ids(search.search("ASSAMESE"));
        assert!(results.contains(&"movie1"));

        assert_eq!(ids(search.search("assamese")), ids(search.search("ASSAMESE")));
    }

    #[test]
    fn test_search_trims_query_whitespace() {
        let search = demo_search();

        assert_eq!(ids(search.search("  heist  ")), vec!["movie2"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let search = demo_search();

        assert_eq!(search.search("zzz-no-such-title").count(), 0);
    }

    #[test]
    fn test_search_preserves_catalog_order() {
        let search = demo_search();

        // "e" appears in many titles; order must follow the catalog
        let results = ids(search.search("e"));
        let catalog_order: Vec<&str> = search
            .catalog
            .all()
            .iter()
            .filter(|i| normalize(&i.title).contains('e'))
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(results, catalog_order);
    }

    #[test]
    fn test_repeated_search_is_idempotent() {
        let search = demo_search();

        let first = ids(search.search("tea"));
        let second = ids(search.search("tea"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_search_category_intersects() {
        let search = demo_search();

        let movies = ids(search.search_movies(""));
        assert!(movies.iter().all(|id| id.starts_with("movie")));

        assert_eq!(ids(search.search_series("tea")), vec!["series1"]);
        assert_eq!(search.search_documentaries("heist").count(), 0);
    }
}
