//! Routing identifier resolution
//!
//! Maps the id carried by a detail-view route to a catalog record.

use std::sync::Arc;

use crate::catalog::{CatalogStore, ContentItem};

/// Resolves routing identifiers against the catalog.
///
/// Resolution is a plain delegation to the store's id lookup; the
/// resolver adds no matching logic of its own. Every miss - empty id,
/// malformed id, or a well-formed id nothing was configured under -
/// yields the same `None`, which the routing collaborator maps to its
/// not-found view. One signal, one fallback behavior.
#[derive(Debug, Clone)]
pub struct ContentResolver {
    catalog: Arc<CatalogStore>,
}

impl ContentResolver {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }

    /// Resolves an identifier to its content record.
    pub fn resolve(&self, id: &str) -> Option<&ContentItem> {
        let resolved = self.catalog.find_by_id(id);
        if resolved.is_none() {
            tracing::debug!(id, "content id did not resolve");
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;

    #[test]
    fn test_resolve_known_id() {
        let resolver = ContentResolver::new(Arc::new(CatalogStore::demo()));

        let item = resolver.resolve("movie1").unwrap();
        assert_eq!(item.title, "Assamese Blockbuster");
    }

    #[test]
    fn test_resolve_misses_are_uniform() {
        let resolver = ContentResolver::new(Arc::new(CatalogStore::demo()));

        // Unknown, empty and malformed ids all produce the same signal
        assert!(resolver.resolve("doesnotexist").is_none());
        assert!(resolver.resolve("").is_none());
        assert!(resolver.resolve("../../etc/passwd").is_none());
        assert!(resolver.resolve("movie1\0").is_none());
    }
}
