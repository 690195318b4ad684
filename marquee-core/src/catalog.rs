//! Immutable in-memory content catalog
//!
//! The catalog is built once at startup from static configuration and
//! never mutated afterwards, so every reader can share it without
//! locking. Identifier lookup is O(1) through a side index.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Content category, fixed at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Movie,
    Series,
    Documentary,
}

impl Category {
    /// All categories in the order they appear on the landing page.
    pub const ALL: [Category; 3] = [Category::Movie, Category::Series, Category::Documentary];

    /// Human-readable section label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Movie => "Movies",
            Category::Series => "Series",
            Category::Documentary => "Documentaries",
        }
    }

    /// Wire name as it appears in catalog JSON and the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Movie => "movie",
            Category::Series => "series",
            Category::Documentary => "documentary",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "movie" => Ok(Category::Movie),
            "series" => Ok(Category::Series),
            "documentary" => Ok(Category::Documentary),
            _ => Err(format!("Unknown category: {s}")),
        }
    }
}

/// One playable catalog entry.
///
/// This is also the wire shape shared with the rendering layer and the
/// JSON API: `id`, `title`, `category`, `thumbnailUrl`, `mediaUrl`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Opaque identifier, unique across the whole catalog
    pub id: String,
    /// Display title
    pub title: String,
    /// Category the item belongs to, fixed for its lifetime
    pub category: Category,
    /// Thumbnail image reference; may fail to load and is substituted
    /// with a placeholder at render time
    pub thumbnail_url: String,
    /// Playable media reference handed to the playback controller
    pub media_url: String,
}

/// Catalog construction and loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate content id in catalog configuration: {id}")]
    DuplicateId { id: String },

    #[error("Failed to read catalog file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode catalog file: {reason}")]
    Decode { reason: String },
}

/// Immutable store over the configured content items.
///
/// Items keep their configuration order; `by_category` and search
/// iterate in that order. The store is read-only after `new` succeeds,
/// so it needs no interior locking even with many concurrent readers.
#[derive(Debug)]
pub struct CatalogStore {
    items: Vec<ContentItem>,
    index: HashMap<String, usize>,
}

impl CatalogStore {
    /// Builds the catalog from configured items.
    ///
    /// The only point at which the id-uniqueness invariant can be
    /// violated is here, so it is enforced here: a duplicate id fails
    /// construction instead of silently overwriting an entry.
    ///
    /// # Errors
    /// - `CatalogError::DuplicateId` - Two configured items share an id
    pub fn new(items: Vec<ContentItem>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if index.insert(item.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: item.id.clone(),
                });
            }
        }

        tracing::debug!(items = items.len(), "catalog constructed");
        Ok(Self { items, index })
    }

    /// Loads and validates a catalog from a JSON file.
    ///
    /// The file is a JSON array of content records in the wire shape.
    /// Validation happens once, at this boundary: unknown categories
    /// and missing fields fail the decode, duplicate ids fail
    /// construction.
    ///
    /// # Errors
    /// - `CatalogError::Read` - File could not be read
    /// - `CatalogError::Decode` - File is not a valid content record list
    /// - `CatalogError::DuplicateId` - Two records share an id
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let items: Vec<ContentItem> =
            serde_json::from_str(&raw).map_err(|e| CatalogError::Decode {
                reason: e.to_string(),
            })?;

        tracing::info!(path = %path.display(), items = items.len(), "catalog file loaded");
        Self::new(items)
    }

    /// Full catalog in configuration order.
    pub fn all(&self) -> &[ContentItem] {
        &self.items
    }

    /// Items of one category, in configuration order.
    ///
    /// A category with no items yields an empty iterator, never an
    /// error.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &ContentItem> {
        self.items
            .iter()
            .filter(move |item| item.category == category)
    }

    /// Looks up an item by id.
    ///
    /// Unknown ids return `None`; lookup never fails.
    pub fn find_by_id(&self, id: &str) -> Option<&ContentItem> {
        self.index.get(id).map(|&position| &self.items[position])
    }

    /// Number of configured items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Built-in demo catalog for development and the default server
    /// setup, mirroring the static mock data the front end ships with.
    pub fn demo() -> Self {
        let items = vec![
            demo_item("movie1", "Assamese Blockbuster", Category::Movie),
            demo_item("movie2", "Monsoon Heist", Category::Movie),
            demo_item("movie3", "The Last Ferry", Category::Movie),
            demo_item("movie4", "Midnight Bazaar", Category::Movie),
            demo_item("series1", "Tea Garden Tales", Category::Series),
            demo_item("series2", "River Island Detectives", Category::Series),
            demo_item("series3", "Campus 1985", Category::Series),
            demo_item("doc1", "Rhinos of Kaziranga", Category::Documentary),
            demo_item("doc2", "Weaving the Mekhela", Category::Documentary),
        ];

        // Demo data is hand-checked for unique ids
        Self::new(items).expect("demo catalog has unique ids")
    }
}

fn demo_item(id: &str, title: &str, category: Category) -> ContentItem {
    ContentItem {
        id: id.to_string(),
        title: title.to_string(),
        category,
        thumbnail_url: format!("/static/thumbs/{id}.jpg"),
        media_url: format!("/static/media/{id}.mp4"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, title: &str, category: Category) -> ContentItem {
        ContentItem {
            id: id.to_string(),
            title: title.to_string(),
            category,
            thumbnail_url: format!("/thumbs/{id}.jpg"),
            media_url: format!("/media/{id}.mp4"),
        }
    }

    #[test]
    fn test_find_by_id_returns_each_configured_item() {
        let catalog = CatalogStore::demo();

        for configured in catalog.all().to_vec() {
            let found = catalog.find_by_id(&configured.id);
            assert_eq!(found, Some(&configured));
        }
    }

    #[test]
    fn test_find_by_id_unknown_is_absent() {
        let catalog = CatalogStore::demo();

        assert!(catalog.find_by_id("doesnotexist").is_none());
        assert!(catalog.find_by_id("").is_none());
        assert!(catalog.find_by_id("movie1 ").is_none());
    }

    #[test]
    fn test_all_preserves_insertion_order() {
        let catalog = CatalogStore::new(vec![
            item("b", "Second", Category::Series),
            item("a", "First", Category::Movie),
            item("c", "Third", Category::Movie),
        ])
        .unwrap();

        let ids: Vec<&str> = catalog.all().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_by_category_filters_in_order() {
        let catalog = CatalogStore::new(vec![
            item("m1", "One", Category::Movie),
            item("s1", "Two", Category::Series),
            item("m2", "Three", Category::Movie),
        ])
        .unwrap();

        let movies: Vec<&str> = catalog
            .by_category(Category::Movie)
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(movies, vec!["m1", "m2"]);

        // Unpopulated category is empty, not an error
        assert_eq!(catalog.by_category(Category::Documentary).count(), 0);
    }

    #[test]
    fn test_duplicate_id_fails_construction() {
        let result = CatalogStore::new(vec![
            item("movie1", "First", Category::Movie),
            item("movie1", "Second", Category::Series),
        ]);

        match result {
            Err(CatalogError::DuplicateId { id }) => assert_eq!(id, "movie1"),
            other => panic!("expected DuplicateId, got {other:?}"),
        }
    }

    #[test]
    fn test_demo_catalog_ids_are_unique() {
        let catalog = CatalogStore::demo();
        for left in catalog.all() {
            for right in catalog.all() {
                if !std::ptr::eq(left, right) {
                    assert_ne!(left.id, right.id);
                }
            }
        }
    }

    #[test]
    fn test_from_json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[
                {
                    "id": "movie1",
                    "title": "Assamese Blockbuster",
                    "category": "movie",
                    "thumbnailUrl": "/thumbs/movie1.jpg",
                    "mediaUrl": "/media/movie1.mp4"
                }
            ]"#,
        )
        .unwrap();

        let catalog = CatalogStore::from_json_file(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        let item = catalog.find_by_id("movie1").unwrap();
        assert_eq!(item.title, "Assamese Blockbuster");
        assert_eq!(item.category, Category::Movie);
        assert_eq!(item.thumbnail_url, "/thumbs/movie1.jpg");
    }

    #[test]
    fn test_from_json_file_rejects_unknown_category() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[
                {
                    "id": "x1",
                    "title": "Mystery",
                    "category": "podcast",
                    "thumbnailUrl": "/t.jpg",
                    "mediaUrl": "/m.mp4"
                }
            ]"#,
        )
        .unwrap();

        assert!(matches!(
            CatalogStore::from_json_file(&path),
            Err(CatalogError::Decode { .. })
        ));
    }

    #[test]
    fn test_from_json_file_missing_file() {
        assert!(matches!(
            CatalogStore::from_json_file(Path::new("/nonexistent/catalog.json")),
            Err(CatalogError::Read { .. })
        ));
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("movie".parse::<Category>().unwrap(), Category::Movie);
        assert_eq!("SERIES".parse::<Category>().unwrap(), Category::Series);
        assert!("podcast".parse::<Category>().is_err());
    }
}
