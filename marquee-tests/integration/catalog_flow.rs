//! Catalog loading, resolution and search working together

use std::sync::Arc;

use marquee_core::MarqueeError;
use marquee_core::catalog::{CatalogStore, Category};
use marquee_core::config::MarqueeConfig;
use marquee_core::resolver::ContentResolver;
use marquee_search::CatalogSearch;
use marquee_web::build_state;

const CATALOG_JSON: &str = r#"[
    {
        "id": "movie1",
        "title": "Assamese Blockbuster",
        "category": "movie",
        "thumbnailUrl": "/thumbs/movie1.jpg",
        "mediaUrl": "/media/movie1.mp4"
    },
    {
        "id": "series1",
        "title": "Tea Garden Tales",
        "category": "series",
        "thumbnailUrl": "/thumbs/series1.jpg",
        "mediaUrl": "/media/series1.mp4"
    }
]"#;

#[test]
fn test_file_catalog_feeds_resolver_and_search() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, CATALOG_JSON).unwrap();

    let catalog = Arc::new(CatalogStore::from_json_file(&path).unwrap());
    let resolver = ContentResolver::new(catalog.clone());
    let search = CatalogSearch::new(catalog.clone());

    // Every search hit resolves back to the same record
    for hit in search.search("a") {
        let resolved = resolver.resolve(&hit.id).unwrap();
        assert_eq!(resolved, hit);
    }

    assert_eq!(
        resolver.resolve("movie1").unwrap().title,
        "Assamese Blockbuster"
    );
    assert_eq!(catalog.by_category(Category::Series).count(), 1);
    assert!(resolver.resolve("doesnotexist").is_none());
}

#[test]
fn test_duplicate_id_in_catalog_file_aborts_startup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"[
            {
                "id": "movie1",
                "title": "First",
                "category": "movie",
                "thumbnailUrl": "/a.jpg",
                "mediaUrl": "/a.mp4"
            },
            {
                "id": "movie1",
                "title": "Second",
                "category": "series",
                "thumbnailUrl": "/b.jpg",
                "mediaUrl": "/b.mp4"
            }
        ]"#,
    )
    .unwrap();

    let mut config = MarqueeConfig::for_testing();
    config.catalog.source_path = Some(path);

    let result = build_state(&config);
    assert!(matches!(result, Err(MarqueeError::Catalog(_))));
}

#[test]
fn test_demo_state_builds_when_no_file_configured() {
    let state = build_state(&MarqueeConfig::for_testing()).unwrap();

    assert!(!state.catalog.is_empty());
    assert!(state.resolver.resolve("movie1").is_some());
    assert!(state.search.search("").count() == state.catalog.len());
}
