//! Catalog and search over the HTTP surface

use axum::http::StatusCode;

use crate::support::{demo_router, json, request};

#[tokio::test]
async fn test_api_catalog_returns_full_catalog_in_order() {
    let router = demo_router();

    let (status, body) = request(router, "GET", "/api/catalog", None).await;
    assert_eq!(status, StatusCode::OK);

    let items = json(&body);
    let items = items.as_array().unwrap();
    assert_eq!(items[0]["id"], "movie1");
    assert_eq!(items[0]["title"], "Assamese Blockbuster");
    // Wire shape is camelCase
    assert!(items[0]["thumbnailUrl"].is_string());
    assert!(items[0]["mediaUrl"].is_string());
}

#[tokio::test]
async fn test_api_catalog_item_resolves_or_404s() {
    let router = demo_router();

    let (status, body) = request(router.clone(), "GET", "/api/catalog/movie1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["category"], "movie");

    let (status, body) = request(router, "GET", "/api/catalog/doesnotexist", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json(&body)["error"], "not found");
}

#[tokio::test]
async fn test_api_search_is_case_insensitive_and_ordered() {
    let router = demo_router();

    let (status, body) = request(router.clone(), "GET", "/api/search?q=ASSAMESE", None).await;
    assert_eq!(status, StatusCode::OK);
    let hits = json(&body);
    assert_eq!(hits.as_array().unwrap().len(), 1);
    assert_eq!(hits[0]["id"], "movie1");

    // Empty query returns the whole catalog
    let (_, all_body) = request(router.clone(), "GET", "/api/search?q=", None).await;
    let (_, catalog_body) = request(router, "GET", "/api/catalog", None).await;
    assert_eq!(json(&all_body), json(&catalog_body));
}

#[tokio::test]
async fn test_api_search_category_filter() {
    let router = demo_router();

    let (status, body) = request(router.clone(), "GET", "/api/search?q=&category=series", None).await;
    assert_eq!(status, StatusCode::OK);
    for hit in json(&body).as_array().unwrap() {
        assert_eq!(hit["category"], "series");
    }

    let (status, _) = request(router, "GET", "/api/search?q=&category=podcast", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_api_search_no_match_is_empty_list() {
    let router = demo_router();

    let (status, body) = request(router, "GET", "/api/search?q=zzz-no-such-title", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body).as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_landing_page_renders_category_rows() {
    let router = demo_router();

    let (status, body) = request(router, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Movies"));
    assert!(body.contains("Assamese Blockbuster"));
    // Image fallback is wired into every card
    assert!(body.contains("/static/placeholder.svg"));
}

#[tokio::test]
async fn test_watch_page_resolves_or_renders_not_found() {
    let router = demo_router();

    let (status, body) = request(router.clone(), "GET", "/watch/movie1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<video"));
    assert!(body.contains("Assamese Blockbuster"));

    let (status, body) = request(router, "GET", "/watch/doesnotexist", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("That title isn't in the catalog"));
}

#[tokio::test]
async fn test_search_page_renders_results_and_empty_state() {
    let router = demo_router();

    let (status, body) = request(router.clone(), "GET", "/search?q=tea", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Tea Garden Tales"));

    let (status, body) = request(router, "GET", "/search?q=zzz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No titles match"));
}
