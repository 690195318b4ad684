//! JSON API handlers for catalog lookup and search

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use marquee_core::catalog::{Category, ContentItem};
use serde::Deserialize;
use serde_json::json;

use crate::server::AppState;

/// Query parameters for `/api/search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Search query; absent or empty matches the full catalog
    #[serde(default)]
    pub q: String,
    /// Optional category restriction (movie, series, documentary)
    pub category: Option<String>,
}

/// Uniform not-found response for the JSON API.
pub(crate) fn not_found_json() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "not found" })),
    )
        .into_response()
}

/// Returns the full catalog in configuration order.
pub async fn api_catalog(State(state): State<AppState>) -> Json<Vec<ContentItem>> {
    Json(state.catalog.all().to_vec())
}

/// Returns one content record, or 404 for any identifier that does
/// not resolve.
pub async fn api_catalog_item(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.resolver.resolve(&id) {
        Some(item) => Json(item.clone()).into_response(),
        None => not_found_json(),
    }
}

/// Searches the catalog by title, optionally within one category.
pub async fn api_search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Response {
    let category = match params.category.as_deref() {
        None => None,
        Some(raw) => match raw.parse::<Category>() {
            Ok(category) => Some(category),
            Err(reason) => {
                return (StatusCode::BAD_REQUEST, Json(json!({ "error": reason })))
                    .into_response();
            }
        },
    };

    let results: Vec<ContentItem> = match category {
        Some(category) => state
            .search
            .search_category(&params.q, category)
            .cloned()
            .collect(),
        None => state.search.search(&params.q).cloned().collect(),
    };

    Json(results).into_response()
}
