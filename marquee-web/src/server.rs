//! Axum server wiring for the Marquee web surface
//!
//! Builds the shared application state from configuration, assembles
//! the router, and runs the HTTP server.

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use marquee_core::catalog::CatalogStore;
use marquee_core::config::{MarqueeConfig, PlaybackConfig};
use marquee_core::playback::PlaybackController;
use marquee_core::resolver::ContentResolver;
use marquee_search::CatalogSearch;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use uuid::Uuid;

use crate::handlers::{
    api_catalog, api_catalog_item, api_search, create_session, destroy_session, home_page,
    search_page, session_event, session_pause, session_play, session_retry, session_state,
    watch_page,
};

/// Shared application state.
///
/// The catalog is immutable after construction, so it is shared as a
/// plain `Arc` with no locking. Playback sessions are the only mutable
/// state and live behind a single registry lock.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub search: Arc<CatalogSearch>,
    pub resolver: ContentResolver,
    pub sessions: Arc<RwLock<HashMap<Uuid, PlaybackController>>>,
    pub playback: PlaybackConfig,
}

/// Builds application state from configuration.
///
/// Loads the configured catalog file, or the built-in demo catalog
/// when none is configured. A catalog that fails validation (duplicate
/// id, undecodable file) aborts startup here; the process must not
/// start with an inconsistent catalog.
///
/// # Errors
/// - `MarqueeError::Catalog` - Catalog file unreadable, undecodable, or inconsistent
pub fn build_state(config: &MarqueeConfig) -> marquee_core::Result<AppState> {
    let catalog = match &config.catalog.source_path {
        Some(path) => CatalogStore::from_json_file(path)?,
        None => CatalogStore::demo(),
    };
    let catalog = Arc::new(catalog);

    Ok(AppState {
        search: Arc::new(CatalogSearch::new(catalog.clone())),
        resolver: ContentResolver::new(catalog.clone()),
        catalog,
        sessions: Arc::new(RwLock::new(HashMap::new())),
        playback: config.playback.clone(),
    })
}

/// Assembles the router over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Browsing pages
        .route("/", get(home_page))
        .route("/search", get(search_page))
        .route("/watch/{id}", get(watch_page))
        // JSON API endpoints
        .route("/api/catalog", get(api_catalog))
        .route("/api/catalog/{id}", get(api_catalog_item))
        .route("/api/search", get(api_search))
        // Playback session endpoints
        .route("/api/player", post(create_session))
        .route(
            "/api/player/{session}",
            get(session_state).delete(destroy_session),
        )
        .route("/api/player/{session}/events", post(session_event))
        .route("/api/player/{session}/play", post(session_play))
        .route("/api/player/{session}/pause", post(session_pause))
        .route("/api/player/{session}/retry", post(session_retry))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Runs the web server until shutdown.
///
/// # Errors
/// Returns an error when the catalog fails to load or the listener
/// cannot bind.
pub async fn run_server(config: MarqueeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state(&config)?;
    tracing::info!(items = state.catalog.len(), "catalog ready");

    let app = build_router(state)
        .nest_service("/static", ServeDir::new(config.server.static_dir.clone()));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    println!(
        "Marquee catalog server running on http://{}",
        listener.local_addr()?
    );
    axum::serve(listener, app).await?;
    Ok(())
}
