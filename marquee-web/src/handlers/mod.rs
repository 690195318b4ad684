//! HTTP request handlers organized by functionality

pub mod api;
pub mod pages;
pub mod player;

// Re-export handler functions
pub use api::{SearchQuery, api_catalog, api_catalog_item, api_search};
pub use pages::{home_page, search_page, watch_page};
pub use player::{
    CreateSessionRequest, LifecycleEventRequest, RetryRequest, create_session, destroy_session,
    session_event, session_pause, session_play, session_retry, session_state,
};
