//! Marquee Web - catalog pages and JSON API
//!
//! Server-rendered browsing pages plus a JSON API for catalog lookup,
//! search, and playback session control.

pub mod components;
pub mod handlers;
pub mod server;

// Re-export main types
pub use server::{AppState, build_router, build_state, run_server};
