//! Integration tests for Marquee
//!
//! These tests verify the integration between different components of
//! the system: catalog loading, resolution and search working together,
//! and the full HTTP surface including playback session control.

#[path = "integration/support.rs"]
mod support;

#[path = "integration/catalog_flow.rs"]
mod catalog_flow;

#[path = "integration/web_api.rs"]
mod web_api;

#[path = "integration/playback_sessions.rs"]
mod playback_sessions;
