//! Marquee Core - Catalog and playback fundamentals
//!
//! This crate provides the building blocks behind the Marquee browsing
//! front end: the immutable content catalog, identifier resolution for
//! routing, the playback lifecycle state machine, and configuration
//! management.

pub mod catalog;
pub mod config;
pub mod playback;
pub mod resolver;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use catalog::{CatalogError, CatalogStore, Category, ContentItem};
pub use config::MarqueeConfig;
pub use playback::{MediaLoadError, PlaybackController, PlaybackState, PlayerEvent};
pub use resolver::ContentResolver;

/// Core errors that can bubble up from any Marquee subsystem.
#[derive(Debug, thiserror::Error)]
pub enum MarqueeError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Web UI error: {reason}")]
    WebUI { reason: String },
}

impl MarqueeError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            MarqueeError::Catalog(e) => match e {
                CatalogError::DuplicateId { id } => {
                    format!("Catalog configuration reuses id '{id}'")
                }
                CatalogError::Read { path, .. } => {
                    format!("Could not read catalog file: {}", path.display())
                }
                CatalogError::Decode { .. } => "Catalog file is not valid".to_string(),
            },
            MarqueeError::Configuration { .. } => "Configuration error occurred".to_string(),
            MarqueeError::Io(_) => "File system error occurred".to_string(),
            MarqueeError::WebUI { reason } => format!("Web interface error: {reason}"),
        }
    }

    /// Checks if this error is due to user-supplied configuration.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            MarqueeError::Configuration { .. } | MarqueeError::Catalog(_)
        )
    }

    pub fn from_web_ui_error(error: impl std::fmt::Display) -> Self {
        MarqueeError::WebUI {
            reason: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MarqueeError>;
