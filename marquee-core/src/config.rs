//! Centralized configuration for Marquee.
//!
//! All tunable parameters and settings are defined here to avoid
//! hard-coded values scattered throughout the codebase.

use std::path::PathBuf;

/// Central configuration for all Marquee components.
///
/// Groups related configuration settings into logical sections.
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct MarqueeConfig {
    pub catalog: CatalogConfig,
    pub playback: PlaybackConfig,
    pub server: ServerConfig,
}

/// Catalog source configuration.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// Optional JSON catalog file; the built-in demo catalog is used
    /// when absent
    pub source_path: Option<PathBuf>,
}

/// Playback session configuration.
#[derive(Debug, Clone)]
pub struct PlaybackConfig {
    /// Initial volume for new sessions (0.0 to 1.0)
    pub default_volume: f32,
    /// Maximum concurrently mounted playback sessions
    pub max_sessions: usize,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            default_volume: 1.0,
            max_sessions: 64,
        }
    }
}

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind the web server to
    pub host: String,
    /// Port to bind the web server to
    pub port: u16,
    /// Directory served under /static
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            static_dir: PathBuf::from("marquee-web/static"),
        }
    }
}

impl MarqueeConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Allows runtime configuration via environment variables while
    /// maintaining sensible defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("MARQUEE_CATALOG") {
            if !path.is_empty() {
                config.catalog.source_path = Some(PathBuf::from(path));
            }
        }

        if let Ok(host) = std::env::var("MARQUEE_HOST") {
            if !host.is_empty() {
                config.server.host = host;
            }
        }

        if let Ok(port) = std::env::var("MARQUEE_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                config.server.port = port;
            }
        }

        if let Ok(max_sessions) = std::env::var("MARQUEE_MAX_SESSIONS") {
            if let Ok(count) = max_sessions.parse::<usize>() {
                config.playback.max_sessions = count;
            }
        }

        config
    }

    /// Creates a configuration optimized for testing: demo catalog,
    /// ephemeral port.
    pub fn for_testing() -> Self {
        let mut config = Self::default();
        config.server.port = 0;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = MarqueeConfig::default();

        assert!(config.catalog.source_path.is_none());
        assert_eq!(config.playback.default_volume, 1.0);
        assert_eq!(config.playback.max_sessions, 64);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_testing_preset_uses_ephemeral_port() {
        let config = MarqueeConfig::for_testing();
        assert_eq!(config.server.port, 0);
    }

    #[test]
    fn test_env_override() {
        unsafe {
            std::env::set_var("MARQUEE_CATALOG", "/tmp/catalog.json");
            std::env::set_var("MARQUEE_HOST", "0.0.0.0");
            std::env::set_var("MARQUEE_PORT", "8080");
            std::env::set_var("MARQUEE_MAX_SESSIONS", "8");
        }

        let config = MarqueeConfig::from_env();

        assert_eq!(
            config.catalog.source_path,
            Some(PathBuf::from("/tmp/catalog.json"))
        );
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.playback.max_sessions, 8);

        // Cleanup
        unsafe {
            std::env::remove_var("MARQUEE_CATALOG");
            std::env::remove_var("MARQUEE_HOST");
            std::env::remove_var("MARQUEE_PORT");
            std::env::remove_var("MARQUEE_MAX_SESSIONS");
        }
    }
}
