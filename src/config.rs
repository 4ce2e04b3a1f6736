//! Configuration Module
//!
//! Handles loading and managing relay configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default lifetime of a cached image (15 minutes).
pub const DEFAULT_CACHE_TTL_SECS: u64 = 900;

/// Default image source serving `/images/<code>.jpg`.
pub const DEFAULT_IMAGE_SOURCE_URL: &str = "https://http.cat";

/// Relay configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Lifetime of every cached image, in seconds
    pub cache_ttl: u64,
    /// Base URL of the status image source
    pub image_source_url: String,
    /// Timeout for outbound requests in seconds, None = client default
    pub request_timeout: Option<u64>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `CACHE_TTL_SECS` - Image lifetime in seconds (default: 900)
    /// - `IMAGE_SOURCE_URL` - Image source base URL (default: https://http.cat)
    /// - `REQUEST_TIMEOUT_SECS` - Outbound request timeout (default: none)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            cache_ttl: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_TTL_SECS),
            image_source_url: env::var("IMAGE_SOURCE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_IMAGE_SOURCE_URL.to_string()),
            request_timeout: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    /// Cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 5000,
            cache_ttl: DEFAULT_CACHE_TTL_SECS,
            image_source_url: DEFAULT_IMAGE_SOURCE_URL.to_string(),
            request_timeout: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.cache_ttl, 900);
        assert_eq!(config.cache_ttl(), Duration::from_secs(15 * 60));
        assert_eq!(config.image_source_url, "https://http.cat");
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("CACHE_TTL_SECS");
        env::remove_var("IMAGE_SOURCE_URL");
        env::remove_var("REQUEST_TIMEOUT_SECS");

        let config = Config::from_env();
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.cache_ttl, 900);
        assert_eq!(config.image_source_url, DEFAULT_IMAGE_SOURCE_URL);
        assert!(config.request_timeout.is_none());
    }
}
