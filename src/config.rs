//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Redis connection URL; when unset the in-memory store backend is used
    pub redis_url: Option<String>,
    /// TTL in seconds for the cached property listing
    pub cache_ttl: u64,
    /// Purge interval in seconds for the in-memory backend
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `REDIS_URL` - Redis URL, e.g. `redis://127.0.0.1:6379` (default: unset)
    /// - `CACHE_TTL` - Listing cache TTL in seconds (default: 3600)
    /// - `CLEANUP_INTERVAL` - In-memory purge frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            redis_url: env::var("REDIS_URL").ok().filter(|v| !v.is_empty()),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8000,
            redis_url: None,
            cache_ttl: 3600,
            cleanup_interval: 60,
        }
    }
}
