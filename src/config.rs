//! Configuration Module
//!
//! Loads service configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Service configuration parameters.
///
/// Every value can be overridden through the environment; unset or
/// unparsable variables fall back to the defaults below.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// SQLite database URL for the property store
    pub database_url: String,
    /// Maximum number of entries the in-process cache holds
    pub cache_max_entries: usize,
    /// TTL in seconds for the `all_properties` entry
    pub list_cache_ttl: u64,
    /// TTL in seconds for `property_<id>` entries
    pub detail_cache_ttl: u64,
    /// Background expiry sweep interval in seconds
    pub cleanup_interval: u64,
    /// Replace the store contents with sample listings at startup
    pub seed_sample_data: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `DATABASE_URL` - SQLite database URL (default: sqlite://properties.db)
    /// - `CACHE_MAX_ENTRIES` - Cache capacity (default: 10000)
    /// - `LIST_CACHE_TTL` - TTL of the listing entry in seconds (default: 3600)
    /// - `DETAIL_CACHE_TTL` - TTL of per-property entries in seconds (default: 1800)
    /// - `CLEANUP_INTERVAL` - Expiry sweep frequency in seconds (default: 1)
    /// - `SEED_SAMPLE_DATA` - `true`/`1` to seed sample listings (default: false)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            database_url: env::var("DATABASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.database_url),
            cache_max_entries: env_or("CACHE_MAX_ENTRIES", defaults.cache_max_entries),
            list_cache_ttl: env_or("LIST_CACHE_TTL", defaults.list_cache_ttl),
            detail_cache_ttl: env_or("DETAIL_CACHE_TTL", defaults.detail_cache_ttl),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
            seed_sample_data: env::var("SEED_SAMPLE_DATA")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.seed_sample_data),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8000,
            database_url: "sqlite://properties.db".to_string(),
            cache_max_entries: 10_000,
            list_cache_ttl: 3600,
            detail_cache_ttl: 1800,
            cleanup_interval: 1,
            seed_sample_data: false,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
