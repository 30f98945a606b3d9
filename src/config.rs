//! Configuration Module
//!
//! Handles loading and managing Pokedex configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_INTERVAL;

/// Largest accepted cache interval in seconds (one week)
pub const MAX_CACHE_INTERVAL_SECS: u64 = 7 * 24 * 60 * 60;

/// Pokedex configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache sweep period and staleness threshold in seconds
    pub cache_interval: u64,
    /// PokeAPI root, without a trailing slash
    pub base_url: String,
    /// Location areas listed per `map` call
    pub page_size: u32,
    /// HTTP request timeout in seconds
    pub http_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_INTERVAL_SECS` - Cache interval in seconds, 1 to one week (default: 5)
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    /// - `PAGE_SIZE` - Location areas per page (default: 20)
    /// - `HTTP_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_interval: parse_cache_interval(env::var("CACHE_INTERVAL_SECS").ok().as_deref())
                .unwrap_or(defaults.cache_interval),
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),
            page_size: env::var("PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&v| v > 0)
                .unwrap_or(defaults.page_size),
            http_timeout: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.http_timeout),
        }
    }

    pub fn cache_interval(&self) -> Duration {
        Duration::from_secs(self.cache_interval)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

/// Parses a cache interval, rejecting zero (a busy sweep loop) and values
/// above [`MAX_CACHE_INTERVAL_SECS`].
fn parse_cache_interval(value: Option<&str>) -> Option<u64> {
    value
        .and_then(|v| v.trim().parse().ok())
        .filter(|v| (1..=MAX_CACHE_INTERVAL_SECS).contains(v))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval: DEFAULT_INTERVAL.as_secs(),
            base_url: "https://pokeapi.co/api/v2".to_string(),
            page_size: 20,
            http_timeout: 10,
        }
    }
}
