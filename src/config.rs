//! Configuration Module
//!
//! Construction-time options for the cache.

use std::env;

use chrono::Duration;

/// Cache configuration parameters.
///
/// Values can also be loaded from environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold (0 = unbounded)
    pub max_items: usize,
    /// How long an entry stays readable after insertion
    pub lifetime: Duration,
}

impl CacheConfig {
    /// Creates a config with the given capacity and lifetime.
    pub fn new(max_items: usize, lifetime: Duration) -> Self {
        Self {
            max_items,
            lifetime,
        }
    }

    /// Creates a new CacheConfig by loading values from environment
    /// variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_ITEMS` - Maximum cache entries (default: 0, unbounded)
    /// - `CACHE_LIFETIME_SECS` - Entry lifetime in seconds (default: 600)
    pub fn from_env() -> Self {
        Self {
            max_items: env::var("CACHE_MAX_ITEMS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            lifetime: env::var("CACHE_LIFETIME_SECS")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .map(Duration::seconds)
                .unwrap_or_else(|| Duration::seconds(600)),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_items: 0,
            lifetime: Duration::seconds(600),
        }
    }
}
