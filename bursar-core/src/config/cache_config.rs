use serde::{Deserialize, Serialize};

use super::defaults;

/// Response cache sizing and expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Entry count ceiling; the least-recently-used entry is evicted
    /// when an insert would exceed it.
    pub max_size: usize,
    /// Time-to-live applied at insert. Zero disables reuse entirely.
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: defaults::DEFAULT_CACHE_MAX_SIZE,
            ttl_seconds: defaults::DEFAULT_CACHE_TTL_SECS,
        }
    }
}
