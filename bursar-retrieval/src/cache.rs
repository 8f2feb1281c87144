//! TTL + LRU response cache keyed by query fingerprint.
//!
//! One merged discipline: recency governs eviction order under
//! capacity pressure, TTL governs validity regardless of recency.
//! All state sits behind a single mutex so concurrent `get`/`set`
//! cannot corrupt recency order or the entry count.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use bursar_core::config::CacheConfig;
use bursar_core::models::RagResponse;
use serde::Serialize;
use tracing::debug;

/// Full content-derived cache key for a normalized query.
///
/// blake3 over the entire normalized string, so unrelated queries can
/// never alias the way a fixed-modulus hash bucket would let them.
pub fn fingerprint(normalized_query: &str) -> String {
    blake3::hash(normalized_query.as_bytes()).to_hex().to_string()
}

struct CacheEntry {
    value: RagResponse,
    expires_at: Instant,
    /// Monotonic touch counter value at last get/set.
    touched: u64,
}

#[derive(Default)]
struct CacheState {
    entries: HashMap<String, CacheEntry>,
    clock: u64,
}

/// Cache statistics snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub size: usize,
    pub max_size: usize,
    pub ttl_seconds: u64,
}

/// Recency- and TTL-bound response cache.
pub struct ResponseCache {
    state: Mutex<CacheState>,
    max_size: usize,
    ttl: Duration,
}

impl ResponseCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            state: Mutex::new(CacheState::default()),
            max_size: config.max_size,
            ttl: Duration::from_secs(config.ttl_seconds),
        }
    }

    /// Look up `key`. A hit refreshes the entry's recency; an expired
    /// entry is removed here, lazily, and reported as a miss.
    pub fn get(&self, key: &str) -> Option<RagResponse> {
        let mut state = self.lock();
        let now = Instant::now();

        let expired = match state.entries.get(key) {
            None => return None,
            Some(entry) => now >= entry.expires_at,
        };
        if expired {
            state.entries.remove(key);
            debug!(key, "cache entry expired");
            return None;
        }

        state.clock += 1;
        let clock = state.clock;
        let entry = state.entries.get_mut(key)?;
        entry.touched = clock;
        Some(entry.value.clone())
    }

    /// Insert under `key`, evicting the least-recently-touched entry
    /// first when the cache is at capacity and `key` is new.
    pub fn set(&self, key: &str, value: RagResponse) {
        if self.max_size == 0 {
            return;
        }

        let mut state = self.lock();
        state.clock += 1;
        let touched = state.clock;

        if !state.entries.contains_key(key) && state.entries.len() >= self.max_size {
            let victim = state
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.touched)
                .map(|(k, _)| k.clone());
            if let Some(victim) = victim {
                state.entries.remove(&victim);
                debug!(key = victim.as_str(), "evicted least-recently-used entry");
            }
        }

        state.entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                expires_at: Instant::now() + self.ttl,
                touched,
            },
        );
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.lock().entries.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.lock().entries.len(),
            max_size: self.max_size,
            ttl_seconds: self.ttl.as_secs(),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CacheState> {
        // Recover the guard if a previous holder panicked; entries and
        // clock are updated together under the lock, so the state is
        // still consistent.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
