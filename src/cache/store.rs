//! Cache Store Module
//!
//! Single-threaded core of the cache: HashMap storage, TTL expiration,
//! capacity eviction and counters. Callers supply the current instant so
//! every decision inside one call sees the same clock reading.
//! Thread safety is added by [`crate::cache::Cache`].

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

use crate::cache::{evict, CacheEntry, CacheStats, MAX_TTL};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Bounded key/value storage with per-entry expiration.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Hit/miss/eviction counters
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// TTL applied when a write does not carry one
    default_ttl: Duration,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store.
    ///
    /// # Errors
    /// - `InvalidCapacity` if `max_entries` is zero
    /// - `InvalidTtl` if `default_ttl` is zero or longer than [`MAX_TTL`]
    pub fn new(max_entries: usize, default_ttl: Duration) -> Result<Self> {
        if max_entries == 0 {
            return Err(CacheError::InvalidCapacity);
        }
        if default_ttl.is_zero() || default_ttl > MAX_TTL {
            return Err(CacheError::InvalidTtl);
        }

        Ok(Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            max_entries,
            default_ttl,
        })
    }

    // == Set ==
    /// Stores a value, replacing any existing entry for `key`.
    ///
    /// A zero or absent `ttl` falls back to the default TTL. A new key arriving
    /// at a full store evicts exactly one other entry first; overwriting an
    /// existing key never evicts.
    pub fn set(&mut self, key: String, value: V, ttl: Option<Duration>, now: Instant) {
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.max_entries {
            self.evict_one();
        }

        let ttl = ttl.filter(|d| !d.is_zero()).unwrap_or(self.default_ttl);
        self.entries.insert(key, CacheEntry::new(value, ttl, now));
    }

    // == Get ==
    /// Returns a clone of the live value for `key`.
    ///
    /// Expired entries are removed on the spot and counted as misses.
    pub fn get(&mut self, key: &str, now: Instant) -> Option<V> {
        match self.entries.get(key) {
            None => {
                self.stats.record_miss();
                None
            }
            Some(entry) if !entry.is_expired_at(now) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            Some(_) => {
                self.entries.remove(key);
                self.stats.record_miss();
                debug!(key, "lazily removed expired entry");
                None
            }
        }
    }

    // == Delete ==
    /// Removes `key`. Returns true if an entry was present.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Stats ==
    /// Returns the counters together with the current entry count.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.entries.len())
    }

    // == Remove Expired ==
    /// Removes every entry expired at `now`. Counters are left alone.
    ///
    /// Returns the number of entries removed.
    pub fn remove_expired(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        before - self.entries.len()
    }

    /// Removes one arbitrary entry and counts it as an eviction.
    fn evict_one(&mut self) {
        if let Some(victim) = evict::select_victim(&self.entries) {
            self.entries.remove(&victim);
            self.stats.record_eviction();
            debug!(key = %victim, "evicted entry under capacity pressure");
        }
    }

    // == Accessors ==
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }
}
