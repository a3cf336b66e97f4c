//! Cache Statistics Module
//!
//! Tracks hit, miss and eviction counters and exposes them as a snapshot.

use serde::Serialize;

// == Cache Stats ==
/// Cache counters plus the entry count at the moment of the snapshot.
///
/// Counters only ever grow. The store keeps one instance under its lock and
/// hands out copies with `size` filled in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Current number of entries in the store
    pub size: usize,
    /// Lookups that returned a live value
    pub hits: u64,
    /// Lookups that found nothing or an expired entry
    pub misses: u64,
    /// Entries removed to make room under capacity pressure
    pub evictions: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Snapshot ==
    /// Copies the counters and stamps the given entry count.
    pub fn snapshot(&self, size: usize) -> Self {
        Self { size, ..*self }
    }
}
