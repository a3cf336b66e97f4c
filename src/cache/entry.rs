//! Cache Entry Module
//!
//! Defines a single stored value together with its absolute expiration instant.

use std::time::Duration;

use tokio::time::Instant;

use crate::cache::MAX_TTL;

// == Cache Entry ==
/// A stored value and the instant at which it stops being visible.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Absolute expiration instant
    pub expires_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry that expires `ttl` after `now`.
    ///
    /// A TTL the clock cannot represent is capped at [`MAX_TTL`].
    pub fn new(value: V, ttl: Duration, now: Instant) -> Self {
        let expires_at = now
            .checked_add(ttl)
            .unwrap_or_else(|| now + MAX_TTL);
        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks whether the entry is expired at `now`.
    ///
    /// Boundary condition: an entry whose expiration instant equals `now` is
    /// already expired.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.expires_at <= now
    }
}
