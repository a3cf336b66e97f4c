//! Cache Engine Module
//!
//! Thread-safe front of the cache. Wraps a [`CacheStore`] in a single
//! `RwLock`, owns the background reaper and its shutdown signal.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::info;

use crate::cache::{CacheStats, CacheStore};
use crate::error::Result;
use crate::tasks::spawn_reaper;

// == Cache ==
/// In-process TTL cache shared between concurrent callers.
///
/// `get`, `set`, `delete` and reaper sweeps each run inside one write-lock
/// section, so no caller observes a half-applied write. `stats` takes the
/// read lock. Share the engine with `Arc<Cache<V>>`.
///
/// Dropping the engine stops the reaper.
#[derive(Debug)]
pub struct Cache<V> {
    store: Arc<RwLock<CacheStore<V>>>,
    stop: watch::Sender<bool>,
    reaper: JoinHandle<()>,
}

impl<V> Cache<V>
where
    V: Clone + Send + Sync + 'static,
{
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// The reaper sweeps every `default_ttl`. Must be called within a tokio
    /// runtime.
    ///
    /// # Errors
    /// - `InvalidCapacity` if `max_entries` is zero
    /// - `InvalidTtl` if `default_ttl` is zero or longer than
    ///   [`MAX_TTL`](crate::cache::MAX_TTL)
    pub fn new(default_ttl: Duration, max_entries: usize) -> Result<Self> {
        let store = Arc::new(RwLock::new(CacheStore::new(max_entries, default_ttl)?));
        let (stop, stop_rx) = watch::channel(false);
        let reaper = spawn_reaper(store.clone(), default_ttl, stop_rx);

        info!(max_entries, ?default_ttl, "cache engine started");

        Ok(Self { store, stop, reaper })
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any existing entry.
    ///
    /// `ttl` of None or zero uses the default TTL.
    pub async fn set(&self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let mut store = self.store.write().await;
        store.set(key.into(), value, ttl, Instant::now());
    }

    // == Get ==
    /// Returns the live value for `key`, or None if absent or expired.
    pub async fn get(&self, key: &str) -> Option<V> {
        let mut store = self.store.write().await;
        store.get(key, Instant::now())
    }

    // == Delete ==
    /// Removes `key` if present.
    pub async fn delete(&self, key: &str) {
        self.store.write().await.delete(key);
    }

    // == Stats ==
    /// Returns a consistent snapshot of size and counters.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }
}

impl<V> Cache<V> {
    // == Shutdown ==
    /// Signals the reaper to stop.
    ///
    /// Safe to call repeatedly and after the reaper has already exited. A
    /// sweep in progress finishes before the task observes the signal.
    pub fn shutdown(&self) {
        self.stop.send_replace(true);
    }

    /// Returns true while the reaper task is alive.
    pub fn is_reaper_running(&self) -> bool {
        !self.reaper.is_finished()
    }
}

impl<V> Drop for Cache<V> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
