//! TTL Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a task that sweeps expired entries out of `cache` every `interval`.
///
/// The first sweep happens one full interval after spawning. Each sweep holds
/// the write lock for its whole scan and uses the instant taken after the lock
/// is acquired as its cutoff. Hit, miss and eviction counters are not touched.
///
/// The task exits when `stop` turns true or its sender is dropped.
///
/// # Panics
/// If `interval` is zero or too large for the clock. [`CacheStore::new`]
/// rejects such a default TTL, so engines never reach this.
pub fn spawn_reaper<V>(
    cache: Arc<RwLock<CacheStore<V>>>,
    interval: Duration,
    mut stop: watch::Receiver<bool>,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    let mut ticker = time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tokio::spawn(async move {
        debug!(?interval, "reaper started");

        loop {
            tokio::select! {
                biased;

                changed = stop.changed() => {
                    if changed.is_err() || *stop.borrow() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    let (removed, remaining) = {
                        let mut guard = cache.write().await;
                        let removed = guard.remove_expired(Instant::now());
                        (removed, guard.len())
                    };

                    if removed > 0 {
                        info!(removed, remaining, "reaper removed expired entries");
                    } else {
                        debug!("reaper found no expired entries");
                    }
                }
            }
        }

        info!("reaper stopped");
    })
}
