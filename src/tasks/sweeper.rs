//! TTL Sweeper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// Each tick takes the store lock once and removes every entry whose expiry
/// is strictly in the past. The task exits when `stop` receives a value or
/// when its sender is dropped, whichever comes first.
///
/// # Arguments
/// * `store` - Shared reference to the cache store
/// * `interval` - Time between sweeps (must be non-zero)
/// * `stop` - Stop signal owned by the cache
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new()));
/// let (stop_tx, stop_rx) = watch::channel(false);
/// let handle = spawn_sweeper(store.clone(), Duration::from_secs(10), stop_rx);
/// // Later:
/// stop_tx.send(true).ok();
/// handle.await.ok();
/// ```
pub fn spawn_sweeper<V>(
    store: Arc<Mutex<CacheStore<V>>>,
    interval: Duration,
    mut stop: watch::Receiver<bool>,
) -> JoinHandle<()>
where
    V: Send + 'static,
{
    tokio::spawn(async move {
        info!("Starting TTL sweeper with interval of {:?}", interval);

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = {
                        let mut store_guard = store.lock().await;
                        store_guard.sweep_expired(Utc::now())
                    };

                    if removed > 0 {
                        info!("TTL sweep: removed {} expired entries", removed);
                    } else {
                        debug!("TTL sweep: no expired entries found");
                    }
                }
                // Fires on an explicit stop and when the sender is dropped
                _ = stop.changed() => break,
            }
        }

        info!("TTL sweeper stopped");
    })
}
