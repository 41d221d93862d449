//! TTL Cache Module
//!
//! Expiring variant: every entry carries an absolute expiry and a background
//! sweeper removes entries once that expiry has passed.

use std::sync::Arc;

use chrono::TimeDelta;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::cache::CacheStore;
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};
use crate::tasks::spawn_sweeper;

// == TTL Cache ==
/// Thread-safe key-value cache with per-entry TTL.
///
/// Reads do not check expiry: an entry whose TTL has elapsed stays readable
/// until the next sweep removes it. Each instance owns exactly one sweeper,
/// started on construction and stopped by [`TtlCache::close`] or by dropping
/// the cache.
#[derive(Debug)]
pub struct TtlCache<V> {
    store: Arc<Mutex<CacheStore<V>>>,
    stop_tx: watch::Sender<bool>,
    sweeper: JoinHandle<()>,
}

impl<V> TtlCache<V>
where
    V: Send + 'static,
{
    // == Constructor ==
    /// Creates an empty cache sweeping at the default interval.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new() -> Self {
        Self::with_config(&CacheConfig::default())
    }

    /// Creates an empty cache using the given configuration.
    ///
    /// Must be called from within a tokio runtime.
    pub fn with_config(config: &CacheConfig) -> Self {
        let store = Arc::new(Mutex::new(CacheStore::new()));
        let (stop_tx, stop_rx) = watch::channel(false);
        let sweeper = spawn_sweeper(store.clone(), config.sweep_interval(), stop_rx);

        Self {
            store,
            stop_tx,
            sweeper,
        }
    }

    // == Set ==
    /// Stores `value` under `key` with an expiry of `now + ttl`, if the key
    /// is not already cached.
    ///
    /// Setting an existing key is a silent no-op: neither the value nor the
    /// expiry change. A zero or negative `ttl` stores an entry that the next
    /// sweep removes.
    pub async fn set(&self, key: impl Into<String>, value: V, ttl: TimeDelta) {
        let mut store = self.store.lock().await;
        store.insert_if_absent(key.into(), value, Some(ttl));
    }

    // == Get ==
    /// Retrieves a clone of the value stored under `key`.
    ///
    /// Returns [`CacheError::NotFound`] when the key is absent. Expired but
    /// not yet swept entries are still returned.
    pub async fn get(&self, key: &str) -> Result<V>
    where
        V: Clone,
    {
        let store = self.store.lock().await;
        store
            .get(key)
            .map(|entry| entry.value.clone())
            .ok_or_else(|| CacheError::NotFound(key.to_string()))
    }

    // == Delete ==
    /// Removes `key`, returning whether it was present.
    pub async fn delete(&self, key: &str) -> bool {
        let mut store = self.store.lock().await;
        store.remove(key)
    }

    /// Returns the current number of entries, expired ones included until
    /// they are swept.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    // == Close ==
    /// Stops the sweeper and waits for it to finish.
    pub async fn close(self) {
        // Err only means the sweeper already exited
        let _ = self.stop_tx.send(true);

        if let Err(e) = self.sweeper.await {
            warn!("TTL sweeper ended abnormally: {}", e);
        }

        info!("TTL cache closed");
    }
}

impl<V> Default for TtlCache<V>
where
    V: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
