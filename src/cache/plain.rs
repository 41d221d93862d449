//! Plain Cache Module
//!
//! Non-expiring variant: set/get/delete behind one cache-wide lock.

use tokio::sync::Mutex;

use crate::cache::CacheStore;

// == Cache ==
/// Thread-safe key-value cache whose entries never expire.
///
/// Misses are reported as `None`; there is no error type on this variant.
#[derive(Debug)]
pub struct Cache<V> {
    store: Mutex<CacheStore<V>>,
}

impl<V> Cache<V> {
    // == Constructor ==
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            store: Mutex::new(CacheStore::new()),
        }
    }

    // == Set ==
    /// Stores `value` under `key` if the key is not already cached.
    ///
    /// Setting an existing key is a silent no-op; the first value wins.
    pub async fn set(&self, key: impl Into<String>, value: V) {
        let mut store = self.store.lock().await;
        store.insert_if_absent(key.into(), value, None);
    }

    // == Get ==
    /// Retrieves a clone of the value stored under `key`.
    pub async fn get(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        let store = self.store.lock().await;
        store.get(key).map(|entry| entry.value.clone())
    }

    // == Delete ==
    /// Removes `key`, returning whether it was present.
    pub async fn delete(&self, key: &str) -> bool {
        let mut store = self.store.lock().await;
        store.remove(key)
    }

    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }
}

impl<V> Default for Cache<V> {
    fn default() -> Self {
        Self::new()
    }
}
