//! Cache Store Module
//!
//! Unlocked key-value mapping shared by both cache variants. Callers wrap it
//! in a single mutex; nothing in here synchronizes on its own.

use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key-value storage with per-entry optional expiry.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty CacheStore.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    // == Insert If Absent ==
    /// Stores a key-value pair unless the key is already present.
    ///
    /// An existing entry keeps both its value and its expiry; the new value
    /// is dropped. Returns whether an insertion happened.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Optional TTL, None means the entry never expires
    pub fn insert_if_absent(&mut self, key: String, value: V, ttl: Option<TimeDelta>) -> bool {
        if self.entries.contains_key(&key) {
            return false;
        }

        self.entries.insert(key, CacheEntry::new(value, ttl));
        true
    }

    // == Get ==
    /// Returns the entry stored under `key`, expired or not.
    pub fn get(&self, key: &str) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }

    // == Remove ==
    /// Removes an entry by key, returning whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Sweep Expired ==
    /// Removes every entry whose expiry is strictly before `now`.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new()
    }
}
