//! Cache Store Module
//!
//! Bounded expiring store combining HashMap storage with LRU capacity
//! eviction and lazy TTL expiration.

use std::collections::HashMap;
use std::hash::Hash;

use chrono::Duration;

use crate::cache::{CacheStats, LruTracker, TimedEntry};

// == Expiring Store ==
/// Capacity-limited associative store with read-driven expiration.
///
/// Two independent forces remove entries: the capacity policy (LRU pick,
/// raised as an eviction) and the lifetime check performed lazily on read
/// (never raised as an eviction). There is no background sweeper.
///
/// This type is not safe for concurrent access on its own; it is meant to
/// sit behind [`ObservableCache`](crate::ObservableCache), which serializes
/// every operation.
#[derive(Debug)]
pub struct ExpiringStore<K, V> {
    /// Key-value storage
    entries: HashMap<K, TimedEntry<V>>,
    /// LRU access tracker feeding the capacity policy
    lru: LruTracker<K>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed (0 = unbounded)
    max_items: usize,
    /// How long an entry stays readable after insertion
    lifetime: Duration,
    /// Value most recently removed by the capacity policy
    last_evicted: Option<V>,
}

impl<K, V> ExpiringStore<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates a new store with the given capacity and entry lifetime.
    ///
    /// # Arguments
    /// * `max_items` - Maximum number of entries, 0 for unbounded
    /// * `lifetime` - Entry lifetime; zero or negative expires entries on
    ///   the first read
    pub fn new(max_items: usize, lifetime: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_items,
            lifetime,
            last_evicted: None,
        }
    }

    // == Set ==
    /// Inserts or replaces the entry for `key` with a freshly timestamped
    /// value.
    ///
    /// When inserting a new key into a full bounded store, the least
    /// recently used entry is removed first and its value is returned (and
    /// remembered as [`last_evicted`](Self::last_evicted)). Overwrites and
    /// unbounded stores never evict.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let is_overwrite = self.entries.contains_key(&key);

        let mut evicted = None;
        if !is_overwrite && self.max_items > 0 && self.entries.len() >= self.max_items {
            if let Some(old_key) = self.lru.evict_oldest() {
                if let Some(old_entry) = self.entries.remove(&old_key) {
                    self.stats.record_eviction();
                    self.last_evicted = Some(old_entry.value.clone());
                    evicted = Some(old_entry.value);
                }
            }
        }

        self.entries.insert(key.clone(), TimedEntry::new(value));

        // Update LRU tracker (touch moves to front)
        self.lru.touch(&key);
        self.stats.set_total_entries(self.entries.len());

        evicted
    }

    // == Get ==
    /// Returns the live value for `key`, or `None` if the key is unset or
    /// its entry has outlived the store's lifetime.
    ///
    /// An expired entry is removed as a side effect of the read. Expiration
    /// is not an eviction: it is never reported via `last_evicted`.
    pub fn get(&mut self, key: &K) -> Option<V> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired(self.lifetime) {
                self.entries.remove(key);
                self.lru.remove(key);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_expiration();
                self.stats.record_miss();
                return None;
            }

            // Entry exists and is live - record hit and refresh LRU position
            let value = entry.value.clone();
            self.stats.record_hit();
            self.lru.touch(key);
            Some(value)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Delete ==
    /// Removes the entry for `key` if present; silently does nothing
    /// otherwise. Explicit deletion is not an eviction.
    pub fn delete(&mut self, key: &K) {
        if self.entries.remove(key).is_some() {
            self.lru.remove(key);
            self.stats.set_total_entries(self.entries.len());
        }
    }

    // == Clear ==
    /// Removes all entries. Raises no evictions.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lru.clear();
        self.stats.set_total_entries(0);
    }

    // == Last Evicted ==
    /// Value most recently removed by the capacity policy, if any eviction
    /// has happened yet. Expiration and explicit deletion never update it.
    pub fn last_evicted(&self) -> Option<&V> {
        self.last_evicted.as_ref()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
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

    // == Lifetime ==
    /// The configured entry lifetime.
    #[allow(dead_code)]
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    // == Max Items ==
    /// The configured capacity (0 = unbounded).
    #[allow(dead_code)]
    pub fn max_items(&self) -> usize {
        self.max_items
    }
}
