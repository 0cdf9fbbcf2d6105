//! Observable Cache Module
//!
//! Public façade over the expiring store: serialized access, eviction
//! notifications, and typed decode-on-read retrieval.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::{watch, RwLock};
use tracing::debug;

use crate::cache::{CacheStats, ExpiringStore};
use crate::config::CacheConfig;
use crate::decode::{Decoder, JsonDecoder};
use crate::error::{CacheError, Result};

// == Observable Cache ==
/// Bounded expiring cache with an eviction notification channel.
///
/// The façade is the unit of mutual exclusion: every operation takes the
/// store lock, so calls on one instance behave as if serialized. Capacity
/// evictions raised inside the store are forwarded to a single-slot watch
/// channel; only the most recent evicted value is retained (no replay).
///
/// Dropping the cache closes the channel and releases all subscriptions.
pub struct ObservableCache<K, V, D = JsonDecoder> {
    /// The store, behind the serializing lock
    store: Arc<RwLock<ExpiringStore<K, V>>>,
    /// Byte-to-model deserializer for typed retrieval
    decoder: D,
    /// Most recently capacity-evicted value, as a broadcastable slot
    evicted_tx: watch::Sender<Option<V>>,
}

impl<K, V> ObservableCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates a cache with the default JSON decoder.
    pub fn new(config: CacheConfig) -> Self {
        Self::with_decoder(config, JsonDecoder)
    }
}

impl<K, V, D> ObservableCache<K, V, D>
where
    K: Hash + Eq + Clone,
    V: Clone,
    D: Decoder,
{
    // == Constructor With Decoder ==
    /// Creates a cache backed by a caller-supplied decoder.
    pub fn with_decoder(config: CacheConfig, decoder: D) -> Self {
        let store = ExpiringStore::new(config.max_items, config.lifetime);
        let (evicted_tx, _) = watch::channel(None);

        Self {
            store: Arc::new(RwLock::new(store)),
            decoder,
            evicted_tx,
        }
    }

    // == Set ==
    /// Stores a value under `key`, replacing any previous entry.
    ///
    /// If the insertion pushes a bounded store past capacity, the evicted
    /// value is published on the eviction channel.
    pub async fn set(&self, key: K, value: V) {
        let mut store = self.store.write().await;

        if let Some(value) = store.set(key, value) {
            debug!("capacity policy evicted an entry");
            // Published while still holding the lock so the slot follows
            // store eviction order; send_replace never blocks.
            self.evicted_tx.send_replace(Some(value));
        }
    }

    // == Get ==
    /// Returns the live value for `key`, or `None` if unset or expired.
    ///
    /// Expired entries are discarded by this read (write lock taken: a get
    /// mutates the store via lazy expiry and the LRU refresh).
    pub async fn get(&self, key: &K) -> Option<V> {
        self.store.write().await.get(key)
    }

    // == Typed Get ==
    /// Retrieves the value for `key` and decodes it into a model `M`.
    ///
    /// `transform` maps the cached value to a byte payload. Fails with
    /// [`CacheError::NotFound`] when the store reports absence (expiration
    /// and "never set" are indistinguishable here), with
    /// [`CacheError::NonParseable`] when `transform` yields no bytes, and
    /// passes decoder failures through as [`CacheError::Decode`].
    pub async fn get_as<M, F>(&self, key: &K, transform: F) -> Result<M>
    where
        M: DeserializeOwned,
        F: FnOnce(&V) -> Option<Vec<u8>>,
    {
        let value = self
            .store
            .write()
            .await
            .get(key)
            .ok_or(CacheError::NotFound)?;

        let bytes = transform(&value).ok_or(CacheError::NonParseable)?;

        self.decoder.decode(&bytes).map_err(CacheError::Decode)
    }

    // == Delete ==
    /// Removes the entry for `key` if present. Never notifies.
    pub async fn delete(&self, key: &K) {
        self.store.write().await.delete(key);
    }

    // == Clean ==
    /// Removes all entries. Never notifies.
    pub async fn clean(&self) {
        self.store.write().await.clear();
        debug!("cache cleared");
    }

    // == Subscribe Evictions ==
    /// Returns a receiver observing the eviction slot.
    ///
    /// The slot starts at `None` and is updated only on capacity eviction;
    /// intermediate values may be skipped if evictions outpace the reader.
    pub fn subscribe_evictions(&self) -> watch::Receiver<Option<V>> {
        self.evicted_tx.subscribe()
    }

    // == Last Evicted ==
    /// The value currently held in the eviction slot, if any eviction has
    /// happened yet.
    pub fn last_evicted(&self) -> Option<V> {
        self.evicted_tx.borrow().clone()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

impl<K, V, D> fmt::Debug for ObservableCache<K, V, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableCache").finish_non_exhaustive()
    }
}
