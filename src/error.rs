//! Error types for the cache
//!
//! Provides the typed-retrieval error taxonomy using thiserror.
//!
//! The raw get/set/delete/clean path never errors: absence is always an
//! `Option`, and capacity pressure resolves by eviction. Only typed
//! retrieval ([`ObservableCache::get_as`](crate::ObservableCache::get_as))
//! can fail.

use thiserror::Error;

// == Boxed Error ==
/// Boxed error used to carry decoder failures through untranslated.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

// == Cache Error Enum ==
/// Failures of the typed-retrieval path.
#[derive(Error, Debug)]
pub enum CacheError {
    /// No live entry for the key. Never set, explicitly deleted,
    /// capacity-evicted and TTL-expired are indistinguishable here.
    #[error("key not found in cache")]
    NotFound,

    /// An entry exists but the supplied transform produced no bytes.
    #[error("cached value could not be transformed into bytes")]
    NonParseable,

    /// A decoder failure, passed through as-is rather than translated
    /// into the cache's own taxonomy.
    #[error("{0}")]
    Decode(BoxError),

    /// Reserved catch-all for surrounding adapter layers; the cache core
    /// never raises it.
    #[error("unknown cache error")]
    Unknown,
}

impl CacheError {
    /// Returns true for [`CacheError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, CacheError::NotFound)
    }
}

// == Result Type Alias ==
/// Convenience Result type for typed retrieval.
pub type Result<T> = std::result::Result<T, CacheError>;
