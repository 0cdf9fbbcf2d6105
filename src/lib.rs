//! Memocache - an in-process bounded expiring cache
//!
//! Holds at most N entries, lazily expires entries past their lifetime on
//! read, and publishes capacity evictions on a single-slot channel. The
//! [`ObservableCache`] façade serializes access to the underlying
//! [`ExpiringStore`] and offers decode-on-read typed retrieval.

pub mod cache;
pub mod config;
pub mod decode;
pub mod error;

pub use cache::{CacheStats, ExpiringStore, ObservableCache, TimedEntry};
pub use config::CacheConfig;
pub use decode::{Decoder, JsonDecoder};
pub use error::{CacheError, Result};
