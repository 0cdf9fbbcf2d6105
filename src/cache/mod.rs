//! Cache Module
//!
//! Provides the bounded expiring store and the observable façade on top
//! of it.

mod entry;
mod lru;
mod observable;
mod stats;
mod store;


// Re-export public types
pub use entry::TimedEntry;
pub use lru::LruTracker;
pub use observable::ObservableCache;
pub use stats::CacheStats;
pub use store::ExpiringStore;
