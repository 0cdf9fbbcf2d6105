//! Cache Entry Module
//!
//! Defines the timestamped wrapper around stored values.

use chrono::{DateTime, Duration, Utc};

// == Timed Entry ==
/// A stored value together with its insertion timestamp.
///
/// Entries are immutable once created: updating a key replaces the whole
/// entry rather than mutating it in place, so `inserted_at` never moves.
#[derive(Debug, Clone)]
pub struct TimedEntry<V> {
    /// The stored value
    pub value: V,
    /// Wall-clock time the entry was created
    pub inserted_at: DateTime<Utc>,
}

impl<V> TimedEntry<V> {
    // == Constructor ==
    /// Wraps a value, capturing the current time.
    pub fn new(value: V) -> Self {
        Self {
            value,
            inserted_at: Utc::now(),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived the given lifetime.
    ///
    /// Boundary condition: an entry is expired once the current time is
    /// greater than or equal to `inserted_at + lifetime`. A zero or
    /// negative lifetime therefore expires the entry immediately.
    pub fn is_expired(&self, lifetime: Duration) -> bool {
        match self.inserted_at.checked_add_signed(lifetime) {
            Some(deadline) => Utc::now() >= deadline,
            // Deadline past the representable range: never expires
            None => false,
        }
    }

    // == Age ==
    /// Time elapsed since the entry was created.
    pub fn age(&self) -> Duration {
        Utc::now() - self.inserted_at
    }
}
