//! LRU Tracker Module
//!
//! Implements least-recently-used ordering for the capacity eviction policy.

use std::collections::VecDeque;

// == LRU Tracker ==
/// Tracks access order for LRU eviction.
///
/// Keys are stored in a VecDeque where:
/// - Front = Most recently used
/// - Back = Least recently used
#[derive(Debug)]
pub struct LruTracker<K> {
    /// Order of keys by access time
    order: VecDeque<K>,
}

impl<K: Eq + Clone> Default for LruTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Clone> LruTracker<K> {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Touch ==
    /// Marks a key as recently used (moves to front).
    ///
    /// If key exists, removes it first then adds to front.
    /// If key is new, just adds to front.
    pub fn touch(&mut self, key: &K) {
        self.remove(key);
        self.order.push_front(key.clone());
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove(&mut self, key: &K) {
        self.order.retain(|k| k != key);
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<K> {
        self.order.pop_back()
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    #[allow(dead_code)]
    pub fn peek_oldest(&self) -> Option<&K> {
        self.order.back()
    }

    // == Clear ==
    /// Drops all tracked keys.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    #[allow(dead_code)]
    pub fn contains(&self, key: &K) -> bool {
        self.order.iter().any(|k| k == key)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> LruTracker<String> {
        LruTracker::new()
    }

    #[test]
    fn test_lru_new() {
        let lru = tracker();
        assert!(lru.is_empty());
        assert_eq!(lru.len(), 0);
    }

    #[test]
    fn test_lru_touch_new_key() {
        let mut lru = tracker();

        lru.touch(&"key1".to_string());
        lru.touch(&"key2".to_string());
        lru.touch(&"key3".to_string());

        assert_eq!(lru.len(), 3);
        // key1 is oldest (added first)
        assert_eq!(lru.peek_oldest(), Some(&"key1".to_string()));
    }

    #[test]
    fn test_lru_touch_existing_key() {
        let mut lru = tracker();

        lru.touch(&"key1".to_string());
        lru.touch(&"key2".to_string());
        lru.touch(&"key3".to_string());

        // Touch key1 again - should move to front
        lru.touch(&"key1".to_string());

        assert_eq!(lru.len(), 3);
        // key2 is now oldest
        assert_eq!(lru.peek_oldest(), Some(&"key2".to_string()));
    }

    #[test]
    fn test_lru_evict_oldest() {
        let mut lru = tracker();

        lru.touch(&"key1".to_string());
        lru.touch(&"key2".to_string());
        lru.touch(&"key3".to_string());

        let evicted = lru.evict_oldest();
        assert_eq!(evicted, Some("key1".to_string()));
        assert_eq!(lru.len(), 2);

        let evicted = lru.evict_oldest();
        assert_eq!(evicted, Some("key2".to_string()));
        assert_eq!(lru.len(), 1);
    }

    #[test]
    fn test_lru_evict_empty() {
        let mut lru = tracker();
        assert_eq!(lru.evict_oldest(), None);
    }

    #[test]
    fn test_lru_remove() {
        let mut lru = tracker();

        lru.touch(&"key1".to_string());
        lru.touch(&"key2".to_string());
        lru.touch(&"key3".to_string());

        lru.remove(&"key2".to_string());

        assert_eq!(lru.len(), 2);
        assert!(!lru.contains(&"key2".to_string()));
        assert!(lru.contains(&"key1".to_string()));
        assert!(lru.contains(&"key3".to_string()));
    }

    #[test]
    fn test_lru_remove_nonexistent_key() {
        let mut lru = tracker();

        lru.touch(&"key1".to_string());
        lru.touch(&"key2".to_string());

        // Remove a key that doesn't exist - should not panic or affect existing keys
        lru.remove(&"nonexistent".to_string());

        assert_eq!(lru.len(), 2);
    }

    #[test]
    fn test_lru_clear() {
        let mut lru = tracker();

        lru.touch(&"key1".to_string());
        lru.touch(&"key2".to_string());
        lru.clear();

        assert!(lru.is_empty());
        assert_eq!(lru.evict_oldest(), None);
    }

    #[test]
    fn test_lru_order_after_multiple_touches() {
        let mut lru = tracker();

        lru.touch(&"a".to_string());
        lru.touch(&"b".to_string());
        lru.touch(&"c".to_string());

        // Re-touch in a different order: afterwards front=[b, c, a]=back
        lru.touch(&"a".to_string());
        lru.touch(&"c".to_string());
        lru.touch(&"b".to_string());

        assert_eq!(lru.evict_oldest(), Some("a".to_string()));
        assert_eq!(lru.evict_oldest(), Some("c".to_string()));
        assert_eq!(lru.evict_oldest(), Some("b".to_string()));
    }

    #[test]
    fn test_lru_works_with_integer_keys() {
        let mut lru: LruTracker<u64> = LruTracker::new();

        lru.touch(&1);
        lru.touch(&2);
        lru.touch(&1);

        assert_eq!(lru.len(), 2);
        assert_eq!(lru.evict_oldest(), Some(2));
    }
}
