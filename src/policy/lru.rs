//! LRU (Least Recently Used) eviction.
//!
//! Keeps keys in recency order: inserts, reads, and value updates all move
//! the key to the tail. The victim is the head, the key untouched for the
//! longest time.
//!
//! ## Architecture
//!
//! ```text
//!   ┌───────────────────────────────────────────────────────────────┐
//!   │  recency: OrderTrack<K>                                       │
//!   │                                                               │
//!   │   head (LRU)                                     tail (MRU)   │
//!   │     [B] ◄──► [C] ◄──► [A]                                     │
//!   │      ▲                                                        │
//!   │      └── select_victim()                                      │
//!   └───────────────────────────────────────────────────────────────┘
//!
//!   insert A, B       [A, B]
//!   get(A)            [B, A]
//!   insert C (full)   evict B ──► [A, C]
//! ```
//!
//! ## Operations
//!
//! | Hook            | Time | Effect              |
//! |-----------------|------|---------------------|
//! | `on_insert`     | O(1) | push to tail        |
//! | `on_access`     | O(1) | move to tail        |
//! | `on_update`     | O(1) | move to tail        |
//! | `select_victim` | O(1) | pop head            |
//!
//! ## Example
//!
//! ```
//! use cachestore::policy::lru::Lru;
//! use cachestore::store::CacheStore;
//!
//! let mut cache = CacheStore::new(Some(2), Lru::new());
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");
//! cache.put("c", 3);
//!
//! assert!(cache.contains(&"a"));
//! assert!(!cache.contains(&"b"));
//! ```

use std::hash::Hash;

use crate::ds::OrderTrack;
use crate::policy::{CachePolicy, EvictionPolicy};

/// Recency-ordered eviction: least recently used leaves first.
#[derive(Debug)]
pub struct Lru<K> {
    recency: OrderTrack<K>,
}

impl<K> Lru<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty LRU policy.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty LRU policy with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            recency: OrderTrack::with_capacity(capacity),
        }
    }

    /// The key that would be evicted next.
    pub fn peek_victim(&self) -> Option<&K> {
        self.recency.front()
    }

    /// Keys from least to most recently used.
    pub fn order(&self) -> impl Iterator<Item = &K> {
        self.recency.iter()
    }
}

impl<K> Default for Lru<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for Lru<K>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn on_insert(&mut self, key: &K) {
        self.recency.push_back(key.clone());
    }

    #[inline]
    fn on_access(&mut self, key: &K) {
        let touched = self.recency.touch(key);
        debug_assert!(touched, "lru: access to untracked key");
    }

    #[inline]
    fn on_update(&mut self, key: &K) {
        let touched = self.recency.touch(key);
        debug_assert!(touched, "lru: update of untracked key");
    }

    fn select_victim(&mut self) -> Option<K> {
        self.recency.pop_front()
    }

    fn len(&self) -> usize {
        self.recency.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.recency.contains(key)
    }

    fn clear(&mut self) {
        self.recency.clear();
    }

    fn kind(&self) -> CachePolicy {
        CachePolicy::Lru
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(lru: &Lru<&'static str>) -> Vec<&'static str> {
        lru.order().copied().collect()
    }

    mod recency {
        use super::*;

        #[test]
        fn access_moves_key_to_tail() {
            let mut lru = Lru::new();
            lru.on_insert(&"a");
            lru.on_insert(&"b");
            lru.on_insert(&"c");
            lru.on_access(&"a");
            assert_eq!(order(&lru), vec!["b", "c", "a"]);
        }

        #[test]
        fn update_moves_key_to_tail() {
            let mut lru = Lru::new();
            lru.on_insert(&"a");
            lru.on_insert(&"b");
            lru.on_update(&"a");
            assert_eq!(order(&lru), vec!["b", "a"]);
            assert_eq!(lru.peek_victim(), Some(&"b"));
        }
    }

    mod eviction {
        use super::*;

        #[test]
        fn victim_is_least_recently_used() {
            let mut lru = Lru::with_capacity(2);
            lru.on_insert(&"a");
            lru.on_insert(&"b");
            lru.on_access(&"a");
            assert_eq!(lru.select_victim(), Some("b"));
            assert_eq!(lru.select_victim(), Some("a"));
            assert_eq!(lru.select_victim(), None);
        }

        #[test]
        fn victim_is_untracked_after_selection() {
            let mut lru = Lru::new();
            lru.on_insert(&1);
            lru.on_insert(&2);
            let victim = lru.select_victim();
            assert_eq!(victim, Some(1));
            assert!(!lru.contains(&1));
            assert_eq!(lru.len(), 1);
        }
    }
}
