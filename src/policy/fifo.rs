//! FIFO (First In, First Out) eviction.
//!
//! Keys are queued in insertion order; reads and value updates leave the
//! queue untouched. The victim is the oldest key still present.
//!
//! ```text
//!   insert A, B, C        queue: [A, B, C]
//!   get(A), put(A, ..)    queue: [A, B, C]   (no reordering)
//!   evict                 ──► A
//! ```
//!
//! ## Example
//!
//! ```
//! use cachestore::policy::fifo::Fifo;
//! use cachestore::store::CacheStore;
//!
//! let mut cache = CacheStore::new(Some(2), Fifo::new());
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");
//! cache.put("c", 3);
//!
//! assert!(!cache.contains(&"a"));
//! assert!(cache.contains(&"b"));
//! ```

use std::hash::Hash;

use crate::ds::OrderTrack;
use crate::policy::{CachePolicy, EvictionPolicy};

/// Insertion-ordered eviction: oldest insert leaves first.
#[derive(Debug)]
pub struct Fifo<K> {
    queue: OrderTrack<K>,
}

impl<K> Fifo<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty FIFO policy.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty FIFO policy with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: OrderTrack::with_capacity(capacity),
        }
    }

    /// The key that would be evicted next.
    pub fn peek_victim(&self) -> Option<&K> {
        self.queue.front()
    }

    /// Keys from oldest to newest insertion.
    pub fn order(&self) -> impl Iterator<Item = &K> {
        self.queue.iter()
    }
}

impl<K> Default for Fifo<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for Fifo<K>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn on_insert(&mut self, key: &K) {
        self.queue.push_back(key.clone());
    }

    #[inline]
    fn on_access(&mut self, _key: &K) {}

    #[inline]
    fn on_update(&mut self, _key: &K) {}

    fn select_victim(&mut self) -> Option<K> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.queue.contains(key)
    }

    fn clear(&mut self) {
        self.queue.clear();
    }

    fn kind(&self) -> CachePolicy {
        CachePolicy::Fifo
    }
}
