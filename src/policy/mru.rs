//! MRU (Most Recently Used) eviction.
//!
//! Bookkeeping is identical to [`Lru`](crate::policy::lru::Lru); eviction
//! takes the tail instead of the head, i.e. the key touched last among those
//! present before the incoming insert.
//!
//! ```text
//!   insert A, B       [A, B]
//!   get(A)            [B, A]
//!   insert C (full)   evict A ──► [B, C]
//! ```
//!
//! Suited to cyclic scans larger than the cache, where the item just used
//! is the one least likely to be needed again soon.

use std::hash::Hash;

use crate::ds::OrderTrack;
use crate::policy::{CachePolicy, EvictionPolicy};

/// Recency-ordered eviction: most recently used leaves first.
#[derive(Debug)]
pub struct Mru<K> {
    recency: OrderTrack<K>,
}

impl<K> Mru<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty MRU policy.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty MRU policy with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            recency: OrderTrack::with_capacity(capacity),
        }
    }

    /// The most recently used key, which is the next victim.
    pub fn peek_victim(&self) -> Option<&K> {
        self.recency.back()
    }
}

impl<K> Default for Mru<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for Mru<K>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn on_insert(&mut self, key: &K) {
        self.recency.push_back(key.clone());
    }

    #[inline]
    fn on_access(&mut self, key: &K) {
        self.recency.touch(key);
    }

    #[inline]
    fn on_update(&mut self, key: &K) {
        self.recency.touch(key);
    }

    fn select_victim(&mut self) -> Option<K> {
        self.recency.pop_back()
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
        CachePolicy::Mru
    }
}
