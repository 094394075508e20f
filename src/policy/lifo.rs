//! LIFO (Last In, First Out) eviction.
//!
//! Same insertion bookkeeping as FIFO, opposite end on eviction: the victim
//! is the most recently inserted key that is still present. Because victim
//! selection runs before the incoming key is registered, the key being
//! inserted is never its own victim.
//!
//! ```text
//!   insert A, B           stack: [A, B]     (top = B)
//!   insert C (full)       evict B ──► stack: [A, C]
//!   insert D (full)       evict C ──► stack: [A, D]
//! ```
//!
//! Reads never change the stack, so a hot bottom entry is kept forever
//! while the top slot churns. Useful for scratch space where the newest
//! items are the least likely to be reused.

use std::hash::Hash;

use crate::ds::OrderTrack;
use crate::policy::{CachePolicy, EvictionPolicy};

/// Stack-ordered eviction: newest insert leaves first.
#[derive(Debug)]
pub struct Lifo<K> {
    stack: OrderTrack<K>,
}

impl<K> Lifo<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty LIFO policy.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty LIFO policy with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stack: OrderTrack::with_capacity(capacity),
        }
    }

    /// The key that would be evicted next.
    pub fn peek_victim(&self) -> Option<&K> {
        self.stack.back()
    }
}

impl<K> Default for Lifo<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for Lifo<K>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn on_insert(&mut self, key: &K) {
        self.stack.push_back(key.clone());
    }

    #[inline]
    fn on_access(&mut self, _key: &K) {}

    #[inline]
    fn on_update(&mut self, _key: &K) {}

    fn select_victim(&mut self) -> Option<K> {
        self.stack.pop_back()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.stack.contains(key)
    }

    fn clear(&mut self) {
        self.stack.clear();
    }

    fn kind(&self) -> CachePolicy {
        CachePolicy::Lifo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_newest_insert() {
        let mut lifo = Lifo::new();
        lifo.on_insert(&"a");
        lifo.on_insert(&"b");
        assert_eq!(lifo.peek_victim(), Some(&"b"));
        assert_eq!(lifo.select_victim(), Some("b"));

        lifo.on_insert(&"c");
        assert_eq!(lifo.select_victim(), Some("c"));
        assert_eq!(lifo.select_victim(), Some("a"));
        assert_eq!(lifo.select_victim(), None);
    }

    #[test]
    fn access_does_not_protect_or_expose() {
        let mut lifo = Lifo::with_capacity(3);
        for key in [1, 2, 3] {
            lifo.on_insert(&key);
        }
        for _ in 0..100 {
            lifo.on_access(&1);
        }
        lifo.on_update(&2);
        assert_eq!(lifo.select_victim(), Some(3));
        assert_eq!(lifo.len(), 2);
        assert!(lifo.contains(&1));
        assert!(lifo.contains(&2));
    }
}
