//! LFU (Least Frequently Used) eviction with LRU tie-break.
//!
//! Every tracked key carries an access count and a position in a recency
//! order. The victim is the key with the smallest count; among keys sharing
//! that count, the least recently used one. Recency is a total order over
//! live keys, so the choice is always unique.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────────────────────────────────────────────┐
//!   │  counts: FxHashMap<K, u64>        recency: OrderTrack<K>            │
//!   │                                                                     │
//!   │   ┌──────┬───────┐                 head (LRU)          tail (MRU)   │
//!   │   │ key  │ count │                   [B] ◄──► [C] ◄──► [A]          │
//!   │   ├──────┼───────┤                                                  │
//!   │   │  A   │   3   │                                                  │
//!   │   │  B   │   2   │   select_victim: walk head → tail, keep the      │
//!   │   │  C   │   2   │   first key with a strictly smaller count        │
//!   │   └──────┴───────┘   ⇒ B (count 2, older than C)                    │
//!   └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Bookkeeping
//!
//! | Hook            | counts        | recency      |
//! |-----------------|---------------|--------------|
//! | `on_insert`     | set to 1      | push to tail |
//! | `on_access`     | += 1          | move to tail |
//! | `on_update`     | += 1          | move to tail |
//! | `select_victim` | remove victim | remove       |
//!
//! Counts saturate at `u64::MAX` instead of wrapping.
//!
//! ## Performance
//!
//! Hooks are O(1). Victim selection scans the recency order, O(n) in the
//! number of live keys, and only runs when an insert finds the store full.
//! The scan stops early at the first key with count 1 since no key can be
//! colder.
//!
//! ## Example
//!
//! ```
//! use cachestore::policy::lfu::Lfu;
//! use cachestore::store::CacheStore;
//!
//! let mut cache = CacheStore::new(Some(2), Lfu::new());
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");
//! cache.get(&"a");
//! cache.get(&"b");
//!
//! assert_eq!(cache.policy().frequency(&"a"), Some(3));
//! assert_eq!(cache.policy().frequency(&"b"), Some(2));
//!
//! cache.put("c", 3);
//! assert!(!cache.contains(&"b"));
//! assert_eq!(cache.policy().frequency(&"c"), Some(1));
//! ```

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::OrderTrack;
use crate::policy::{CachePolicy, EvictionPolicy};

/// Frequency-based eviction, least recently used among equal frequencies.
#[derive(Debug)]
pub struct Lfu<K> {
    counts: FxHashMap<K, u64>,
    recency: OrderTrack<K>,
}

impl<K> Lfu<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty LFU policy.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty LFU policy with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            recency: OrderTrack::with_capacity(capacity),
        }
    }

    /// Current access count for `key`, starting at 1 on insert.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.counts.get(key).copied()
    }

    /// The key that would be evicted next, with its count.
    pub fn peek_victim(&self) -> Option<(&K, u64)> {
        let mut coldest: Option<(&K, u64)> = None;
        for key in self.recency.iter() {
            let Some(&count) = self.counts.get(key) else {
                debug_assert!(false, "lfu: recency key without a count");
                continue;
            };
            if coldest.is_none_or(|(_, best)| count < best) {
                coldest = Some((key, count));
                if count <= 1 {
                    break;
                }
            }
        }
        coldest
    }

    fn bump(&mut self, key: &K) {
        if let Some(count) = self.counts.get_mut(key) {
            *count = count.saturating_add(1);
        }
        let touched = self.recency.touch(key);
        debug_assert!(touched, "lfu: bump of untracked key");
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.recency.debug_validate_invariants();
        assert_eq!(self.counts.len(), self.recency.len());
        for (key, &count) in &self.counts {
            assert!(count >= 1, "lfu: zero count");
            assert!(self.recency.contains(key), "lfu: counted key missing from recency");
        }
    }
}

impl<K> Default for Lfu<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for Lfu<K>
where
    K: Eq + Hash + Clone,
{
    fn on_insert(&mut self, key: &K) {
        self.counts.insert(key.clone(), 1);
        self.recency.push_back(key.clone());
    }

    #[inline]
    fn on_access(&mut self, key: &K) {
        self.bump(key);
    }

    #[inline]
    fn on_update(&mut self, key: &K) {
        self.bump(key);
    }

    fn select_victim(&mut self) -> Option<K> {
        let victim = self.peek_victim()?.0.clone();
        self.counts.remove(&victim);
        self.recency.remove(&victim);
        Some(victim)
    }

    fn len(&self) -> usize {
        self.counts.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.counts.contains_key(key)
    }

    fn clear(&mut self) {
        self.counts.clear();
        self.recency.clear();
    }

    fn kind(&self) -> CachePolicy {
        CachePolicy::Lfu
    }
}
