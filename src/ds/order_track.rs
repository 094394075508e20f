//! Ordered key sequence with O(1) reordering.
//!
//! [`OrderTrack`] pairs an [`IntrusiveList`] of keys with a key → [`SlotId`]
//! index. The head is the oldest position, the tail the newest. Depending on
//! the policy that owns it, "newest" means most recently inserted (FIFO/LIFO)
//! or most recently used (LRU/MRU/LFU tie-break).
//!
//! ```text
//!   index: { "a" → id_1, "b" → id_2, "c" → id_3 }
//!
//!   head ─► ["a"] ◄──► ["b"] ◄──► ["c"] ◄── tail
//!
//!   touch("a")  ⇒  ["b"] ◄──► ["c"] ◄──► ["a"]
//! ```
//!
//! | Operation    | Time |
//! |--------------|------|
//! | `push_back`  | O(1) |
//! | `touch`      | O(1) |
//! | `remove`     | O(1) |
//! | `pop_front`  | O(1) |
//! | `pop_back`   | O(1) |

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::intrusive_list::{IntrusiveList, Iter};
use crate::ds::slot_arena::SlotId;

/// Keys ordered oldest (head) to newest (tail).
#[derive(Debug)]
pub struct OrderTrack<K> {
    list: IntrusiveList<K>,
    index: FxHashMap<K, SlotId>,
}

impl<K> OrderTrack<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty sequence with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            list: IntrusiveList::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Number of tracked keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns `true` if `key` is tracked.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Appends `key` at the tail. A key that is already tracked is moved
    /// there instead of duplicated.
    pub fn push_back(&mut self, key: K) {
        if let Some(&id) = self.index.get(&key) {
            self.list.move_to_back(id);
            return;
        }
        let id = self.list.push_back(key.clone());
        self.index.insert(key, id);
    }

    /// Moves `key` to the tail. Returns `false` if the key is not tracked.
    pub fn touch(&mut self, key: &K) -> bool {
        match self.index.get(key) {
            Some(&id) => self.list.move_to_back(id),
            None => false,
        }
    }

    /// Stops tracking `key`. Returns `false` if it was not tracked.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.index.remove(key) {
            Some(id) => self.list.remove(id).is_some(),
            None => false,
        }
    }

    /// Removes and returns the oldest key.
    pub fn pop_front(&mut self) -> Option<K> {
        let key = self.list.pop_front()?;
        self.index.remove(&key);
        Some(key)
    }

    /// Removes and returns the newest key.
    pub fn pop_back(&mut self) -> Option<K> {
        let key = self.list.pop_back()?;
        self.index.remove(&key);
        Some(key)
    }

    /// Oldest key in the sequence.
    pub fn front(&self) -> Option<&K> {
        self.list.front()
    }

    /// Newest key in the sequence.
    pub fn back(&self) -> Option<&K> {
        self.list.back()
    }

    /// Iterates keys from oldest to newest.
    pub fn iter(&self) -> Iter<'_, K> {
        self.list.iter()
    }

    /// Forgets every key.
    pub fn clear(&mut self) {
        self.list.clear();
        self.index.clear();
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.list.debug_validate_invariants();
        assert_eq!(self.list.len(), self.index.len());
        for (key, &id) in &self.index {
            assert!(self.list.get(id) == Some(key), "index points at wrong node");
        }
    }
}

impl<K> Default for OrderTrack<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
