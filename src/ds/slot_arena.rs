//! Slot arena with stable handles and an embedded free list.
//!
//! Values live in a `Vec` of slots; a removed slot is threaded onto a free
//! chain and reused by the next insert, so handles stay small (`usize`) and
//! no per-node heap allocation happens after warm-up.
//!
//! ```text
//!   slots: [ Occupied(a) | Vacant(next: 3) | Occupied(c) | Vacant(next: -) ]
//!                             ▲
//!   free_head ────────────────┘
//! ```

/// Stable handle to a slot in a [`SlotArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    /// Returns the raw slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
enum Slot<T> {
    Occupied(T),
    Vacant { next_free: Option<usize> },
}

/// Arena of `T` addressed by [`SlotId`].
#[derive(Debug)]
pub struct SlotArena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> SlotArena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty arena with room for `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Stores `value`, reusing a vacant slot when one exists.
    pub fn insert(&mut self, value: T) -> SlotId {
        self.len += 1;
        match self.free_head {
            Some(idx) => {
                let next_free = match self.slots[idx] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free chain points at occupied slot"),
                };
                self.free_head = next_free;
                self.slots[idx] = Slot::Occupied(value);
                SlotId(idx)
            },
            None => {
                self.slots.push(Slot::Occupied(value));
                SlotId(self.slots.len() - 1)
            },
        }
    }

    /// Takes the value out of `id`, returning `None` for stale handles.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let slot = self.slots.get_mut(id.0)?;
        if matches!(slot, Slot::Vacant { .. }) {
            return None;
        }
        let vacated = std::mem::replace(
            slot,
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(id.0);
        self.len -= 1;
        match vacated {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    /// Shared reference to the value in slot `id`.
    pub fn get(&self, id: SlotId) -> Option<&T> {
        match self.slots.get(id.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    /// Mutable reference to the value in slot `id`.
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        match self.slots.get_mut(id.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    /// Returns `true` if slot `id` is occupied.
    pub fn contains(&self, id: SlotId) -> bool {
        self.get(id).is_some()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every value and forgets the free chain.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove_reuses_slot() {
        let mut arena = SlotArena::new();
        let a = arena.insert("a");
        let b = arena.insert("b");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a), Some(&"a"));
        assert_eq!(arena.get(b), Some(&"b"));

        assert_eq!(arena.remove(a), Some("a"));
        assert_eq!(arena.len(), 1);
        assert!(!arena.contains(a));

        let c = arena.insert("c");
        assert_eq!(c.index(), a.index());
        assert_eq!(arena.get(c), Some(&"c"));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn remove_stale_handle_is_none() {
        let mut arena = SlotArena::new();
        let a = arena.insert(1);
        assert_eq!(arena.remove(a), Some(1));
        assert_eq!(arena.remove(a), None);
        assert_eq!(arena.remove(SlotId(42)), None);
        assert!(arena.is_empty());
    }

    #[test]
    fn free_chain_is_lifo() {
        let mut arena = SlotArena::new();
        let ids: Vec<_> = (0..4).map(|v| arena.insert(v)).collect();
        arena.remove(ids[1]);
        arena.remove(ids[3]);

        assert_eq!(arena.insert(10).index(), ids[3].index());
        assert_eq!(arena.insert(11).index(), ids[1].index());
        assert_eq!(arena.insert(12).index(), 4);
    }

    #[test]
    fn get_mut_and_clear() {
        let mut arena = SlotArena::with_capacity(4);
        let id = arena.insert(String::from("x"));
        arena.get_mut(id).unwrap().push('y');
        assert_eq!(arena.get(id).map(String::as_str), Some("xy"));

        arena.clear();
        assert!(arena.is_empty());
        assert!(!arena.contains(id));
    }
}
