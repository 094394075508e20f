//! Thread-safe owner for a [`CacheStore`].
//!
//! `CacheStore` is single-threaded: even `get` mutates policy metadata. A
//! [`SharedStore`] owns one store behind a `parking_lot::Mutex` so every
//! operation runs under a single exclusive lock.
//!
//! ```text
//!   thread A ──put──┐
//!   thread B ──get──┼──► Mutex<CacheStore<K, V, P, L>>
//!   thread C ──put──┘        (one operation at a time)
//! ```
//!
//! `get` returns a clone of the value since the reference cannot outlive
//! the lock guard. Use [`SharedStore::with`] to run several operations
//! atomically or to borrow values without cloning.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use cachestore::concurrent::SharedStore;
//! use cachestore::policy::lru::Lru;
//! use cachestore::store::CacheStore;
//!
//! let shared = Arc::new(SharedStore::new(CacheStore::new(Some(64), Lru::new())));
//!
//! let handles: Vec<_> = (0..4u32)
//!     .map(|t| {
//!         let shared = Arc::clone(&shared);
//!         thread::spawn(move || {
//!             for i in 0..16 {
//!                 shared.put(t * 16 + i, i);
//!             }
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(shared.len(), 64);
//! assert_eq!(shared.get(&17), Some(1));
//! ```

use std::hash::Hash;

use parking_lot::Mutex;

use crate::error::InvariantError;
use crate::listener::{DiscardLog, EvictionListener};
use crate::policy::EvictionPolicy;
use crate::store::CacheStore;

/// A [`CacheStore`] serialized behind one mutex.
#[derive(Debug)]
pub struct SharedStore<K, V, P, L = DiscardLog> {
    inner: Mutex<CacheStore<K, V, P, L>>,
}

impl<K, V, P, L> SharedStore<K, V, P, L>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K>,
{
    /// Wraps `store` in a lock.
    pub fn new(store: CacheStore<K, V, P, L>) -> Self {
        Self {
            inner: Mutex::new(store),
        }
    }

    /// Looks up `key` and clones the value. Counts as a use.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Looks up `key` without telling the policy.
    pub fn peek(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().peek(key).cloned()
    }

    /// Returns `true` if `key` is present. Does not count as a use.
    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Maximum entry count, `None` for an unbounded store.
    pub fn capacity(&self) -> Option<usize> {
        self.inner.lock().capacity()
    }

    /// Removes every entry without notifying the listener.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Runs [`CacheStore::check_invariants`] under the lock.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.inner.lock().check_invariants()
    }

    /// Runs `f` with exclusive access to the store.
    pub fn with<R>(&self, f: impl FnOnce(&mut CacheStore<K, V, P, L>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Unwraps the inner store.
    pub fn into_inner(self) -> CacheStore<K, V, P, L> {
        self.inner.into_inner()
    }
}

impl<K, V, P, L> SharedStore<K, V, P, L>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K>,
    L: EvictionListener<K, V>,
{
    /// Inserts or updates `key`, returning the previous value.
    pub fn put(&self, key: K, value: V) -> Option<V> {
        self.inner.lock().put(key, value)
    }

    /// Null-tolerant [`put`](Self::put) under the lock.
    pub fn put_opt(&self, key: Option<K>, value: Option<V>) -> Option<V> {
        self.inner.lock().put_opt(key, value)
    }
}

impl<K, V, P, L> From<CacheStore<K, V, P, L>> for SharedStore<K, V, P, L>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K>,
{
    fn from(store: CacheStore<K, V, P, L>) -> Self {
        Self::new(store)
    }
}
