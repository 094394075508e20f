//! Discard notifications.
//!
//! A [`CacheStore`](crate::store::CacheStore) calls its listener exactly
//! once per eviction, after the victim has left both the map and the policy.
//! The listener sees the evicted key and value by reference.
//!
//! | Listener        | Effect                                                |
//! |-----------------|-------------------------------------------------------|
//! | [`DiscardLog`]  | `tracing` event `DISCARD` at `INFO` with the key      |
//! | [`NoopListener`]| nothing                                               |
//! | `FnMut(&K, &V)` | any closure, e.g. pushing into a channel or a metric  |
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use cachestore::policy::fifo::Fifo;
//! use cachestore::store::CacheStore;
//!
//! let discarded = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&discarded);
//! let mut cache = CacheStore::with_listener(Some(1), Fifo::new(), move |k: &&'static str, _v: &u32| {
//!     sink.borrow_mut().push(*k);
//! });
//!
//! cache.put("a", 1);
//! cache.put("b", 2);
//! assert_eq!(*discarded.borrow(), vec!["a"]);
//! ```

use std::fmt::Debug;

/// Receives one call per evicted entry.
pub trait EvictionListener<K, V> {
    fn on_evict(&mut self, key: &K, value: &V);
}

/// Default listener: logs each discard through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardLog;

impl<K, V> EvictionListener<K, V> for DiscardLog
where
    K: Debug,
{
    fn on_evict(&mut self, key: &K, _value: &V) {
        tracing::info!(target: "cachestore::evict", key = ?key, "DISCARD");
    }
}

/// Listener that ignores discards.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl<K, V> EvictionListener<K, V> for NoopListener {
    #[inline]
    fn on_evict(&mut self, _key: &K, _value: &V) {}
}

impl<K, V, F> EvictionListener<K, V> for F
where
    F: FnMut(&K, &V),
{
    #[inline]
    fn on_evict(&mut self, key: &K, value: &V) {
        self(key, value)
    }
}
