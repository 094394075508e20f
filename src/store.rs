//! The cache store: a key-value map plus a pluggable eviction policy.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────────┐
//! │                     CacheStore<K, V, P, L> Layout                        │
//! │                                                                          │
//! │   ┌──────────────────────┐   hooks    ┌──────────────────────────────┐   │
//! │   │ map: FxHashMap<K, V> │ ─────────► │ policy: P: EvictionPolicy<K> │   │
//! │   │   owns every value   │            │   order / frequency metadata │   │
//! │   └──────────────────────┘            └──────────────┬───────────────┘   │
//! │              ▲                                       │ select_victim()   │
//! │              │ remove(victim)                        ▼                   │
//! │              └──────────────────────────────── victim key               │
//! │                                                      │                   │
//! │                                                      ▼                   │
//! │                                  listener: L: EvictionListener<K, V>     │
//! │                                          on_evict(&key, &value)          │
//! │                                                                          │
//! │   capacity: Option<usize>   (None = unbounded)                           │
//! └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Put Flow (new key)
//! ──────────────────
//!
//! ```text
//!   put(key, value):
//!     1. key present?  → replace value, policy.on_update(key), done
//!     2. len >= capacity?
//!          victim = policy.select_victim()
//!          map.remove(victim) → listener.on_evict(victim, value)
//!     3. policy.on_insert(key), map.insert(key, value)
//! ```
//!
//! Updates never evict, even when the store is full.
//!
//! Get Flow
//! ────────
//!
//! ```text
//!   get(key):
//!     miss → None
//!     hit  → policy.on_access(key), Some(&value)
//! ```
//!
//! ## Operations
//!
//! | Operation    | Time     | Notes                                       |
//! |--------------|----------|---------------------------------------------|
//! | `put`        | O(1)*    | *LFU eviction scans live keys               |
//! | `get`        | O(1)     | Notifies the policy on hit                  |
//! | `peek`       | O(1)     | No policy notification                      |
//! | `contains`   | O(1)     | No policy notification                      |
//! | `snapshot`   | O(n lg n)| Sorted read-only view                       |
//!
//! ## Thread Safety
//!
//! `CacheStore` is not synchronized. Every mutation takes `&mut self`, so it
//! can only be shared across threads behind a lock owned by the caller (see
//! `SharedStore` under the `concurrency` feature).
//!
//! ## Example Usage
//!
//! ```
//! use cachestore::policy::lru::Lru;
//! use cachestore::store::CacheStore;
//!
//! let mut cache = CacheStore::new(Some(2), Lru::new());
//! cache.put("a", 1);
//! cache.put("b", 2);
//! assert_eq!(cache.get(&"a"), Some(&1));
//!
//! cache.put("c", 3); // evicts "b"
//! assert_eq!(cache.get(&"b"), None);
//! assert_eq!(cache.len(), 2);
//!
//! // Missing keys or values are ignored
//! cache.put_opt(None, Some(4));
//! cache.put_opt(Some("d"), None);
//! assert_eq!(cache.len(), 2);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::{ConfigError, InvariantError};
use crate::listener::{DiscardLog, EvictionListener};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::StoreMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::CacheMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{CoreMetricsRecorder, MetricsSnapshotProvider};
use crate::policy::{EvictionPolicy, Unbounded};

/// Key-value store with a pluggable eviction policy.
///
/// # Type Parameters
///
/// - `K`: Key type, must be `Eq + Hash + Clone`
/// - `V`: Value type
/// - `P`: Eviction policy over `K`
/// - `L`: Discard listener, [`DiscardLog`] by default (needs `K: Debug`)
#[derive(Debug)]
pub struct CacheStore<K, V, P, L = DiscardLog> {
    map: FxHashMap<K, V>,
    policy: P,
    capacity: Option<usize>,
    listener: L,
    #[cfg(feature = "metrics")]
    metrics: StoreMetrics,
}

impl<K, V, P> CacheStore<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K>,
{
    /// Creates a store that logs discards through `tracing`.
    ///
    /// # Panics
    ///
    /// Panics on invalid configuration. See [`try_new`](Self::try_new).
    pub fn new(capacity: Option<usize>, policy: P) -> Self {
        match Self::try_new(capacity, policy) {
            Ok(store) => store,
            Err(e) => panic!("{}", e),
        }
    }

    /// Fallible counterpart of [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is `Some(0)`, if a capacity is
    /// given to a policy that never evicts, or if a bounded policy gets no
    /// capacity.
    pub fn try_new(capacity: Option<usize>, policy: P) -> Result<Self, ConfigError> {
        Self::try_with_listener(capacity, policy, DiscardLog)
    }
}

impl<K, V> CacheStore<K, V, Unbounded>
where
    K: Eq + Hash + Clone,
{
    /// Creates a store that never evicts.
    pub fn unbounded() -> Self {
        Self::from_parts(None, Unbounded, DiscardLog)
    }
}

impl<K, V, P, L> CacheStore<K, V, P, L>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K>,
{
    /// Creates a store that reports discards to `listener`.
    ///
    /// # Panics
    ///
    /// Panics on invalid configuration. See [`try_new`](CacheStore::try_new).
    pub fn with_listener(capacity: Option<usize>, policy: P, listener: L) -> Self {
        match Self::try_with_listener(capacity, policy, listener) {
            Ok(store) => store,
            Err(e) => panic!("{}", e),
        }
    }

    /// Fallible counterpart of [`with_listener`](Self::with_listener).
    pub fn try_with_listener(
        capacity: Option<usize>,
        policy: P,
        listener: L,
    ) -> Result<Self, ConfigError> {
        match (capacity, policy.is_bounded()) {
            (Some(0), _) => Err(ConfigError::new("cache capacity must be greater than zero")),
            (Some(_), false) => Err(ConfigError::new(format!(
                "{} policy does not take a capacity",
                policy.kind()
            ))),
            (None, true) => Err(ConfigError::new(format!(
                "{} policy requires a capacity",
                policy.kind()
            ))),
            _ => Ok(Self::from_parts(capacity, policy, listener)),
        }
    }

    fn from_parts(capacity: Option<usize>, policy: P, listener: L) -> Self {
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity.unwrap_or(0), Default::default()),
            policy,
            capacity,
            listener,
            #[cfg(feature = "metrics")]
            metrics: StoreMetrics::default(),
        }
    }

    /// Looks up `key`, counting the read as a use for the policy.
    ///
    /// Returns `None` on a miss; a miss is not an error.
    ///
    /// # Example
    ///
    /// ```
    /// use cachestore::policy::mru::Mru;
    /// use cachestore::store::CacheStore;
    ///
    /// let mut cache = CacheStore::new(Some(4), Mru::new());
    /// cache.put(1, "one");
    /// assert_eq!(cache.get(&1), Some(&"one"));
    /// assert_eq!(cache.get(&2), None);
    /// ```
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if !self.map.contains_key(key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return None;
        }
        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.policy.on_access(key);
        self.map.get(key)
    }

    /// Looks up `key` without telling the policy.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    /// Returns `true` if `key` is present. Does not count as a use.
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Maximum entry count, `None` for an unbounded store.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Returns `true` if the store has a capacity.
    pub fn is_bounded(&self) -> bool {
        self.capacity.is_some()
    }

    /// The eviction policy, for policy-specific introspection.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Iterates entries in unspecified order without touching the policy.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.map.iter()
    }

    /// Sorted read-only view of every entry.
    pub fn snapshot(&self) -> BTreeMap<&K, &V>
    where
        K: Ord,
    {
        self.map.iter().collect()
    }

    /// Removes every entry without notifying the listener.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
        self.map.clear();
        self.policy.clear();
    }

    /// Verifies that the map and the policy agree on the live key set and
    /// that the store is within capacity.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] describing the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if let Some(capacity) = self.capacity
            && self.map.len() > capacity
        {
            return Err(InvariantError::new(format!(
                "store holds {} entries, capacity is {}",
                self.map.len(),
                capacity
            )));
        }
        if !self.policy.is_bounded() {
            return Ok(());
        }
        if self.policy.len() != self.map.len() {
            return Err(InvariantError::new(format!(
                "{} policy tracks {} keys, map holds {}",
                self.policy.kind(),
                self.policy.len(),
                self.map.len()
            )));
        }
        if self.map.keys().any(|key| !self.policy.contains(key)) {
            return Err(InvariantError::new(format!(
                "{} policy is missing a key present in the map",
                self.policy.kind()
            )));
        }
        Ok(())
    }
}

impl<K, V, P, L> CacheStore<K, V, P, L>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K>,
    L: EvictionListener<K, V>,
{
    /// Inserts or updates `key`.
    ///
    /// - Present key: the value is replaced and the previous one returned;
    ///   the policy sees an update and nothing is evicted.
    /// - New key on a full store: the policy's victim is removed first and
    ///   reported to the listener, then the key is inserted.
    ///
    /// # Example
    ///
    /// ```
    /// use cachestore::policy::fifo::Fifo;
    /// use cachestore::store::CacheStore;
    ///
    /// let mut cache = CacheStore::new(Some(1), Fifo::new());
    /// assert_eq!(cache.put("a", 1), None);
    /// assert_eq!(cache.put("a", 2), Some(1)); // update, no eviction
    /// cache.put("b", 3);                      // evicts "a"
    /// assert!(!cache.contains(&"a"));
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(slot) = self.map.get_mut(&key) {
            let previous = std::mem::replace(slot, value);
            self.policy.on_update(&key);
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();
            return Some(previous);
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        if let Some(capacity) = self.capacity
            && self.map.len() >= capacity
        {
            self.evict_one();
        }

        self.policy.on_insert(&key);
        self.map.insert(key, value);

        debug_assert!(
            !self.policy.is_bounded() || self.policy.len() == self.map.len(),
            "policy out of sync with map after insert"
        );
        None
    }

    /// Null-tolerant [`put`](Self::put): a missing key or value leaves the
    /// store untouched and returns `None`.
    pub fn put_opt(&mut self, key: Option<K>, value: Option<V>) -> Option<V> {
        match (key, value) {
            (Some(key), Some(value)) => self.put(key, value),
            (key, value) => {
                tracing::trace!(
                    has_key = key.is_some(),
                    has_value = value.is_some(),
                    "put ignored"
                );
                #[cfg(feature = "metrics")]
                self.metrics.record_insert_ignored();
                None
            },
        }
    }

    fn evict_one(&mut self) {
        let Some(victim) = self.policy.select_victim() else {
            debug_assert!(false, "full store but policy has no victim");
            return;
        };
        match self.map.remove(&victim) {
            Some(value) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_evicted_entry();
                self.listener.on_evict(&victim, &value);
            },
            None => debug_assert!(false, "policy selected a key missing from the map"),
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V, P, L> CacheStore<K, V, P, L>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K>,
{
    /// Point-in-time copy of the operation counters.
    pub fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_new: self.metrics.insert_new,
            insert_updates: self.metrics.insert_updates,
            insert_ignored: self.metrics.insert_ignored,
            evicted_entries: self.metrics.evicted_entries,
            clear_calls: self.metrics.clear_calls,
            cache_len: self.map.len(),
            capacity: self.capacity,
            policy: self.policy.kind(),
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V, P, L> MetricsSnapshotProvider<CacheMetricsSnapshot> for CacheStore<K, V, P, L>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K>,
{
    fn snapshot(&self) -> CacheMetricsSnapshot {
        self.metrics_snapshot()
    }
}

/// Renders `Current cache:` followed by one `key: value` line per entry in
/// key order.
impl<K, V, P, L> fmt::Display for CacheStore<K, V, P, L>
where
    K: Eq + Hash + Clone + Ord + fmt::Display,
    V: fmt::Display,
    P: EvictionPolicy<K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current cache:")?;
        for (key, value) in self.snapshot() {
            writeln!(f, "{}: {}", key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::listener::NoopListener;
    use crate::policy::{Fifo, Lfu, Lifo, Lru, Mru};

    type Evicted = Rc<RefCell<Vec<&'static str>>>;

    fn recording<P>(
        capacity: usize,
        policy: P,
    ) -> (
        CacheStore<&'static str, u32, P, impl FnMut(&&'static str, &u32)>,
        Evicted,
    )
    where
        P: EvictionPolicy<&'static str>,
    {
        let evicted: Evicted = Rc::default();
        let sink = Rc::clone(&evicted);
        let store = CacheStore::with_listener(
            Some(capacity),
            policy,
            move |key: &&'static str, _value: &u32| sink.borrow_mut().push(*key),
        );
        (store, evicted)
    }

    // ==============================================
    // Construction
    // ==============================================

    mod construction {
        use super::*;

        #[test]
        fn zero_capacity_is_rejected() {
            let err = CacheStore::<u32, u32, _>::try_new(Some(0), Lru::new()).unwrap_err();
            assert!(err.message().contains("greater than zero"));
        }

        #[test]
        #[should_panic(expected = "capacity must be greater than zero")]
        fn new_panics_on_zero_capacity() {
            let _ = CacheStore::<u32, u32, _>::new(Some(0), Fifo::new());
        }

        #[test]
        fn bounded_policy_requires_capacity() {
            let err = CacheStore::<u32, u32, _>::try_new(None, Lfu::new()).unwrap_err();
            assert_eq!(err.message(), "lfu policy requires a capacity");
        }

        #[test]
        fn unbounded_policy_rejects_capacity() {
            let err = CacheStore::<u32, u32, _>::try_new(Some(3), Unbounded).unwrap_err();
            assert_eq!(err.message(), "unbounded policy does not take a capacity");
        }

        #[test]
        fn constructors_start_empty() {
            let store: CacheStore<u32, u32, _> = CacheStore::new(Some(5), Mru::new());
            assert!(store.is_empty());
            assert_eq!(store.capacity(), Some(5));
            assert!(store.is_bounded());

            let unbounded: CacheStore<u32, u32, _> = CacheStore::unbounded();
            assert_eq!(unbounded.capacity(), None);
            assert!(!unbounded.is_bounded());
        }
    }

    // ==============================================
    // Put / Get semantics
    // ==============================================

    mod put_get {
        use super::*;

        #[test]
        fn put_then_get_returns_value() {
            let mut store = CacheStore::new(Some(3), Lru::new());
            assert_eq!(store.put("a", 1), None);
            assert_eq!(store.get(&"a"), Some(&1));
            assert_eq!(store.len(), 1);
        }

        #[test]
        fn miss_returns_none() {
            let mut store = CacheStore::new(Some(1), Fifo::new());
            assert_eq!(store.get(&"never"), None);
            store.put("a", 1);
            store.put("b", 2);
            assert_eq!(store.get(&"a"), None);
        }

        #[test]
        fn update_replaces_value_and_returns_previous() {
            let mut store = CacheStore::new(Some(2), Lfu::new());
            store.put("a", 1);
            assert_eq!(store.put("a", 10), Some(1));
            assert_eq!(store.peek(&"a"), Some(&10));
            assert_eq!(store.policy().frequency(&"a"), Some(2));
        }

        #[test]
        fn update_at_full_capacity_does_not_evict() {
            let (mut store, evicted) = recording(2, Lru::new());
            store.put("a", 1);
            store.put("b", 2);
            store.put("a", 3);
            store.put("b", 4);
            assert_eq!(store.len(), 2);
            assert!(evicted.borrow().is_empty());
        }

        #[test]
        fn missing_key_or_value_is_ignored() {
            let mut store = CacheStore::new(Some(2), Lru::new());
            store.put("a", 1);
            assert_eq!(store.put_opt(None, Some(2)), None);
            assert_eq!(store.put_opt(Some("b"), None), None);
            assert_eq!(store.put_opt(None, None), None);
            assert_eq!(store.len(), 1);
            assert!(!store.contains(&"b"));
            assert_eq!(store.put_opt(Some("a"), Some(5)), Some(1));
        }

        #[test]
        fn peek_and_contains_do_not_touch_policy() {
            let mut store = CacheStore::new(Some(2), Lru::new());
            store.put("a", 1);
            store.put("b", 2);
            assert_eq!(store.peek(&"a"), Some(&1));
            assert!(store.contains(&"a"));
            store.put("c", 3);
            assert!(!store.contains(&"a"));
        }
    }

    // ==============================================
    // Eviction per policy
    // ==============================================

    mod eviction {
        use super::*;

        #[test]
        fn fifo_evicts_oldest() {
            let (mut store, evicted) = recording(2, Fifo::new());
            store.put("A", 1);
            store.put("B", 2);
            store.put("C", 3);
            assert_eq!(*evicted.borrow(), vec!["A"]);
        }

        #[test]
        fn lifo_evicts_newest_present() {
            let (mut store, evicted) = recording(2, Lifo::new());
            store.put("A", 1);
            store.put("B", 2);
            store.put("C", 3);
            assert_eq!(*evicted.borrow(), vec!["B"]);
            assert!(store.contains(&"A"));
            assert!(store.contains(&"C"));
        }

        #[test]
        fn lru_evicts_least_recently_used() {
            let (mut store, evicted) = recording(2, Lru::new());
            store.put("A", 1);
            store.put("B", 2);
            store.get(&"A");
            store.put("C", 3);
            assert_eq!(*evicted.borrow(), vec!["B"]);
        }

        #[test]
        fn mru_evicts_most_recently_used() {
            let (mut store, evicted) = recording(2, Mru::new());
            store.put("A", 1);
            store.put("B", 2);
            store.get(&"A");
            store.put("C", 3);
            assert_eq!(*evicted.borrow(), vec!["A"]);
        }

        #[test]
        fn lfu_evicts_least_frequently_used() {
            let (mut store, evicted) = recording(2, Lfu::new());
            store.put("A", 1);
            store.put("B", 2);
            store.get(&"A");
            store.get(&"A");
            store.get(&"B");
            store.put("C", 3);
            assert_eq!(*evicted.borrow(), vec!["B"]);
        }

        #[test]
        fn lfu_tie_breaks_by_recency() {
            let (mut store, evicted) = recording(2, Lfu::new());
            store.put("A", 1);
            store.put("B", 2);
            store.put("C", 3);
            assert_eq!(*evicted.borrow(), vec!["A"]);
        }

        #[test]
        fn one_notification_per_eviction() {
            let (mut store, evicted) = recording(3, Fifo::new());
            for key in ["a", "b", "c", "d", "e", "f"] {
                store.put(key, 0);
            }
            assert_eq!(*evicted.borrow(), vec!["a", "b", "c"]);
            assert_eq!(store.len(), 3);
        }

        #[test]
        fn evicted_key_can_be_reinserted() {
            let mut store = CacheStore::with_listener(Some(1), Lru::new(), NoopListener);
            store.put(1, "one");
            store.put(2, "two");
            store.put(1, "uno");
            assert_eq!(store.get(&1), Some(&"uno"));
            assert!(store.check_invariants().is_ok());
        }
    }

    // ==============================================
    // Introspection and invariants
    // ==============================================

    mod introspection {
        use super::*;

        #[test]
        fn snapshot_is_sorted() {
            let mut store = CacheStore::unbounded();
            store.put("c", 3);
            store.put("a", 1);
            store.put("b", 2);
            let snapshot: Vec<_> = store.snapshot().into_iter().collect();
            assert_eq!(snapshot, vec![(&"a", &1), (&"b", &2), (&"c", &3)]);
        }

        #[test]
        fn display_lists_entries_in_key_order() {
            let mut store = CacheStore::new(Some(4), Fifo::new());
            store.put("B", "World");
            store.put("A", "Hello");
            assert_eq!(store.to_string(), "Current cache:\nA: Hello\nB: World\n");
        }

        #[test]
        fn unbounded_never_evicts() {
            let mut store = CacheStore::unbounded();
            for i in 0..1_000u32 {
                store.put(i, i * 2);
            }
            assert_eq!(store.len(), 1_000);
            assert_eq!(store.get(&999), Some(&1_998));
            assert!(store.check_invariants().is_ok());
        }

        #[test]
        fn clear_resets_map_and_policy() {
            let (mut store, evicted) = recording(2, Lfu::new());
            store.put("a", 1);
            store.put("b", 2);
            store.clear();
            assert!(store.is_empty());
            assert!(store.policy().is_empty());
            assert!(evicted.borrow().is_empty());
            store.put("c", 3);
            assert!(store.check_invariants().is_ok());
        }

        #[test]
        fn invariants_hold_through_mixed_workload() {
            let mut store = CacheStore::with_listener(Some(8), Lru::new(), NoopListener);
            for i in 0..200u32 {
                store.put(i % 13, i);
                store.get(&(i % 7));
                store.check_invariants().unwrap();
            }
            assert_eq!(store.len(), 8);
        }

        #[test]
        fn untracked_map_entry_is_reported() {
            let mut store = CacheStore::with_listener(Some(4), Lru::new(), NoopListener);
            store.put("a", 1);
            store.map.insert("b", 2);

            let err = store.check_invariants().unwrap_err();
            assert_eq!(err.message(), "lru policy tracks 1 keys, map holds 2");
        }

        #[test]
        fn mismatched_key_sets_of_equal_size_are_reported() {
            let mut store = CacheStore::with_listener(Some(4), Fifo::new(), NoopListener);
            store.put("a", 1);
            store.map.remove(&"a");
            store.map.insert("b", 2);

            let err = store.check_invariants().unwrap_err();
            assert_eq!(err.message(), "fifo policy is missing a key present in the map");
        }

        #[test]
        fn overfull_store_is_reported() {
            let mut store = CacheStore::with_listener(Some(2), Mru::new(), NoopListener);
            store.put("a", 1);
            store.put("b", 2);
            store.capacity = Some(1);

            let err = store.check_invariants().unwrap_err();
            assert_eq!(err.message(), "store holds 2 entries, capacity is 1");
        }
    }

    #[cfg(feature = "metrics")]
    mod metrics {
        use super::*;
        use crate::policy::CachePolicy;

        #[test]
        fn snapshot_counts_operations() {
            let mut store = CacheStore::with_listener(Some(2), Lru::new(), NoopListener);
            store.put("a", 1);
            store.put("b", 2);
            store.put("a", 3);
            store.put("c", 4);
            store.put_opt(None, Some(5));
            store.get(&"a");
            store.get(&"b");

            let snapshot = store.metrics_snapshot();
            assert_eq!(snapshot.insert_calls, 5);
            assert_eq!(snapshot.insert_new, 3);
            assert_eq!(snapshot.insert_updates, 1);
            assert_eq!(snapshot.insert_ignored, 1);
            assert_eq!(snapshot.evicted_entries, 1);
            assert_eq!(snapshot.get_hits, 1);
            assert_eq!(snapshot.get_misses, 1);
            assert_eq!(snapshot.cache_len, 2);
            assert_eq!(snapshot.capacity, Some(2));
            assert_eq!(snapshot.policy, CachePolicy::Lru);
        }
    }
}
