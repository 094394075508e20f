//! Eviction policies.
//!
//! A policy owns the metadata a [`CacheStore`](crate::store::CacheStore)
//! needs to pick a victim: an ordering of keys, a frequency table, or
//! nothing at all. The store owns the values and drives the policy through
//! four hooks:
//!
//! ```text
//!   put(new key)      ──► [select_victim()] ──► on_insert(key)
//!   put(present key)  ──► on_update(key)
//!   get(hit)          ──► on_access(key)
//! ```
//!
//! | Policy        | on_insert   | on_access / on_update | select_victim              |
//! |---------------|-------------|-----------------------|----------------------------|
//! | [`Unbounded`] | –           | –                     | never                      |
//! | [`Fifo`]      | push tail   | –                     | head (oldest insert)       |
//! | [`Lifo`]      | push tail   | –                     | tail (newest insert)       |
//! | [`Lru`]       | push tail   | move to tail          | head (least recent)        |
//! | [`Mru`]       | push tail   | move to tail          | tail (most recent)         |
//! | [`Lfu`]       | count = 1   | count += 1, to tail   | min count, oldest on ties  |
//!
//! Policies only ever see keys the store already holds, and victim selection
//! runs before the incoming key is registered, so LIFO and MRU choose among
//! the keys present at the time of the insert.
//!
//! [`AnyPolicy`] wraps all six behind one type for runtime selection via
//! [`CachePolicy`].

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub mod fifo;
pub mod lfu;
pub mod lifo;
pub mod lru;
pub mod mru;
pub mod unbounded;

pub use fifo::Fifo;
pub use lfu::Lfu;
pub use lifo::Lifo;
pub use lru::Lru;
pub use mru::Mru;
pub use unbounded::Unbounded;

/// Bookkeeping interface between a store and its eviction strategy.
///
/// Implementations must keep their tracked key set equal to the store's key
/// set: every key passed to `on_insert` stays tracked until it is returned
/// by `select_victim` or the policy is cleared.
pub trait EvictionPolicy<K> {
    /// A key was added to the store.
    fn on_insert(&mut self, key: &K);

    /// A present key was read through `get`.
    fn on_access(&mut self, key: &K);

    /// A present key had its value replaced through `put`.
    fn on_update(&mut self, key: &K);

    /// Chooses the key to evict and stops tracking it.
    ///
    /// Returns `None` when nothing is tracked or the policy never evicts.
    fn select_victim(&mut self) -> Option<K>;

    /// Number of tracked keys.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `key` is tracked.
    fn contains(&self, key: &K) -> bool;

    /// Forgets every tracked key.
    fn clear(&mut self);

    /// `false` for policies that never evict and therefore take no capacity.
    fn is_bounded(&self) -> bool {
        true
    }

    /// Which [`CachePolicy`] this is.
    fn kind(&self) -> CachePolicy;
}

// ---------------------------------------------------------------------------
// CachePolicy
// ---------------------------------------------------------------------------

/// Names the available eviction policies.
///
/// Parses from and displays as lowercase names, which is also the serde
/// representation used by [`CacheConfig`](crate::builder::CacheConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CachePolicy {
    /// No eviction, no capacity.
    #[serde(alias = "none", alias = "basic")]
    Unbounded,
    /// First In, First Out.
    Fifo,
    /// Last In, First Out.
    Lifo,
    /// Least Recently Used.
    #[default]
    Lru,
    /// Most Recently Used.
    Mru,
    /// Least Frequently Used, least recently used among ties.
    Lfu,
}

impl CachePolicy {
    /// All policies, unbounded first.
    pub const ALL: [CachePolicy; 6] = [
        CachePolicy::Unbounded,
        CachePolicy::Fifo,
        CachePolicy::Lifo,
        CachePolicy::Lru,
        CachePolicy::Mru,
        CachePolicy::Lfu,
    ];

    /// Lowercase name, as accepted by `FromStr` and serde.
    pub fn as_str(self) -> &'static str {
        match self {
            CachePolicy::Unbounded => "unbounded",
            CachePolicy::Fifo => "fifo",
            CachePolicy::Lifo => "lifo",
            CachePolicy::Lru => "lru",
            CachePolicy::Mru => "mru",
            CachePolicy::Lfu => "lfu",
        }
    }

    /// `false` only for [`CachePolicy::Unbounded`].
    pub fn is_bounded(self) -> bool {
        !matches!(self, CachePolicy::Unbounded)
    }
}

impl fmt::Display for CachePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CachePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unbounded" | "none" | "basic" => Ok(CachePolicy::Unbounded),
            "fifo" => Ok(CachePolicy::Fifo),
            "lifo" => Ok(CachePolicy::Lifo),
            "lru" => Ok(CachePolicy::Lru),
            "mru" => Ok(CachePolicy::Mru),
            "lfu" => Ok(CachePolicy::Lfu),
            other => Err(ConfigError::new(format!("unknown cache policy: {other:?}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// AnyPolicy
// ---------------------------------------------------------------------------

/// Runtime-selected policy.
#[derive(Debug)]
pub enum AnyPolicy<K> {
    Unbounded(Unbounded),
    Fifo(Fifo<K>),
    Lifo(Lifo<K>),
    Lru(Lru<K>),
    Mru(Mru<K>),
    Lfu(Lfu<K>),
}

impl<K> AnyPolicy<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates the policy named by `kind`, preallocating for `capacity` keys.
    pub fn with_capacity(kind: CachePolicy, capacity: usize) -> Self {
        match kind {
            CachePolicy::Unbounded => AnyPolicy::Unbounded(Unbounded),
            CachePolicy::Fifo => AnyPolicy::Fifo(Fifo::with_capacity(capacity)),
            CachePolicy::Lifo => AnyPolicy::Lifo(Lifo::with_capacity(capacity)),
            CachePolicy::Lru => AnyPolicy::Lru(Lru::with_capacity(capacity)),
            CachePolicy::Mru => AnyPolicy::Mru(Mru::with_capacity(capacity)),
            CachePolicy::Lfu => AnyPolicy::Lfu(Lfu::with_capacity(capacity)),
        }
    }

    /// Returns the LFU policy, if that is what this is.
    pub fn as_lfu(&self) -> Option<&Lfu<K>> {
        match self {
            AnyPolicy::Lfu(lfu) => Some(lfu),
            _ => None,
        }
    }
}

impl<K> From<CachePolicy> for AnyPolicy<K>
where
    K: Eq + Hash + Clone,
{
    fn from(kind: CachePolicy) -> Self {
        AnyPolicy::with_capacity(kind, 0)
    }
}

macro_rules! dispatch {
    ($self:expr, $method:ident($($arg:expr),*)) => {
        match $self {
            AnyPolicy::Unbounded(p) => <Unbounded as EvictionPolicy<K>>::$method(p $(, $arg)*),
            AnyPolicy::Fifo(p) => p.$method($($arg),*),
            AnyPolicy::Lifo(p) => p.$method($($arg),*),
            AnyPolicy::Lru(p) => p.$method($($arg),*),
            AnyPolicy::Mru(p) => p.$method($($arg),*),
            AnyPolicy::Lfu(p) => p.$method($($arg),*),
        }
    };
}

impl<K> EvictionPolicy<K> for AnyPolicy<K>
where
    K: Eq + Hash + Clone,
{
    fn on_insert(&mut self, key: &K) {
        dispatch!(self, on_insert(key))
    }

    fn on_access(&mut self, key: &K) {
        dispatch!(self, on_access(key))
    }

    fn on_update(&mut self, key: &K) {
        dispatch!(self, on_update(key))
    }

    fn select_victim(&mut self) -> Option<K> {
        dispatch!(self, select_victim())
    }

    fn len(&self) -> usize {
        dispatch!(self, len())
    }

    fn contains(&self, key: &K) -> bool {
        dispatch!(self, contains(key))
    }

    fn clear(&mut self) {
        dispatch!(self, clear())
    }

    fn is_bounded(&self) -> bool {
        !matches!(self, AnyPolicy::Unbounded(_))
    }

    fn kind(&self) -> CachePolicy {
        dispatch!(self, kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_names_round_trip() {
        for kind in CachePolicy::ALL {
            assert_eq!(kind.as_str().parse::<CachePolicy>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn policy_parse_accepts_aliases_and_case() {
        assert_eq!("NONE".parse::<CachePolicy>(), Ok(CachePolicy::Unbounded));
        assert_eq!("basic".parse::<CachePolicy>(), Ok(CachePolicy::Unbounded));
        assert_eq!(" Lfu ".parse::<CachePolicy>(), Ok(CachePolicy::Lfu));
    }

    #[test]
    fn policy_parse_rejects_unknown() {
        let err = "arc".parse::<CachePolicy>().unwrap_err();
        assert!(err.message().contains("arc"));
    }

    #[test]
    fn any_policy_reports_kind() {
        for kind in CachePolicy::ALL {
            let policy: AnyPolicy<u32> = AnyPolicy::with_capacity(kind, 4);
            assert_eq!(policy.kind(), kind);
            assert_eq!(policy.is_bounded(), kind.is_bounded());
            assert!(policy.is_empty());
        }
    }

    #[test]
    fn any_policy_dispatches_victim_selection() {
        let mut lru: AnyPolicy<&str> = CachePolicy::Lru.into();
        lru.on_insert(&"a");
        lru.on_insert(&"b");
        lru.on_access(&"a");
        assert_eq!(lru.select_victim(), Some("b"));

        let mut mru: AnyPolicy<&str> = CachePolicy::Mru.into();
        mru.on_insert(&"a");
        mru.on_insert(&"b");
        mru.on_access(&"a");
        assert_eq!(mru.select_victim(), Some("a"));
        assert_eq!(mru.len(), 1);
        assert!(mru.contains(&"b"));
    }

    #[test]
    fn any_policy_as_lfu() {
        let mut lfu: AnyPolicy<u8> = CachePolicy::Lfu.into();
        lfu.on_insert(&1);
        lfu.on_access(&1);
        assert_eq!(lfu.as_lfu().and_then(|p| p.frequency(&1)), Some(2));

        let fifo: AnyPolicy<u8> = CachePolicy::Fifo.into();
        assert!(fifo.as_lfu().is_none());
    }
}
