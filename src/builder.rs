//! Runtime policy selection.
//!
//! [`CacheBuilder`] creates a [`Cache`] whose policy is picked at runtime
//! from a [`CachePolicy`], either directly or from a serde-deserializable
//! [`CacheConfig`].
//!
//! ## Example
//!
//! ```rust
//! use cachestore::builder::{CacheBuilder, CachePolicy};
//!
//! let mut cache = CacheBuilder::new(100).build::<u64, String>(CachePolicy::Lru);
//! cache.put(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//!
//! let mut everything = CacheBuilder::unbounded().build::<u64, u64>(CachePolicy::Unbounded);
//! everything.put(1, 1);
//! assert_eq!(everything.capacity(), None);
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use cachestore::builder::{CacheBuilder, CacheConfig, CachePolicy};
//!
//! let config = CacheConfig { capacity: Some(4), policy: CachePolicy::Lfu };
//! let cache = CacheBuilder::from_config(&config).build::<&str, u32>(config.policy);
//! assert_eq!(cache.capacity(), Some(4));
//! ```

use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::listener::DiscardLog;
pub use crate::policy::CachePolicy;
use crate::policy::AnyPolicy;
use crate::store::CacheStore;

/// Store with a runtime-selected policy.
pub type Cache<K, V, L = DiscardLog> = CacheStore<K, V, AnyPolicy<K>, L>;

/// Serializable cache configuration.
///
/// `capacity` may be omitted, which selects an unbounded store and requires
/// `policy` to be `"unbounded"` (or one of its aliases `"none"`, `"basic"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,
    pub policy: CachePolicy,
}

impl CacheConfig {
    /// Checks the capacity/policy combination without building anything.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a zero capacity or a capacity that does
    /// not match the policy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match (self.capacity, self.policy.is_bounded()) {
            (Some(0), _) => Err(ConfigError::new("cache capacity must be greater than zero")),
            (Some(_), false) => Err(ConfigError::new(format!(
                "{} policy does not take a capacity",
                self.policy
            ))),
            (None, true) => Err(ConfigError::new(format!(
                "{} policy requires a capacity",
                self.policy
            ))),
            _ => Ok(()),
        }
    }

    /// Builds the configured cache.
    pub fn build<K, V>(&self) -> Result<Cache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        self.validate()?;
        CacheBuilder::from_config(self).try_build(self.policy)
    }
}

/// Builder for creating cache instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheBuilder {
    capacity: Option<usize>,
}

impl CacheBuilder {
    /// Create a new cache builder with the specified capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
        }
    }

    /// Builder for a store without a capacity.
    pub fn unbounded() -> Self {
        Self { capacity: None }
    }

    /// Takes the capacity from `config`. The policy is passed to `build`.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self {
            capacity: config.capacity,
        }
    }

    /// Build a cache with the specified policy.
    ///
    /// # Panics
    ///
    /// Panics if the capacity does not suit `policy`. See
    /// [`try_build`](Self::try_build).
    ///
    /// # Example
    ///
    /// ```rust
    /// use cachestore::builder::{CacheBuilder, CachePolicy};
    /// use cachestore::policy::EvictionPolicy;
    ///
    /// let fifo = CacheBuilder::new(100).build::<u64, String>(CachePolicy::Fifo);
    /// assert_eq!(fifo.policy().kind(), CachePolicy::Fifo);
    ///
    /// // Policies also parse from their lowercase names
    /// let lfu = CacheBuilder::new(100).build::<u64, String>("lfu".parse().unwrap());
    /// assert_eq!(lfu.policy().kind(), CachePolicy::Lfu);
    /// ```
    pub fn build<K, V>(self, policy: CachePolicy) -> Cache<K, V>
    where
        K: Eq + Hash + Clone,
    {
        match self.try_build(policy) {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// Fallible counterpart of [`build`](Self::build).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a zero capacity, a capacity with
    /// [`CachePolicy::Unbounded`], or no capacity with any other policy.
    pub fn try_build<K, V>(self, policy: CachePolicy) -> Result<Cache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        self.try_build_with_listener(policy, DiscardLog)
    }

    /// Like [`try_build`](Self::try_build), reporting discards to `listener`.
    pub fn try_build_with_listener<K, V, L>(
        self,
        policy: CachePolicy,
        listener: L,
    ) -> Result<Cache<K, V, L>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        let tracking = AnyPolicy::with_capacity(policy, self.capacity.unwrap_or(0));
        let cache = CacheStore::try_with_listener(self.capacity, tracking, listener)?;
        tracing::debug!(%policy, capacity = ?self.capacity, "cache built");
        Ok(cache)
    }
}
