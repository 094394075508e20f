//! cachestore: a bounded in-memory key-value cache with pluggable eviction
//! policies (FIFO, LIFO, LRU, MRU, LFU) and pagination helpers.
//!
//! See `DESIGN.md` for internal architecture and invariants.

pub mod builder;
pub mod ds;
pub mod error;
pub mod listener;
pub mod pagination;
pub mod policy;
pub mod store;

#[cfg(feature = "concurrency")]
pub mod concurrent;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
