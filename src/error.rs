//! Error types for the cachestore library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when a store is configured inconsistently
//!   (zero capacity, a capacity on the unbounded policy, an unknown policy
//!   name).
//! - [`InvariantError`]: Returned by
//!   [`CacheStore::check_invariants`](crate::store::CacheStore::check_invariants)
//!   when the primary map and the policy's tracking disagree.
//! - [`PageError`]: Returned by the [`pagination`](crate::pagination) helpers
//!   for out-of-range page arguments.
//!
//! A cache miss is not an error: [`CacheStore::get`](crate::store::CacheStore::get)
//! returns `None`.
//!
//! ## Example Usage
//!
//! ```
//! use cachestore::error::ConfigError;
//! use cachestore::policy::lru::Lru;
//! use cachestore::store::CacheStore;
//!
//! let store: Result<CacheStore<u32, u32, Lru<u32>>, ConfigError> =
//!     CacheStore::try_new(Some(8), Lru::new());
//! assert!(store.is_ok());
//!
//! // Zero capacity is caught without panicking
//! let bad = CacheStore::<u32, u32, _>::try_new(Some(0), Lru::new());
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when the primary map and policy metadata disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when store configuration is invalid.
///
/// Produced by fallible constructors such as
/// [`CacheStore::try_new`](crate::store::CacheStore::try_new) and
/// [`CacheBuilder::try_build`](crate::builder::CacheBuilder::try_build).
///
/// # Example
///
/// ```
/// use cachestore::policy::fifo::Fifo;
/// use cachestore::store::CacheStore;
///
/// let err = CacheStore::<u64, u64, _>::try_new(Some(0), Fifo::new()).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// PageError
// ---------------------------------------------------------------------------

/// Error returned by the pagination helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageError {
    /// Page numbers are 1-indexed; zero was given.
    InvalidPage,
    /// Page size was zero.
    InvalidPageSize,
    /// Start index is not below the dataset length.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::InvalidPage => f.write_str("page must be greater than zero"),
            PageError::InvalidPageSize => f.write_str("page size must be greater than zero"),
            PageError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for dataset of {len} rows")
            },
        }
    }
}

impl std::error::Error for PageError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
