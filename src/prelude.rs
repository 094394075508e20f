pub use crate::builder::{Cache, CacheBuilder, CacheConfig};
pub use crate::error::{ConfigError, InvariantError, PageError};
pub use crate::listener::{DiscardLog, EvictionListener, NoopListener};
pub use crate::pagination::{
    HyperPage, IndexPage, IndexedDataset, get_hyper, get_page, index_range,
};
pub use crate::policy::{
    AnyPolicy, CachePolicy, EvictionPolicy, Fifo, Lfu, Lifo, Lru, Mru, Unbounded,
};
pub use crate::store::CacheStore;

#[cfg(feature = "concurrency")]
pub use crate::concurrent::SharedStore;
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::CacheMetricsSnapshot;
