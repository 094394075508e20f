//! # Metrics Traits
//!
//! ```text
//!   CacheStore ──record_*──► CoreMetricsRecorder (StoreMetrics)
//!                                   │
//!                                   ▼ snapshot()
//!                          CacheMetricsSnapshot ──export()──► MetricsExporter
//! ```
//!
//! Recorders only write counters; providers only read; exporters only
//! publish.

/// Counters every store records.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    /// A `put_opt` call with a missing key or value.
    fn record_insert_ignored(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// Produces a point-in-time copy of a recorder's counters.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Publishes snapshots to a monitoring backend.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
