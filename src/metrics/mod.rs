//! Store-level counters, snapshots, and export.
//!
//! Compiled only with the `metrics` feature. Recording is split from
//! reading: the store writes through [`CoreMetricsRecorder`], callers read a
//! [`CacheMetricsSnapshot`] and may hand it to a [`MetricsExporter`].
//!
//! [`CoreMetricsRecorder`]: traits::CoreMetricsRecorder
//! [`MetricsExporter`]: traits::MetricsExporter

pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use exporter::PrometheusTextExporter;
pub use metrics_impl::StoreMetrics;
pub use snapshot::CacheMetricsSnapshot;
pub use traits::{CoreMetricsRecorder, MetricsExporter, MetricsSnapshotProvider};
