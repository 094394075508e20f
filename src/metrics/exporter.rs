use std::io::Write;
use std::sync::{Mutex, PoisonError};

use crate::metrics::snapshot::CacheMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for store snapshots.
///
/// Writes the text exposition format so the output can be scraped directly
/// or forwarded to a collector. Write errors are dropped: metrics are
/// observational.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write> PrometheusTextExporter<W> {
    /// Creates an exporter that writes to `writer`, prefixing metric names with `prefix`.
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_metric(&self, kind: &str, suffix: &str, labels: &str, value: u64) {
        let name = self.metric_name(suffix);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{}{} {}", name, labels, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write> MetricsExporter<CacheMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &CacheMetricsSnapshot) {
        let labels = format!("{{policy=\"{}\"}}", snapshot.policy);
        let counters = [
            ("get_calls_total", snapshot.get_calls),
            ("get_hits_total", snapshot.get_hits),
            ("get_misses_total", snapshot.get_misses),
            ("insert_calls_total", snapshot.insert_calls),
            ("insert_new_total", snapshot.insert_new),
            ("insert_updates_total", snapshot.insert_updates),
            ("insert_ignored_total", snapshot.insert_ignored),
            ("evicted_entries_total", snapshot.evicted_entries),
            ("clear_calls_total", snapshot.clear_calls),
        ];
        for (suffix, value) in counters {
            self.write_metric("counter", suffix, &labels, value);
        }
        self.write_metric("gauge", "cache_len", &labels, snapshot.cache_len as u64);
        if let Some(capacity) = snapshot.capacity {
            self.write_metric("gauge", "capacity", &labels, capacity as u64);
        }
    }
}
