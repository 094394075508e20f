use crate::policy::CachePolicy;

/// Point-in-time copy of a store's counters plus gauges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub insert_calls: u64,
    pub insert_new: u64,
    pub insert_updates: u64,
    pub insert_ignored: u64,

    pub evicted_entries: u64,
    pub clear_calls: u64,

    // gauges captured at snapshot time
    pub cache_len: usize,
    pub capacity: Option<usize>,
    pub policy: CachePolicy,
}

impl CacheMetricsSnapshot {
    /// Fraction of `get` calls that hit, `0.0` before any call.
    pub fn hit_rate(&self) -> f64 {
        if self.get_calls == 0 {
            0.0
        } else {
            self.get_hits as f64 / self.get_calls as f64
        }
    }
}
