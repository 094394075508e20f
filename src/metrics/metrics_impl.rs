use crate::metrics::traits::CoreMetricsRecorder;

/// Plain counters owned by a store.
///
/// Every mutation of a store goes through `&mut self`, so no interior
/// mutability is needed here.
#[derive(Debug, Default, Clone)]
pub struct StoreMetrics {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub insert_new: u64,
    pub insert_updates: u64,
    pub insert_ignored: u64,
    pub evicted_entries: u64,
    pub clear_calls: u64,
}

impl CoreMetricsRecorder for StoreMetrics {
    fn record_get_hit(&mut self) {
        self.get_calls += 1;
        self.get_hits += 1;
    }

    fn record_get_miss(&mut self) {
        self.get_calls += 1;
        self.get_misses += 1;
    }

    fn record_insert_new(&mut self) {
        self.insert_calls += 1;
        self.insert_new += 1;
    }

    fn record_insert_update(&mut self) {
        self.insert_calls += 1;
        self.insert_updates += 1;
    }

    fn record_insert_ignored(&mut self) {
        self.insert_calls += 1;
        self.insert_ignored += 1;
    }

    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_counters_split_hits_and_misses() {
        let mut metrics = StoreMetrics::default();
        metrics.record_get_hit();
        metrics.record_get_hit();
        metrics.record_get_miss();
        assert_eq!(metrics.get_calls, 3);
        assert_eq!(metrics.get_hits, 2);
        assert_eq!(metrics.get_misses, 1);
    }

    #[test]
    fn insert_counters_include_ignored_calls() {
        let mut metrics = StoreMetrics::default();
        metrics.record_insert_new();
        metrics.record_insert_update();
        metrics.record_insert_ignored();
        assert_eq!(metrics.insert_calls, 3);
        assert_eq!(metrics.insert_new, 1);
        assert_eq!(metrics.insert_updates, 1);
        assert_eq!(metrics.insert_ignored, 1);
    }
}
