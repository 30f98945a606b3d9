//! Cache Statistics Module
//!
//! Tracks cache lookups and background evictions.

use serde::Serialize;

// == Cache Stats ==
/// Counters maintained by the store under its lock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of lookups that found a payload
    pub hits: u64,
    /// Number of lookups that found nothing
    pub misses: u64,
    /// Number of entries removed by the reaper
    pub reaped: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Adds `count` to the reaped counter.
    pub fn record_reaped(&mut self, count: usize) {
        self.reaped += count as u64;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.reaped, 0);
        assert_eq!(stats.total_entries, 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        assert_eq!(CacheStats::new().hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_record_reaped_accumulates() {
        let mut stats = CacheStats::new();
        stats.record_reaped(3);
        stats.record_reaped(0);
        stats.record_reaped(2);
        assert_eq!(stats.reaped, 5);
    }

    #[test]
    fn test_stats_serialize() {
        let mut stats = CacheStats::new();
        stats.record_miss();
        stats.set_total_entries(4);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["misses"], 1);
        assert_eq!(json["total_entries"], 4);
    }
}
