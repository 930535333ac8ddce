//! Keyspace Statistics Module
//!
//! Cumulative counters kept by the cache backend itself, reported through
//! `info()` the way a Redis server reports `keyspace_hits`/`keyspace_misses`.

// == Cache Info ==
/// Snapshot of backend counters since startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheInfo {
    /// Lookups answered from a live entry
    pub keyspace_hits: u64,
    /// Lookups for absent or expired keys
    pub keyspace_misses: u64,
    /// Entries dropped to stay within capacity
    pub evicted_keys: u64,
    /// Entries dropped because their TTL elapsed
    pub expired_keys: u64,
    /// Live entries at snapshot time
    pub keys: usize,
}

impl CacheInfo {
    pub fn record_hit(&mut self) {
        self.keyspace_hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.keyspace_misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evicted_keys += 1;
    }

    pub fn record_expired(&mut self, count: usize) {
        self.expired_keys += count as u64;
    }
}
