//! Cache Engine Module
//!
//! Synchronous key-value engine combining HashMap storage with LRU
//! tracking and TTL expiration. `MemoryCache` wraps it for shared async use.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::cache::{CacheEntry, CacheInfo, LruTracker, MAX_KEY_LENGTH, MAX_VALUE_SIZE};
use crate::error::CacheError;

// == Cache Engine ==
#[derive(Debug)]
pub struct CacheEngine {
    entries: HashMap<String, CacheEntry>,
    lru: LruTracker,
    info: CacheInfo,
    max_entries: usize,
}

impl CacheEngine {
    /// Creates an empty engine holding at most `max_entries` keys.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            info: CacheInfo::default(),
            max_entries,
        }
    }

    // == Set ==
    /// Stores a value, replacing any previous entry and resetting its TTL.
    ///
    /// At capacity, the least recently used key is evicted first.
    pub fn set(&mut self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError> {
        if key.is_empty() || key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::InvalidRequest(format!(
                "Key must be 1..={} bytes",
                MAX_KEY_LENGTH
            )));
        }
        if value.len() > MAX_VALUE_SIZE {
            return Err(CacheError::InvalidRequest(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            )));
        }

        if !self.entries.contains_key(key) && self.entries.len() >= self.max_entries {
            let evicted = self.lru.evict_oldest().ok_or_else(|| {
                CacheError::CacheFull("Cache is full and eviction failed".to_string())
            })?;
            self.entries.remove(&evicted);
            self.info.record_eviction();
        }

        self.entries
            .insert(key.to_string(), CacheEntry::new(value, ttl));
        self.lru.touch(key);
        Ok(())
    }

    // == Get ==
    /// Returns the live value for `key`, or `None` when absent or expired.
    ///
    /// Every call counts as exactly one keyspace hit or miss.
    pub fn get(&mut self, key: &str) -> Option<String> {
        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                let value = entry.value.clone();
                self.info.record_hit();
                self.lru.touch(key);
                return Some(value);
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.remove_entry(key);
            self.info.record_expired(1);
        }
        self.info.record_miss();
        None
    }

    // == Delete ==
    /// Removes `key` and reports whether a live entry was removed.
    /// Deleting an absent key is a no-op.
    pub fn delete(&mut self, key: &str) -> bool {
        match self.remove_entry(key) {
            Some(entry) => !entry.is_expired(),
            None => false,
        }
    }

    // == Cleanup Expired ==
    /// Drops every expired entry and returns how many were removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = Instant::now();
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            self.remove_entry(key);
        }
        self.info.record_expired(expired.len());
        expired.len()
    }

    // == Info ==
    /// Snapshot of the keyspace counters.
    pub fn info(&self) -> CacheInfo {
        CacheInfo {
            keys: self.entries.len(),
            ..self.info.clone()
        }
    }

    /// Checks for a live entry without touching counters or recency.
    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .map(|entry| !entry.is_expired())
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn remove_entry(&mut self, key: &str) -> Option<CacheEntry> {
        let entry = self.entries.remove(key)?;
        self.lru.remove(key);
        Some(entry)
    }
}
