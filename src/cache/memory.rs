//! In-process cache backend.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheBackend, CacheEngine, CacheInfo};
use crate::error::CacheError;

/// Shared handle to a [`CacheEngine`]. Clones point at the same keyspace.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    engine: Arc<RwLock<CacheEngine>>,
}

impl MemoryCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            engine: Arc::new(RwLock::new(CacheEngine::new(max_entries))),
        }
    }

    /// Live-entry check that leaves hit/miss counters untouched.
    pub async fn contains(&self, key: &str) -> bool {
        self.engine.read().await.contains(key)
    }

    /// Drops expired entries; used by the background sweep.
    pub async fn cleanup_expired(&self) -> usize {
        self.engine.write().await.cleanup_expired()
    }

    pub async fn len(&self) -> usize {
        self.engine.read().await.len()
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        // write lock: lookups update recency and counters
        Ok(self.engine.write().await.get(key))
    }

    async fn set(&self, key: &str, value: String, ttl_seconds: u64) -> Result<(), CacheError> {
        self.engine
            .write()
            .await
            .set(key, value, Duration::from_secs(ttl_seconds))
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.engine.write().await.delete(key))
    }

    async fn info(&self) -> Result<CacheInfo, CacheError> {
        Ok(self.engine.read().await.info())
    }
}
