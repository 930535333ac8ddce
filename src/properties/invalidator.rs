//! Delete-on-write invalidation.

use std::sync::Arc;

use tracing::{info, warn};

use super::{property_key, ALL_PROPERTIES_KEY};
use crate::cache::CacheBackend;

/// Removes cache entries made stale by a committed write.
///
/// Deletes are idempotent and cache faults are logged, not returned: by the
/// time this runs the store has already committed, and an entry that
/// survives a failed delete ages out with its TTL.
#[derive(Clone)]
pub struct Invalidator {
    cache: Arc<dyn CacheBackend>,
}

impl Invalidator {
    pub fn new(cache: Arc<dyn CacheBackend>) -> Self {
        Self { cache }
    }

    /// Drops `all_properties` and `property_<id>`, present or not.
    pub async fn invalidate(&self, id: u64) {
        let detail_key = property_key(id);
        self.delete_key(ALL_PROPERTIES_KEY).await;
        self.delete_key(&detail_key).await;
        info!(
            "Cache invalidated for '{}' and '{}'",
            ALL_PROPERTIES_KEY, detail_key
        );
    }

    /// Drops only the listing entry; per-property entries are left alone.
    pub async fn clear_all_properties(&self) {
        self.delete_key(ALL_PROPERTIES_KEY).await;
        info!("Cache invalidated for key: {}", ALL_PROPERTIES_KEY);
    }

    async fn delete_key(&self, key: &str) {
        if let Err(e) = self.cache.delete(key).await {
            warn!("Failed to invalidate cache key {}: {}", key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::properties::fakes::FailingCache;

    async fn populated() -> (MemoryCache, Invalidator) {
        let cache = MemoryCache::new(100);
        cache.set(ALL_PROPERTIES_KEY, "[]".to_string(), 3600).await.unwrap();
        cache.set(&property_key(1), "{}".to_string(), 1800).await.unwrap();
        cache.set(&property_key(2), "{}".to_string(), 1800).await.unwrap();
        let invalidator = Invalidator::new(Arc::new(cache.clone()));
        (cache, invalidator)
    }

    #[tokio::test]
    async fn test_invalidate_removes_both_keys() {
        let (cache, invalidator) = populated().await;

        invalidator.invalidate(1).await;

        assert!(!cache.contains(ALL_PROPERTIES_KEY).await);
        assert!(!cache.contains(&property_key(1)).await);
        assert!(cache.contains(&property_key(2)).await);
    }

    #[tokio::test]
    async fn test_invalidate_absent_keys_is_noop() {
        let cache = MemoryCache::new(100);
        cache.set(&property_key(5), "{}".to_string(), 1800).await.unwrap();
        let invalidator = Invalidator::new(Arc::new(cache.clone()));

        invalidator.invalidate(42).await;
        invalidator.invalidate(42).await;

        assert_eq!(cache.len().await, 1);
        assert!(cache.contains(&property_key(5)).await);
    }

    #[tokio::test]
    async fn test_clear_all_properties_keeps_detail_keys() {
        let (cache, invalidator) = populated().await;

        invalidator.clear_all_properties().await;

        assert!(!cache.contains(ALL_PROPERTIES_KEY).await);
        assert!(cache.contains(&property_key(1)).await);
        assert!(cache.contains(&property_key(2)).await);
    }

    #[tokio::test]
    async fn test_cache_fault_is_absorbed() {
        let invalidator = Invalidator::new(Arc::new(FailingCache));
        invalidator.invalidate(1).await;
        invalidator.clear_all_properties().await;
    }
}
