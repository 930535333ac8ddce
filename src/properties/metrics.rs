//! Hit/miss reporting sourced from the cache backend.

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info};

use crate::cache::{CacheBackend, CacheInfo};

/// Aggregate keyspace metrics. Ratios are percentages rounded to 2 places.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheMetrics {
    /// Set when the backend could not be queried; all counters are zero then
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub keyspace_hits: u64,
    pub keyspace_misses: u64,
    pub total_requests: u64,
    pub hit_ratio: f64,
    pub miss_ratio: f64,
}

impl CacheMetrics {
    pub fn from_info(info: &CacheInfo) -> Self {
        let hits = info.keyspace_hits;
        let misses = info.keyspace_misses;
        let total = hits + misses;
        let hit_ratio = if total > 0 {
            hits as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        Self {
            error: None,
            keyspace_hits: hits,
            keyspace_misses: misses,
            total_requests: total,
            hit_ratio: round2(hit_ratio),
            miss_ratio: round2(100.0 - hit_ratio),
        }
    }

    /// Zeroed metrics carrying the fault description.
    pub fn degraded(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Reads cumulative counters from the backend. Never fails.
#[derive(Clone)]
pub struct MetricsReporter {
    cache: Arc<dyn CacheBackend>,
}

impl MetricsReporter {
    pub fn new(cache: Arc<dyn CacheBackend>) -> Self {
        Self { cache }
    }

    pub async fn get_cache_metrics(&self) -> CacheMetrics {
        match self.cache.info().await {
            Ok(info) => {
                let metrics = CacheMetrics::from_info(&info);
                info!(
                    "Cache metrics: hits={}, misses={}, hit_ratio={}%",
                    metrics.keyspace_hits, metrics.keyspace_misses, metrics.hit_ratio
                );
                metrics
            }
            Err(e) => {
                error!("Error retrieving cache metrics: {}", e);
                CacheMetrics::degraded(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::properties::fakes::FailingCache;

    fn info(hits: u64, misses: u64) -> CacheInfo {
        CacheInfo {
            keyspace_hits: hits,
            keyspace_misses: misses,
            ..Default::default()
        }
    }

    #[test]
    fn test_ratios_with_no_requests() {
        let metrics = CacheMetrics::from_info(&info(0, 0));
        assert_eq!(metrics.total_requests, 0);
        assert_eq!(metrics.hit_ratio, 0.0);
        assert_eq!(metrics.miss_ratio, 100.0);
    }

    #[test]
    fn test_ratios_are_rounded() {
        let metrics = CacheMetrics::from_info(&info(2, 1));
        assert_eq!(metrics.total_requests, 3);
        assert_eq!(metrics.hit_ratio, 66.67);
        assert_eq!(metrics.miss_ratio, 33.33);
    }

    #[test]
    fn test_all_hits() {
        let metrics = CacheMetrics::from_info(&info(8, 0));
        assert_eq!(metrics.hit_ratio, 100.0);
        assert_eq!(metrics.miss_ratio, 0.0);
    }

    #[tokio::test]
    async fn test_reports_backend_counters() {
        let cache = MemoryCache::new(10);
        cache.set("all_properties", "[]".to_string(), 60).await.unwrap();
        cache.get("all_properties").await.unwrap();
        cache.get("all_properties").await.unwrap();
        cache.get("property_1").await.unwrap();

        let metrics = MetricsReporter::new(Arc::new(cache)).get_cache_metrics().await;

        assert!(metrics.error.is_none());
        assert_eq!(metrics.keyspace_hits, 2);
        assert_eq!(metrics.keyspace_misses, 1);
        assert_eq!(metrics.hit_ratio, 66.67);
    }

    #[tokio::test]
    async fn test_unreachable_backend_degrades() {
        let metrics = MetricsReporter::new(Arc::new(FailingCache))
            .get_cache_metrics()
            .await;

        assert!(metrics.error.unwrap().contains("unavailable"));
        assert_eq!(metrics.keyspace_hits, 0);
        assert_eq!(metrics.keyspace_misses, 0);
        assert_eq!(metrics.hit_ratio, 0.0);
        assert_eq!(metrics.miss_ratio, 0.0);
    }
}
