//! Cache backend contract consumed by the cache-aside layer.

use async_trait::async_trait;

use crate::cache::CacheInfo;
use crate::error::CacheError;

/// Key-value store with per-entry TTL.
///
/// Implementations own their hit/miss accounting; callers read it through
/// [`CacheBackend::info`] instead of counting locally.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Returns the value for `key`, or `None` when absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Stores `value` under `key` for `ttl_seconds`.
    async fn set(&self, key: &str, value: String, ttl_seconds: u64) -> Result<(), CacheError>;

    /// Removes `key`. Absent keys are not an error; the return value tells
    /// whether anything was removed.
    async fn delete(&self, key: &str) -> Result<bool, CacheError>;

    /// Cumulative backend counters since startup.
    async fn info(&self) -> Result<CacheInfo, CacheError>;
}
