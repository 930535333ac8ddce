//! Cache-aside reads.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{info, warn};

use super::{property_key, ALL_PROPERTIES_KEY, DETAIL_TTL_SECS, LIST_TTL_SECS};
use crate::cache::CacheBackend;
use crate::error::StoreError;
use crate::models::Property;
use crate::store::PropertyStore;

/// Serves property reads from the cache, falling back to the store on a
/// miss and populating the cache with what the store returned.
///
/// Cache faults never fail a read: a faulty lookup counts as a miss and a
/// faulty populate is logged and skipped. Store faults propagate.
#[derive(Clone)]
pub struct PropertyAccessor {
    cache: Arc<dyn CacheBackend>,
    store: Arc<dyn PropertyStore>,
    list_ttl: u64,
    detail_ttl: u64,
}

impl PropertyAccessor {
    pub fn new(cache: Arc<dyn CacheBackend>, store: Arc<dyn PropertyStore>) -> Self {
        Self {
            cache,
            store,
            list_ttl: LIST_TTL_SECS,
            detail_ttl: DETAIL_TTL_SECS,
        }
    }

    /// Overrides the listing and detail TTLs, in seconds.
    pub fn with_ttls(mut self, list_ttl: u64, detail_ttl: u64) -> Self {
        self.list_ttl = list_ttl;
        self.detail_ttl = detail_ttl;
        self
    }

    /// Every property, newest first.
    ///
    /// The result is either the cached snapshot as stored or a complete
    /// fresh read; the two are never merged.
    pub async fn get_all_properties(&self) -> Result<Vec<Property>, StoreError> {
        if let Some(properties) = self.lookup::<Vec<Property>>(ALL_PROPERTIES_KEY).await {
            info!("Cache HIT for key: {}", ALL_PROPERTIES_KEY);
            return Ok(properties);
        }

        info!("Cache MISS for key: {}", ALL_PROPERTIES_KEY);
        let properties = self.store.list_newest_first().await?;

        if self
            .populate(ALL_PROPERTIES_KEY, &properties, self.list_ttl)
            .await
        {
            info!(
                "Cached {} properties with key: {}",
                properties.len(),
                ALL_PROPERTIES_KEY
            );
        }
        Ok(properties)
    }

    /// A single property, or `Ok(None)` when the store has no such id.
    /// Negative lookups are not cached.
    pub async fn get_property_by_id(&self, id: u64) -> Result<Option<Property>, StoreError> {
        let key = property_key(id);
        if let Some(property) = self.lookup::<Property>(&key).await {
            info!("Cache HIT for key: {}", key);
            return Ok(Some(property));
        }

        info!("Cache MISS for key: {}", key);
        let Some(property) = self.store.get(id).await? else {
            info!("Property with ID {} not found", id);
            return Ok(None);
        };

        if self.populate(&key, &property, self.detail_ttl).await {
            info!("Cached property {} with key: {}", id, key);
        }
        Ok(Some(property))
    }

    async fn lookup<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.cache.get(key).await {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Cache lookup failed for key {}, reading from store: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Discarding undecodable cache entry {}: {}", key, e);
                None
            }
        }
    }

    async fn populate<T: Serialize>(&self, key: &str, value: &T, ttl: u64) -> bool {
        let encoded = match serde_json::to_string(value) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!("Could not encode snapshot for key {}: {}", key, e);
                return false;
            }
        };

        match self.cache.set(key, encoded, ttl).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Cache populate failed for key {}: {}", key, e);
                false
            }
        }
    }
}
