//! Test doubles for the cache and store seams.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::cache::{CacheBackend, CacheInfo, MemoryCache};
use crate::error::{CacheError, StoreError};
use crate::models::{NewProperty, Property, PropertyUpdate};
use crate::store::{MemoryStore, PropertyStore};

pub fn listing(title: &str, price: &str) -> NewProperty {
    NewProperty {
        title: title.to_string(),
        description: format!("{} description", title),
        price: price.parse().unwrap(),
        location: "Test City".to_string(),
    }
}

/// Delegates to a [`MemoryStore`] while counting read queries.
#[derive(Clone)]
pub struct CountingStore {
    inner: MemoryStore,
    list_calls: Arc<AtomicUsize>,
    get_calls: Arc<AtomicUsize>,
}

impl CountingStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            list_calls: Arc::default(),
            get_calls: Arc::default(),
        }
    }

    /// Direct access that bypasses the counters.
    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PropertyStore for CountingStore {
    async fn create(&self, new: NewProperty) -> Result<Property, StoreError> {
        self.inner.create(new).await
    }

    async fn update(
        &self,
        id: u64,
        update: PropertyUpdate,
    ) -> Result<Option<Property>, StoreError> {
        self.inner.update(id, update).await
    }

    async fn delete(&self, id: u64) -> Result<Option<Property>, StoreError> {
        self.inner.delete(id).await
    }

    async fn list_newest_first(&self) -> Result<Vec<Property>, StoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list_newest_first().await
    }

    async fn get(&self, id: u64) -> Result<Option<Property>, StoreError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get(id).await
    }

    async fn ids(&self) -> Result<Vec<u64>, StoreError> {
        self.inner.ids().await
    }
}

/// Store whose every call reports the store as unreachable.
pub struct FailingStore;

fn store_down() -> StoreError {
    StoreError::Unavailable("connection refused".to_string())
}

#[async_trait]
impl PropertyStore for FailingStore {
    async fn create(&self, _new: NewProperty) -> Result<Property, StoreError> {
        Err(store_down())
    }

    async fn update(
        &self,
        _id: u64,
        _update: PropertyUpdate,
    ) -> Result<Option<Property>, StoreError> {
        Err(store_down())
    }

    async fn delete(&self, _id: u64) -> Result<Option<Property>, StoreError> {
        Err(store_down())
    }

    async fn list_newest_first(&self) -> Result<Vec<Property>, StoreError> {
        Err(store_down())
    }

    async fn get(&self, _id: u64) -> Result<Option<Property>, StoreError> {
        Err(store_down())
    }

    async fn ids(&self) -> Result<Vec<u64>, StoreError> {
        Err(store_down())
    }
}

/// Cache backend that cannot be reached.
pub struct FailingCache;

fn cache_down() -> CacheError {
    CacheError::Unavailable("Connection refused (os error 111)".to_string())
}

#[async_trait]
impl CacheBackend for FailingCache {
    async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Err(cache_down())
    }

    async fn set(&self, _key: &str, _value: String, _ttl_seconds: u64) -> Result<(), CacheError> {
        Err(cache_down())
    }

    async fn delete(&self, _key: &str) -> Result<bool, CacheError> {
        Err(cache_down())
    }

    async fn info(&self) -> Result<CacheInfo, CacheError> {
        Err(cache_down())
    }
}

/// Delegates to a [`MemoryCache`] while recording every `set` as `(key, ttl_seconds)`.
#[derive(Clone)]
pub struct RecordingCache {
    inner: MemoryCache,
    sets: Arc<Mutex<Vec<(String, u64)>>>,
}

impl RecordingCache {
    pub fn new(inner: MemoryCache) -> Self {
        Self {
            inner,
            sets: Arc::default(),
        }
    }

    pub fn sets(&self) -> Vec<(String, u64)> {
        self.sets.lock().unwrap().clone()
    }
}

#[async_trait]
impl CacheBackend for RecordingCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String, ttl_seconds: u64) -> Result<(), CacheError> {
        self.sets
            .lock()
            .unwrap()
            .push((key.to_string(), ttl_seconds));
        self.inner.set(key, value, ttl_seconds).await
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        self.inner.delete(key).await
    }

    async fn info(&self) -> Result<CacheInfo, CacheError> {
        self.inner.info().await
    }
}
