//! Write path: commit to the store, then invalidate.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use super::Invalidator;
use crate::error::{ApiError, StoreError};
use crate::models::{NewProperty, Property, PropertyUpdate};
use crate::store::PropertyStore;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Property {0} not found")]
    NotFound(u64),

    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<WriteError> for ApiError {
    fn from(err: WriteError) -> Self {
        match err {
            WriteError::NotFound(_) => ApiError::PropertyNotFound,
            WriteError::Invalid(msg) => ApiError::InvalidRequest(msg),
            WriteError::Store(StoreError::Constraint(msg)) => ApiError::InvalidRequest(msg),
            WriteError::Store(e) => ApiError::Store(e),
        }
    }
}

/// Creates, updates and deletes properties.
///
/// Each successful commit is followed by an explicit
/// [`Invalidator::invalidate`] for the affected id. Writes that do not
/// commit (validation failure, unknown id, store fault) invalidate nothing.
#[derive(Clone)]
pub struct PropertyWriter {
    store: Arc<dyn PropertyStore>,
    invalidator: Invalidator,
}

impl PropertyWriter {
    pub fn new(store: Arc<dyn PropertyStore>, invalidator: Invalidator) -> Self {
        Self { store, invalidator }
    }

    pub async fn create(&self, new: NewProperty) -> Result<Property, WriteError> {
        if let Some(msg) = new.validate() {
            return Err(WriteError::Invalid(msg));
        }

        let property = self.store.create(new).await?;
        self.invalidator.invalidate(property.id).await;
        info!("Property {} created", property.id);
        Ok(property)
    }

    pub async fn update(&self, id: u64, update: PropertyUpdate) -> Result<Property, WriteError> {
        if let Some(msg) = update.validate() {
            return Err(WriteError::Invalid(msg));
        }

        let property = self
            .store
            .update(id, update)
            .await?
            .ok_or(WriteError::NotFound(id))?;
        self.invalidator.invalidate(id).await;
        info!("Property {} updated", id);
        Ok(property)
    }

    pub async fn delete(&self, id: u64) -> Result<Property, WriteError> {
        let property = self
            .store
            .delete(id)
            .await?
            .ok_or(WriteError::NotFound(id))?;
        self.invalidator.invalidate(id).await;
        info!("Property {} deleted", id);
        Ok(property)
    }

    /// Deletes every stored property, one committed delete at a time.
    pub async fn delete_all(&self) -> Result<usize, WriteError> {
        let ids = self.store.ids().await?;
        let mut deleted = 0;
        for id in ids {
            match self.delete(id).await {
                Ok(_) => deleted += 1,
                // removed concurrently; nothing left to invalidate
                Err(WriteError::NotFound(_)) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(deleted)
    }
}
