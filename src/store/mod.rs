//! Store Module
//!
//! Persistence contract for property records. `SqliteStore` is the
//! durable implementation; `MemoryStore` is an in-process table for tests.

mod memory;
mod sqlite;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{NewProperty, Property, PropertyUpdate};

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Source of truth for property records.
///
/// Absent records are reported as `Ok(None)`; `Err` is reserved for faults.
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// Inserts a record, assigning its `id` and `created_at`.
    async fn create(&self, new: NewProperty) -> Result<Property, StoreError>;

    /// Applies a partial update and returns the committed record.
    async fn update(&self, id: u64, update: PropertyUpdate)
        -> Result<Option<Property>, StoreError>;

    /// Removes a record and returns it.
    async fn delete(&self, id: u64) -> Result<Option<Property>, StoreError>;

    /// Every record, newest `created_at` first; ties newest insertion first.
    async fn list_newest_first(&self) -> Result<Vec<Property>, StoreError>;

    async fn get(&self, id: u64) -> Result<Option<Property>, StoreError>;

    /// Ids of every stored record, used for bulk deletes.
    async fn ids(&self) -> Result<Vec<u64>, StoreError>;
}
