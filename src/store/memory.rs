//! In-process property table.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use super::PropertyStore;
use crate::error::StoreError;
use crate::models::requests::{MAX_LOCATION_LENGTH, MAX_TITLE_LENGTH};
use crate::models::{NewProperty, Property, PropertyUpdate};

#[derive(Debug, Default)]
struct Table {
    rows: HashMap<u64, Property>,
    /// Last assigned id; ids are never reused
    last_id: u64,
}

/// Table of properties keyed by a store-assigned, monotonically increasing id.
///
/// Because ids grow with insertion, ordering ties on `created_at` by
/// descending id yields newest-insertion-first.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    table: Arc<RwLock<Table>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }
}

fn check_columns(property: &Property) -> Result<(), StoreError> {
    if property.title.chars().count() > MAX_TITLE_LENGTH {
        return Err(StoreError::Constraint(format!(
            "title longer than {} characters",
            MAX_TITLE_LENGTH
        )));
    }
    if property.location.chars().count() > MAX_LOCATION_LENGTH {
        return Err(StoreError::Constraint(format!(
            "location longer than {} characters",
            MAX_LOCATION_LENGTH
        )));
    }
    Ok(())
}

#[async_trait]
impl PropertyStore for MemoryStore {
    async fn create(&self, new: NewProperty) -> Result<Property, StoreError> {
        let mut table = self.table.write().await;
        let property = Property {
            id: table.last_id + 1,
            title: new.title,
            description: new.description,
            price: new.price,
            location: new.location,
            created_at: Utc::now(),
        };
        check_columns(&property)?;

        table.last_id = property.id;
        table.rows.insert(property.id, property.clone());
        debug!("Inserted property {}", property.id);
        Ok(property)
    }

    async fn update(
        &self,
        id: u64,
        update: PropertyUpdate,
    ) -> Result<Option<Property>, StoreError> {
        let mut table = self.table.write().await;
        let Some(current) = table.rows.get(&id) else {
            return Ok(None);
        };

        let mut updated = current.clone();
        update.apply(&mut updated);
        check_columns(&updated)?;

        table.rows.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: u64) -> Result<Option<Property>, StoreError> {
        Ok(self.table.write().await.rows.remove(&id))
    }

    async fn list_newest_first(&self) -> Result<Vec<Property>, StoreError> {
        let table = self.table.read().await;
        let mut rows: Vec<Property> = table.rows.values().cloned().collect();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(rows)
    }

    async fn get(&self, id: u64) -> Result<Option<Property>, StoreError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn ids(&self) -> Result<Vec<u64>, StoreError> {
        let mut ids: Vec<u64> = self.table.read().await.rows.keys().copied().collect();
        ids.sort_unstable();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(title: &str, price: &str) -> NewProperty {
        NewProperty {
            title: title.to_string(),
            description: format!("{} description", title),
            price: price.parse().unwrap(),
            location: "Test City".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let store = MemoryStore::new();
        let a = store.create(listing("A", "100000.00")).await.unwrap();
        let b = store.create(listing("B", "200000.00")).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert!(b.created_at >= a.created_at);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let store = MemoryStore::new();
        store.create(listing("A", "1.00")).await.unwrap();
        store.create(listing("B", "2.00")).await.unwrap();
        store.create(listing("C", "3.00")).await.unwrap();

        let titles: Vec<String> = store
            .list_newest_first()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["C", "B", "A"]);
    }

    #[tokio::test]
    async fn test_get_absent_is_none() {
        let store = MemoryStore::new();
        assert!(store.get(9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_keeps_identity_and_timestamp() {
        let store = MemoryStore::new();
        let created = store.create(listing("A", "1.00")).await.unwrap();

        let update = PropertyUpdate {
            price: Some("2.50".parse().unwrap()),
            ..Default::default()
        };
        let updated = store.update(created.id, update).await.unwrap().unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.price.cents(), 250);
        assert!(store.update(42, PropertyUpdate::default()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_does_not_reuse_ids() {
        let store = MemoryStore::new();
        let a = store.create(listing("A", "1.00")).await.unwrap();
        assert_eq!(store.delete(a.id).await.unwrap().map(|p| p.id), Some(a.id));
        assert!(store.delete(a.id).await.unwrap().is_none());

        let b = store.create(listing("B", "1.00")).await.unwrap();
        assert_eq!(b.id, 2);
        assert_eq!(store.ids().await.unwrap(), vec![2]);
    }

    #[tokio::test]
    async fn test_column_limits_enforced() {
        let store = MemoryStore::new();
        let result = store
            .create(listing(&"t".repeat(MAX_TITLE_LENGTH + 1), "1.00"))
            .await;
        assert!(matches!(result, Err(StoreError::Constraint(_))));
        assert_eq!(store.len().await, 0);
    }
}
