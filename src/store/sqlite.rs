//! SQLite property table (embedded, file or in-memory)

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use tracing::{debug, info};

use super::PropertyStore;
use crate::error::StoreError;
use crate::models::requests::{MAX_LOCATION_LENGTH, MAX_TITLE_LENGTH};
use crate::models::{NewProperty, Price, Property, PropertyUpdate};

/// (id, title, description, price_cents, location, created_at_us)
type PropertyRow = (i64, String, String, i64, String, i64);

const SELECT_COLUMNS: &str =
    "SELECT id, title, description, price_cents, location, created_at_us FROM properties";

/// Properties persisted in a `properties` table.
///
/// Prices are stored as integer cents and `created_at` as microseconds
/// since the epoch, so both survive the round trip exactly. `AUTOINCREMENT`
/// keeps ids from being reused after deletes.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens (creating if missing) the database at `url` and runs migrations.
    ///
    /// Accepts `sqlite://path/to/file.db` or `sqlite::memory:`.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        info!("Opening SQLite database at: {}", url);

        let in_memory = url.contains(":memory:") || url.contains("mode=memory");
        let mut options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        // An in-memory database lives and dies with its connection, so the
        // pool pins exactly one and never recycles it.
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            options = options
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal);
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options.connect_with(options).await?;
        Self::run_migrations(&pool).await?;
        info!("Database initialization complete");

        Ok(Self { pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<(), StoreError> {
        let ddl = format!(
            r#"
            CREATE TABLE IF NOT EXISTS properties (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL CHECK (length(title) <= {}),
                description TEXT NOT NULL,
                price_cents INTEGER NOT NULL CHECK (price_cents >= 0 AND price_cents <= {}),
                location TEXT NOT NULL CHECK (length(location) <= {}),
                created_at_us INTEGER NOT NULL
            )
            "#,
            MAX_TITLE_LENGTH,
            Price::MAX_CENTS,
            MAX_LOCATION_LENGTH
        );
        sqlx::query(&ddl).execute(pool).await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_properties_created_at
            ON properties (created_at_us DESC, id DESC)
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Waits for in-flight queries, then closes every connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn to_property(row: PropertyRow) -> Result<Property, StoreError> {
    let (id, title, description, price_cents, location, created_at_us) = row;
    let corrupt = |column: &str| StoreError::Corrupt(format!("property {} has bad {}", id, column));

    Ok(Property {
        id: u64::try_from(id).map_err(|_| corrupt("id"))?,
        title,
        description,
        price: u64::try_from(price_cents)
            .ok()
            .and_then(Price::from_cents)
            .ok_or_else(|| corrupt("price_cents"))?,
        location,
        created_at: DateTime::from_timestamp_micros(created_at_us)
            .ok_or_else(|| corrupt("created_at_us"))?,
    })
}

fn cents(price: Price) -> Result<i64, StoreError> {
    i64::try_from(price.cents())
        .map_err(|_| StoreError::Constraint(format!("price {} out of range", price)))
}

fn row_id(id: u64) -> Option<i64> {
    i64::try_from(id).ok()
}

#[async_trait]
impl PropertyStore for SqliteStore {
    async fn create(&self, new: NewProperty) -> Result<Property, StoreError> {
        // Truncated to the stored precision so the returned record equals
        // what later reads decode.
        let created_at_us = Utc::now().timestamp_micros();

        let result = sqlx::query(
            r#"
            INSERT INTO properties (title, description, price_cents, location, created_at_us)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(cents(new.price)?)
        .bind(&new.location)
        .bind(created_at_us)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!("Inserted property {}", id);
        to_property((
            id,
            new.title,
            new.description,
            cents(new.price)?,
            new.location,
            created_at_us,
        ))
    }

    async fn update(
        &self,
        id: u64,
        update: PropertyUpdate,
    ) -> Result<Option<Property>, StoreError> {
        let Some(row_id) = row_id(id) else {
            return Ok(None);
        };

        let mut tx = self.pool.begin().await?;
        let current = sqlx::query_as::<_, PropertyRow>(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(row_id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(current) = current else {
            return Ok(None);
        };

        let mut updated = to_property(current)?;
        update.apply(&mut updated);

        sqlx::query(
            r#"
            UPDATE properties
            SET title = ?, description = ?, price_cents = ?, location = ?
            WHERE id = ?
            "#,
        )
        .bind(&updated.title)
        .bind(&updated.description)
        .bind(cents(updated.price)?)
        .bind(&updated.location)
        .bind(row_id)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        Ok(Some(updated))
    }

    async fn delete(&self, id: u64) -> Result<Option<Property>, StoreError> {
        let Some(row_id) = row_id(id) else {
            return Ok(None);
        };

        let mut tx = self.pool.begin().await?;
        let current = sqlx::query_as::<_, PropertyRow>(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(row_id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(current) = current else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM properties WHERE id = ?")
            .bind(row_id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        to_property(current).map(Some)
    }

    async fn list_newest_first(&self) -> Result<Vec<Property>, StoreError> {
        let rows = sqlx::query_as::<_, PropertyRow>(&format!(
            "{} ORDER BY created_at_us DESC, id DESC",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(to_property).collect()
    }

    async fn get(&self, id: u64) -> Result<Option<Property>, StoreError> {
        let Some(row_id) = row_id(id) else {
            return Ok(None);
        };

        sqlx::query_as::<_, PropertyRow>(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(row_id)
            .fetch_optional(&self.pool)
            .await?
            .map(to_property)
            .transpose()
    }

    async fn ids(&self) -> Result<Vec<u64>, StoreError> {
        let ids = sqlx::query_scalar::<_, i64>("SELECT id FROM properties ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(ids.into_iter().filter_map(|id| u64::try_from(id).ok()).collect())
    }
}
