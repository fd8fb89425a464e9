//! SQLite-backed storage medium.
//!
//! The durable analog of browser local storage: one `kv_entries` table, one
//! row per key, whole-value overwrite on every write.

use async_trait::async_trait;
use sqlx::Row;
use tracing::debug;

use crate::error::StoreResult;
use crate::medium::StorageMedium;
use crate::pool::{KvDatabase, StoreConfig};

/// Key-value medium over a SQLite pool.
///
/// ## Usage
/// ```rust,ignore
/// let medium = SqliteMedium::open(StoreConfig::new("./data/spark.db")).await?;
/// medium.set("cart", "{...}").await?;
/// ```
#[derive(Debug, Clone)]
pub struct SqliteMedium {
    db: KvDatabase,
}

impl SqliteMedium {
    /// Opens (and migrates) the medium at the configured path.
    pub async fn open(config: StoreConfig) -> StoreResult<Self> {
        let db = KvDatabase::new(config).await?;
        Ok(SqliteMedium { db })
    }

    /// Wraps an already-connected database handle.
    pub fn new(db: KvDatabase) -> Self {
        SqliteMedium { db }
    }

    /// Access to the underlying database handle (health checks, shutdown).
    pub fn database(&self) -> &KvDatabase {
        &self.db
    }
}

#[async_trait]
impl StorageMedium for SqliteMedium {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        debug!(key = %key, "kv get");

        let row = sqlx::query("SELECT value FROM kv_entries WHERE key = ?1")
            .bind(key)
            .fetch_optional(self.db.pool())
            .await?;

        match row {
            Some(row) => Ok(Some(row.try_get::<String, _>("value")?)),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        debug!(key = %key, bytes = value.len(), "kv set");

        sqlx::query(
            r#"
            INSERT INTO kv_entries (key, value, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(self.db.pool())
        .await?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        debug!(key = %key, "kv remove");

        sqlx::query("DELETE FROM kv_entries WHERE key = ?1")
            .bind(key)
            .execute(self.db.pool())
            .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
