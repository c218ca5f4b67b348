//! SQLite-backed configuration store
//!
//! The production backend. Each operation checks out a pooled connection
//! and runs a single SQL statement, so the unique-constraint check on
//! insert is atomic with the insert itself and no operation exposes an
//! intermediate state.

use std::path::Path;
use std::time::Duration;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;

use super::errors::{StoreError, StoreResult};
use super::item::ConfigItem;
use super::ConfigStore;

/// Schema for the configuration item table, created at startup if absent.
const CREATE_TABLE_SQL: &str = "
    CREATE TABLE IF NOT EXISTS configuration_items (
        key   VARCHAR(55)  PRIMARY KEY,
        value VARCHAR(255) NOT NULL
    )
";

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite-backed store with an r2d2 connection pool
pub struct SqliteStore {
    pool: Pool<SqliteConnectionManager>,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and ensure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let manager =
            SqliteConnectionManager::file(path).with_init(|conn| conn.busy_timeout(BUSY_TIMEOUT));
        let pool = Pool::new(manager)?;

        let store = Self { pool };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Create the configuration item table if it does not exist.
    fn ensure_schema(&self) -> StoreResult<()> {
        let conn = self.pool.get()?;
        conn.execute(CREATE_TABLE_SQL, [])?;
        Ok(())
    }
}

/// Map the no-rows case onto the domain failure, leaving other errors intact.
fn map_absent(key: &str, err: rusqlite::Error) -> StoreError {
    match err {
        rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound(key.to_string()),
        other => StoreError::Backend(other),
    }
}

impl ConfigStore for SqliteStore {
    fn list(
        &self,
        key_pattern: &str,
        page_number: u32,
        page_size: u32,
    ) -> StoreResult<Vec<ConfigItem>> {
        let conn = self.pool.get()?;
        let offset = i64::from(page_number.saturating_sub(1)) * i64::from(page_size);

        // instr is case-sensitive, unlike LIKE; rowid order is insertion order.
        let mut stmt = conn.prepare(
            "SELECT key, value FROM configuration_items
             WHERE ?1 = '' OR instr(key, ?1) > 0
             ORDER BY rowid
             LIMIT ?2 OFFSET ?3",
        )?;

        let rows = stmt.query_map(
            params![key_pattern, i64::from(page_size), offset],
            |row| {
                Ok(ConfigItem {
                    key: row.get(0)?,
                    value: row.get(1)?,
                })
            },
        )?;

        let items = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }

    fn get(&self, key: &str) -> StoreResult<ConfigItem> {
        let conn = self.pool.get()?;
        conn.query_row(
            "SELECT key, value FROM configuration_items WHERE key = ?1",
            params![key],
            |row| {
                Ok(ConfigItem {
                    key: row.get(0)?,
                    value: row.get(1)?,
                })
            },
        )
        .map_err(|e| map_absent(key, e))
    }

    fn add(&self, item: ConfigItem) -> StoreResult<ConfigItem> {
        let conn = self.pool.get()?;
        let inserted = conn.execute(
            "INSERT INTO configuration_items (key, value) VALUES (?1, ?2)",
            params![item.key, item.value],
        );
        match inserted {
            Ok(_) => Ok(item),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(StoreError::Conflict(item.key))
            }
            Err(e) => Err(StoreError::Backend(e)),
        }
    }

    fn update(&self, key: &str, value: &str) -> StoreResult<ConfigItem> {
        let conn = self.pool.get()?;
        conn.query_row(
            "UPDATE configuration_items SET value = ?2 WHERE key = ?1 RETURNING key, value",
            params![key, value],
            |row| {
                Ok(ConfigItem {
                    key: row.get(0)?,
                    value: row.get(1)?,
                })
            },
        )
        .map_err(|e| map_absent(key, e))
    }

    fn delete(&self, key: &str) -> StoreResult<ConfigItem> {
        let conn = self.pool.get()?;
        conn.query_row(
            "DELETE FROM configuration_items WHERE key = ?1 RETURNING key, value",
            params![key],
            |row| {
                Ok(ConfigItem {
                    key: row.get(0)?,
                    value: row.get(1)?,
                })
            },
        )
        .map_err(|e| map_absent(key, e))
    }
}
