//! Configuration item store for configstore
//!
//! The store owns the durable table of configuration items keyed by a
//! unique string key and exposes create/read/update/delete/search over it.
//!
//! # Design Principles
//!
//! - Every operation is a single statement against the backing table
//! - Uniqueness is enforced by the primary key constraint, never by a
//!   read-then-write pre-check
//! - Absence and duplication are the only two domain failures
//! - The value column is opaque text; the store never parses it

mod errors;
mod item;
mod memory;
mod sqlite;

pub use errors::{StoreError, StoreResult};
pub use item::{ConfigItem, MAX_KEY_LEN, MAX_VALUE_LEN};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Durable CRUD + substring search over configuration items.
///
/// Implementations must guarantee that for concurrent `add` calls with the
/// same key exactly one succeeds and the rest observe a conflict, and that
/// no operation exposes an intermediate state.
pub trait ConfigStore: Send + Sync {
    /// List items whose key contains `key_pattern` (case-sensitive), windowed
    /// by 1-based page number and page size over the filtered set in
    /// insertion order. An empty pattern matches every item.
    ///
    /// Callers must reject non-positive page parameters before invoking.
    fn list(
        &self,
        key_pattern: &str,
        page_number: u32,
        page_size: u32,
    ) -> StoreResult<Vec<ConfigItem>>;

    /// Fetch a single item by key.
    fn get(&self, key: &str) -> StoreResult<ConfigItem>;

    /// Insert a new item and return the stored representation.
    fn add(&self, item: ConfigItem) -> StoreResult<ConfigItem>;

    /// Replace the value stored under `key` and return the updated item.
    /// The key itself never changes.
    fn update(&self, key: &str, value: &str) -> StoreResult<ConfigItem>;

    /// Remove the item stored under `key`, returning it as it existed
    /// immediately before deletion.
    fn delete(&self, key: &str) -> StoreResult<ConfigItem>;
}
