//! In-memory configuration store
//!
//! Test double that preserves the SQLite backend's guarantees: all access
//! is serialized behind a mutex, duplicate keys are rejected at insert,
//! and iteration order is insertion order. Tests written against this
//! store remain valid against the real backend.

use std::sync::{Mutex, MutexGuard};

use super::errors::{StoreError, StoreResult};
use super::item::ConfigItem;
use super::ConfigStore;

/// In-memory store backed by an insertion-ordered vector
pub struct MemoryStore {
    items: Mutex<Vec<ConfigItem>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    fn locked(&self) -> StoreResult<MutexGuard<'_, Vec<ConfigItem>>> {
        self.items
            .lock()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for MemoryStore {
    fn list(
        &self,
        key_pattern: &str,
        page_number: u32,
        page_size: u32,
    ) -> StoreResult<Vec<ConfigItem>> {
        let items = self.locked()?;
        let offset = page_number.saturating_sub(1) as usize * page_size as usize;

        Ok(items
            .iter()
            .filter(|item| item.key.contains(key_pattern))
            .skip(offset)
            .take(page_size as usize)
            .cloned()
            .collect())
    }

    fn get(&self, key: &str) -> StoreResult<ConfigItem> {
        let items = self.locked()?;
        items
            .iter()
            .find(|item| item.key == key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    fn add(&self, item: ConfigItem) -> StoreResult<ConfigItem> {
        let mut items = self.locked()?;
        if items.iter().any(|existing| existing.key == item.key) {
            return Err(StoreError::Conflict(item.key));
        }
        items.push(item.clone());
        Ok(item)
    }

    fn update(&self, key: &str, value: &str) -> StoreResult<ConfigItem> {
        let mut items = self.locked()?;
        let item = items
            .iter_mut()
            .find(|item| item.key == key)
            .ok_or_else(|| StoreError::NotFound(key.to_string()))?;

        item.value = value.to_string();
        Ok(item.clone())
    }

    fn delete(&self, key: &str) -> StoreResult<ConfigItem> {
        let mut items = self.locked()?;
        let idx = items
            .iter()
            .position(|item| item.key == key)
            .ok_or_else(|| StoreError::NotFound(key.to_string()))?;

        Ok(items.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_rejects_duplicate_keys() {
        let store = MemoryStore::new();

        store.add(ConfigItem::new("k", "1")).unwrap();
        let err = store.add(ConfigItem::new("k", "2")).unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
        assert_eq!(store.get("k").unwrap().value, "1");
    }

    #[test]
    fn test_update_replaces_value_in_place() {
        let store = MemoryStore::new();

        store.add(ConfigItem::new("k", "1")).unwrap();
        let updated = store.update("k", "2").unwrap();
        assert_eq!(updated.value, "2");

        // Applying the same update again is stable.
        store.update("k", "2").unwrap();
        assert_eq!(store.get("k").unwrap().value, "2");
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = MemoryStore::new();

        for i in 0..5 {
            store
                .add(ConfigItem::new(format!("key-{}", i), "0"))
                .unwrap();
        }

        let items = store.list("", 1, 10).unwrap();
        let keys: Vec<_> = items.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, vec!["key-0", "key-1", "key-2", "key-3", "key-4"]);
    }

    #[test]
    fn test_list_windows_the_filtered_set() {
        let store = MemoryStore::new();

        for i in 0..7 {
            store
                .add(ConfigItem::new(format!("cfg-{}", i), "0"))
                .unwrap();
        }
        store.add(ConfigItem::new("other", "0")).unwrap();

        let page = store.list("cfg", 2, 3).unwrap();
        let keys: Vec<_> = page.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, vec!["cfg-3", "cfg-4", "cfg-5"]);
    }

    #[test]
    fn test_delete_removes_and_returns_the_item() {
        let store = MemoryStore::new();

        store.add(ConfigItem::new("k", "1")).unwrap();
        let deleted = store.delete("k").unwrap();
        assert_eq!(deleted.value, "1");
        assert!(matches!(store.delete("k"), Err(StoreError::NotFound(_))));
    }
}
