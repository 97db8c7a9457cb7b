//! In-process key-value stores.
//!
//! [`MemoryStore`] keeps entries for the lifetime of the process (ephemeral runs and
//! tests). [`UnavailableStore`] stands in when no storage can be opened at all; every
//! operation fails, and the like state degrades to "nothing is liked".

use crate::domain::error::{FisheyeError, Result};
use crate::storage::backend::KeyValueStore;
use std::collections::HashMap;

/// Key-value store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Key-value store that is never available.
#[derive(Debug, Clone)]
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    /// Creates a store whose operations all fail with `reason`.
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }

    fn error(&self) -> FisheyeError {
        FisheyeError::StorageUnavailable(self.reason.clone())
    }
}

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(self.error())
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(self.error())
    }

    fn remove(&mut self, _key: &str) -> Result<()> {
        Err(self.error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_set_get_remove() {
        let mut store = MemoryStore::default();
        store.set("a", "1").expect("set");
        assert_eq!(store.get("a").expect("get").as_deref(), Some("1"));

        store.remove("a").expect("remove");
        assert_eq!(store.get("a").expect("get"), None);
    }

    #[test]
    fn unavailable_store_fails_every_operation() {
        let mut store = UnavailableStore::new("data directory is read-only");

        assert!(matches!(store.get("a"), Err(FisheyeError::StorageUnavailable(_))));
        assert!(store.set("a", "1").is_err());
        assert!(store.remove("a").is_err());
    }
}
