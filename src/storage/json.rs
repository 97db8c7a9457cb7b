//! JSON file-based key-value store.
//!
//! Entries live in memory and are written back to a single human-readable JSON file
//! on every modification, using an atomic write (write-to-temp + rename) so a crash
//! never leaves a half-written file behind.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "entries": {
//!     "fisheye_liked_media": "[342550,8520927]"
//!   }
//! }
//! ```

use crate::domain::error::{FisheyeError, Result};
use crate::storage::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// On-disk container format.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreData {
    /// Version of the file format for future migrations.
    version: u32,

    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            version: 1,
            entries: BTreeMap::new(),
        }
    }
}

/// JSON file key-value store.
///
/// The whole dataset is kept in memory and persisted after each `set`/`remove`.
/// Designed for a single owner on a single thread.
pub struct JsonFileStore {
    file_path: PathBuf,
    data: StoreData,
    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl JsonFileStore {
    /// Opens the store at `file_path`, creating parent directories as needed.
    ///
    /// A missing file starts an empty store; nothing is written until the first
    /// modification.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but cannot be read
    /// - The file exists but is not a valid store document
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fisheye::storage::JsonFileStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonFileStore::open(PathBuf::from("/tmp/fisheye/storage.json"))?;
    /// # Ok::<(), fisheye::FisheyeError>(())
    /// ```
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening JSON key-value store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty store");
            StoreData::default()
        };

        tracing::debug!(entries = data.entries.len(), "store opened");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StoreData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StoreData = serde_json::from_str(&contents)
            .map_err(|e| FisheyeError::Storage(format!("failed to parse store file: {e}")))?;

        tracing::debug!(version = data.version, entries = data.entries.len(), "loaded store data");
        Ok(data)
    }

    /// Writes the data to a temporary sibling file and renames it over the target.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| FisheyeError::Storage(format!("failed to serialize store: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "store saved");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_store_set", key = %key, len = value.len()).entered();

        if self.data.entries.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }

        self.data.entries.insert(key.to_string(), value.to_string());
        self.dirty = true;
        self.save_to_file()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_store_remove", key = %key).entered();

        if self.data.entries.remove(key).is_none() {
            return Ok(());
        }

        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonFileStore {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty store on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save store on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = JsonFileStore::open(dir.path().join("nested/storage.json")).expect("open store");

        assert_eq!(store.get("anything").expect("get"), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("storage.json");

        {
            let mut store = JsonFileStore::open(path.clone()).expect("open store");
            store.set("fisheye_liked_media", "[1,2]").expect("set");
        }

        let store = JsonFileStore::open(path).expect("reopen store");
        assert_eq!(store.get("fisheye_liked_media").expect("get").as_deref(), Some("[1,2]"));
    }

    #[test]
    fn remove_deletes_key_on_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("storage.json");

        let mut store = JsonFileStore::open(path.clone()).expect("open store");
        store.set("k", "v").expect("set");
        store.remove("k").expect("remove");
        store.remove("never-set").expect("remove missing key");
        drop(store);

        let store = JsonFileStore::open(path).expect("reopen store");
        assert_eq!(store.get("k").expect("get"), None);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{ definitely not json").expect("write file");

        assert!(matches!(JsonFileStore::open(path), Err(FisheyeError::Storage(_))));
    }

    #[test]
    fn no_temporary_file_is_left_behind() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("storage.json");

        let mut store = JsonFileStore::open(path.clone()).expect("open store");
        store.set("k", "v").expect("set");

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }
}
