//! Key-value store abstraction.
//!
//! This module defines the [`KeyValueStore`] trait, the local key-value collaborator
//! the like state is persisted in. It mirrors the shape of browser local storage:
//! string values under string keys, read and written synchronously.
//!
//! # Design
//!
//! The trait only covers what the gallery needs. Every method returns a `Result` so
//! an unavailable backend is observable; callers such as
//! [`LikeStateStore`](crate::storage::LikeStateStore) decide how to degrade.

use crate::domain::error::Result;

/// Synchronous string key-value store.
///
/// # Implementations
///
/// - [`JsonFileStore`](crate::storage::JsonFileStore): JSON file with atomic writes (default)
/// - [`MemoryStore`](crate::storage::MemoryStore): in-process map
/// - [`UnavailableStore`](crate::storage::UnavailableStore): always fails
///
/// # Examples
///
/// ```
/// use fisheye::storage::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::default();
/// store.set("greeting", "hello")?;
/// assert_eq!(store.get("greeting")?.as_deref(), Some("hello"));
/// # Ok::<(), fisheye::FisheyeError>(())
/// ```
pub trait KeyValueStore: Send {
    /// Returns the value stored under `key`, or `Ok(None)` if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// The write is persisted before the call returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<()>;
}
