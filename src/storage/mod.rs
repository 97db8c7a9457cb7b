//! Storage layer for the local viewer's state.
//!
//! The gallery persists exactly one thing: the set of media the local viewer has
//! liked. It lives in a key-value store shaped like browser local storage.
//!
//! # Modules
//!
//! - `backend`: the [`KeyValueStore`] trait
//! - `json`: JSON file-backed store with atomic writes
//! - `memory`: in-process and always-unavailable stores
//! - `likes`: the [`LikeStateStore`] built on top of any store

pub mod backend;
pub mod json;
pub mod likes;
pub mod memory;

pub use backend::KeyValueStore;
pub use json::JsonFileStore;
pub use likes::{LikeStateStore, LIKED_MEDIA_KEY};
pub use memory::{MemoryStore, UnavailableStore};
