//! Error types for the Fisheye gallery.
//!
//! This module defines the centralized error type [`FisheyeError`] and a type alias
//! [`Result`] used throughout the crate. Most of these errors never reach the user:
//! the like store, the catalog loader and the theme loader recover from them locally
//! and degrade to an empty or default value.

use crate::domain::media::MediaId;
use thiserror::Error;

/// The main error type for Fisheye operations.
///
/// # Examples
///
/// ```
/// use fisheye::FisheyeError;
///
/// fn read_catalog() -> Result<(), FisheyeError> {
///     Err(FisheyeError::Catalog("missing `media` array".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum FisheyeError {
    /// Reading or writing the key-value store failed.
    ///
    /// The string describes the failing operation (serialization, rename, ...).
    #[error("Storage error: {0}")]
    Storage(String),

    /// The key-value store is not available at all.
    ///
    /// Returned by every operation of
    /// [`UnavailableStore`](crate::storage::UnavailableStore). Callers treat it
    /// as "nothing is persisted".
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog document could not be read or parsed.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or could not be read.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A line of terminal input could not be understood.
    #[error("Unrecognized input: {0}")]
    Input(String),

    /// A media id was requested that is not part of the current view.
    #[error("Media not found: {0}")]
    MediaNotFound(MediaId),
}

/// A specialized `Result` type for Fisheye operations.
pub type Result<T> = std::result::Result<T, FisheyeError>;
