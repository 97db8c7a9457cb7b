//! Domain layer for the Fisheye gallery.
//!
//! Core types of the catalog, independent of storage, rendering and terminal
//! concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`media`]: Media model (photos and videos)
//! - [`photographer`]: Photographer model
//! - [`catalog`]: Static catalog document parsing and loading
//! - [`sort`]: Gallery sort orders
//!
//! # Examples
//!
//! ```
//! use fisheye::domain::{Catalog, SortOrder};
//!
//! let catalog = Catalog::from_json(r#"{ "photographers": [], "media": [] }"#)?;
//! let sorted = SortOrder::Date.apply(catalog.media());
//! assert!(sorted.is_empty());
//! # Ok::<(), fisheye::FisheyeError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod media;
pub mod photographer;
pub mod sort;

pub use catalog::Catalog;
pub use error::{FisheyeError, Result};
pub use media::{Media, MediaId, MediaKind};
pub use photographer::Photographer;
pub use sort::SortOrder;
