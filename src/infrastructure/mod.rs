//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where fisheye keeps its like store and trace files, and expands
//! user-supplied paths.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, storage_file};
