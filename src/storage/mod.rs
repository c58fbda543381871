//! Persistent storage for the training log.
//!
//! This module provides the [`WorkoutStore`], the single owner of all
//! session, workout, and set records, and the [`StoreDocument`] it
//! persists as one JSON file.

pub mod document;
pub mod fixtures;
pub mod store;

pub use document::StoreDocument;
pub use store::WorkoutStore;

/// Get the default store file path.
pub fn default_store_path() -> std::path::PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("liftlog")
        .join("log.json")
}
