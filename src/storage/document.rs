//! Persisted store document.
//!
//! The entire store is one JSON document: a version field plus the three
//! entity collections, each kept in creation order. Creation order matters —
//! sorted views use a stable sort on `order`, so vector position is the
//! tie-break when orders collide (which can happen after set deletion).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{LiftlogError, Result};
use crate::model::{Session, Workout, WorkoutSet};

/// Persistent state for a training log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreDocument {
    /// Schema version for migration.
    pub version: u32,

    /// All sessions, in creation order.
    #[serde(default)]
    pub sessions: Vec<Session>,

    /// All workouts across sessions, in creation order.
    #[serde(default)]
    pub workouts: Vec<Workout>,

    /// All sets across workouts, in creation order.
    #[serde(default)]
    pub sets: Vec<WorkoutSet>,
}

impl StoreDocument {
    /// Current schema version.
    pub const CURRENT_VERSION: u32 = 1;

    /// Create an empty document at the current version.
    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            sessions: Vec::new(),
            workouts: Vec::new(),
            sets: Vec::new(),
        }
    }

    /// Load a document from disk.
    ///
    /// A missing file yields a fresh empty document; an unreadable or
    /// unparseable file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)?;
        let doc: Self =
            serde_json::from_str(&content).map_err(|e| LiftlogError::StoreParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(doc)
    }

    /// Save the document to disk using atomic write.
    ///
    /// Uses the write-to-temp-then-rename pattern to prevent corruption
    /// if the process crashes or loses power during the write operation.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(|e| {
            LiftlogError::StoreSerializeError {
                message: e.to_string(),
            }
        })?;

        // Atomic write: write to temp file, then rename
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntityId;
    use chrono::Utc;
    use tempfile::TempDir;

    fn doc_with_one_session() -> StoreDocument {
        let mut doc = StoreDocument::new();
        doc.sessions.push(Session {
            id: EntityId::new(),
            started_at: Utc::now(),
            ended_at: None,
        });
        doc
    }

    #[test]
    fn new_document_is_empty_at_current_version() {
        let doc = StoreDocument::new();
        assert_eq!(doc.version, StoreDocument::CURRENT_VERSION);
        assert!(doc.sessions.is_empty());
        assert!(doc.workouts.is_empty());
        assert!(doc.sets.is_empty());
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("log.json");

        let doc = doc_with_one_session();
        doc.save(&path).unwrap();

        let loaded = StoreDocument::load(&path).unwrap();
        assert_eq!(loaded.sessions.len(), 1);
        assert_eq!(loaded.sessions[0].id, doc.sessions[0].id);
    }

    #[test]
    fn load_nonexistent_returns_new() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.json");

        let doc = StoreDocument::load(&path).unwrap();
        assert!(doc.sessions.is_empty());
        assert_eq!(doc.version, StoreDocument::CURRENT_VERSION);
    }

    #[test]
    fn load_corrupt_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("log.json");
        fs::write(&path, "not json {{{").unwrap();

        let err = StoreDocument::load(&path).unwrap_err();
        assert!(matches!(err, LiftlogError::StoreParseError { .. }));
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("log.json");

        doc_with_one_session().save(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_uses_atomic_write() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("log.json");

        doc_with_one_session().save(&path).unwrap();

        // Verify no temp file remains (it should have been renamed)
        let temp_path = path.with_extension("json.tmp");
        assert!(
            !temp_path.exists(),
            "Temp file should not exist after successful save"
        );

        // Verify actual file exists and is valid
        let loaded = StoreDocument::load(&path).unwrap();
        assert_eq!(loaded.sessions.len(), 1);
    }

    #[test]
    fn document_preserves_creation_order() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("log.json");

        let mut doc = StoreDocument::new();
        let session_id = EntityId::new();
        doc.sessions.push(Session {
            id: session_id.clone(),
            started_at: Utc::now(),
            ended_at: None,
        });
        for (i, name) in ["Bench Press", "Squat", "Deadlift"].iter().enumerate() {
            doc.workouts.push(Workout {
                id: EntityId::new(),
                session_id: session_id.clone(),
                name: name.to_string(),
                order: i as u32,
            });
        }
        doc.save(&path).unwrap();

        let loaded = StoreDocument::load(&path).unwrap();
        let names: Vec<&str> = loaded.workouts.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, ["Bench Press", "Squat", "Deadlift"]);
    }
}
