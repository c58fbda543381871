//! Error types for liftlog operations.
//!
//! This module defines [`LiftlogError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `LiftlogError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `LiftlogError::Other`) for unexpected errors
//! - Validation rejections (empty names, unparseable numbers) are NOT errors;
//!   the store treats them as silent no-ops

use std::path::PathBuf;
use thiserror::Error;

use crate::model::EntityId;

/// Core error type for liftlog operations.
#[derive(Debug, Error)]
pub enum LiftlogError {
    /// Store file exists but could not be parsed.
    #[error("Failed to parse store at {path}: {message}")]
    StoreParseError { path: PathBuf, message: String },

    /// Store state could not be serialized for writing.
    #[error("Failed to serialize store: {message}")]
    StoreSerializeError { message: String },

    /// No session with the given id exists in the store.
    #[error("Session not found: {id}")]
    SessionNotFound { id: EntityId },

    /// No workout with the given id exists in the store.
    #[error("Workout not found: {id}")]
    WorkoutNotFound { id: EntityId },

    /// No set with the given id exists in the store.
    #[error("Set not found: {id}")]
    SetNotFound { id: EntityId },

    /// An index into a sorted sibling view was out of range.
    #[error("Position {position} is out of range (have {count})")]
    PositionOutOfRange { position: usize, count: usize },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for liftlog operations.
pub type Result<T> = std::result::Result<T, LiftlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_parse_error_displays_path_and_message() {
        let err = LiftlogError::StoreParseError {
            path: PathBuf::from("/data/log.json"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/log.json"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn store_serialize_error_displays_message() {
        let err = LiftlogError::StoreSerializeError {
            message: "bad document".into(),
        };
        assert!(err.to_string().contains("bad document"));
    }

    #[test]
    fn session_not_found_displays_id() {
        let id = EntityId::new();
        let text = id.to_string();
        let err = LiftlogError::SessionNotFound { id };
        assert!(err.to_string().contains(&text));
    }

    #[test]
    fn workout_not_found_displays_id() {
        let id = EntityId::new();
        let text = id.to_string();
        let err = LiftlogError::WorkoutNotFound { id };
        assert!(err.to_string().contains(&text));
    }

    #[test]
    fn position_out_of_range_displays_both_numbers() {
        let err = LiftlogError::PositionOutOfRange {
            position: 5,
            count: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("5"));
        assert!(msg.contains("3"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: LiftlogError = io_err.into();
        assert!(matches!(err, LiftlogError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(LiftlogError::PositionOutOfRange {
                position: 1,
                count: 0,
            })
        }
        assert!(returns_error().is_err());
    }
}
