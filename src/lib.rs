//! Liftlog - workout session tracking from the command line.
//!
//! Liftlog records workout sessions in a local JSON store: each session
//! holds an ordered list of exercises, each exercise an ordered list of
//! weighted sets. The store is the single writer over its file; the CLI
//! reads back sorted views for display.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`model`] - Domain entities and identifiers
//! - [`storage`] - The persistent workout store
//! - [`ui`] - Terminal output and display formatting
//!
//! # Example
//!
//! ```
//! use liftlog::storage::WorkoutStore;
//!
//! let mut store = WorkoutStore::in_memory();
//! let session = store.start_session().unwrap();
//! let workout = store.add_workout(&session.id, "Bench Press").unwrap().unwrap();
//! store.add_set(&workout.id, "8", "225").unwrap();
//!
//! assert_eq!(store.workouts(&session.id).len(), 1);
//! ```

pub mod cli;
pub mod error;
pub mod model;
pub mod storage;
pub mod ui;

pub use error::{LiftlogError, Result};
