//! Domain entities for workout tracking.
//!
//! This module defines the three entity kinds — [`Session`], [`Workout`],
//! and [`WorkoutSet`] — and the [`EntityId`] identifier that links them.

pub mod entities;
pub mod id;

pub use entities::{Session, Workout, WorkoutSet};
pub use id::EntityId;
