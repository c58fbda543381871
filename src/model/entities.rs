//! Entity records for sessions, workouts, and sets.
//!
//! The three kinds form a strict tree: a [`Session`] owns its [`Workout`]s,
//! each [`Workout`] owns its [`WorkoutSet`]s. Children point at their parent
//! by id; nothing is shared across parents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::EntityId;

/// One workout occasion, bounded by a start and (eventually) end timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier.
    pub id: EntityId,

    /// When the session began. Set at creation, never changed.
    pub started_at: DateTime<Utc>,

    /// When the session ended. Absent while the session is active.
    pub ended_at: Option<DateTime<Utc>>,
}

/// One exercise performed during a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    /// Unique workout identifier.
    pub id: EntityId,

    /// Owning session. Set at creation, never reassigned.
    pub session_id: EntityId,

    /// Display name, stored as entered.
    pub name: String,

    /// Zero-based position among siblings in the same session.
    pub order: u32,
}

/// One completed repetition block of a workout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSet {
    /// Unique set identifier.
    pub id: EntityId,

    /// Owning workout. Set at creation, never reassigned.
    pub workout_id: EntityId,

    /// Repetition count.
    pub reps: i32,

    /// Weight in pounds.
    pub weight: f64,

    /// Zero-based position among siblings in the same workout.
    pub order: u32,
}

impl Session {
    /// Whether the session has not been ended yet.
    pub fn is_active(&self) -> bool {
        self.ended_at.is_none()
    }

    /// Elapsed time from start to end, or to now for an active session.
    pub fn duration(&self) -> Duration {
        let end = self.ended_at.unwrap_or_else(Utc::now);
        let diff = end.signed_duration_since(self.started_at);
        Duration::from_millis(diff.num_milliseconds().max(0) as u64)
    }
}
