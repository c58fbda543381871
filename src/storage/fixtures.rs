//! Deterministic sample data.
//!
//! Seeds an in-memory store with one active session for demos and tests:
//! a bench session started an hour ago with two exercises and three sets.

use chrono::{Duration, Utc};

use super::WorkoutStore;

impl WorkoutStore {
    /// An in-memory store seeded with sample data.
    ///
    /// The seed is one active session started an hour ago containing
    /// "Bench Press" (225×8, 225×6) and "Incline Dumbbell Press" (80×10).
    pub fn with_sample_data() -> Self {
        let mut store = Self::in_memory();

        // The in-memory store never persists, so these cannot fail.
        let session = store
            .start_session_at(Utc::now() - Duration::hours(1))
            .expect("in-memory seed");

        let bench = store
            .add_workout(&session.id, "Bench Press")
            .expect("in-memory seed")
            .expect("non-empty name");
        store.add_set(&bench.id, "8", "225").expect("in-memory seed");
        store.add_set(&bench.id, "6", "225").expect("in-memory seed");

        let incline = store
            .add_workout(&session.id, "Incline Dumbbell Press")
            .expect("in-memory seed")
            .expect("non-empty name");
        store.add_set(&incline.id, "10", "80").expect("in-memory seed");

        store
    }
}
