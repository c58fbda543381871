//! The workout store.
//!
//! [`WorkoutStore`] is the single owner of the persisted training log. All
//! mutations go through it; callers read back sorted views for display.
//!
//! Ordering protocol: sibling workouts in a session and sibling sets in a
//! workout each carry a zero-based `order` field. Appends assign
//! `order = current sibling count`. Reorders rewrite every sibling's order
//! from its position in the resulting sequence. Workout deletion compacts
//! surviving siblings back to `0..count-1`; set deletion does not, so set
//! orders may keep gaps. Sorted views break order ties by creation order.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use super::StoreDocument;
use crate::error::{LiftlogError, Result};
use crate::model::{EntityId, Session, Workout, WorkoutSet};

/// Persistence-backed store for sessions, workouts, and sets.
#[derive(Debug)]
pub struct WorkoutStore {
    doc: StoreDocument,
    /// Backing file. `None` means in-memory only (no durable writes).
    path: Option<PathBuf>,
}

impl WorkoutStore {
    /// Open a file-backed store, creating an empty one if the file is missing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let doc = StoreDocument::load(&path)?;
        Ok(Self {
            doc,
            path: Some(path),
        })
    }

    /// Create an in-memory store for tests and previews. Nothing is written
    /// to disk.
    pub fn in_memory() -> Self {
        Self {
            doc: StoreDocument::new(),
            path: None,
        }
    }

    /// Get the backing file path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Stage-then-commit: persist the mutated document, restoring the
    /// pre-mutation snapshot if the write fails so memory and disk never
    /// diverge.
    fn commit(&mut self, before: StoreDocument) -> Result<()> {
        if let Some(path) = &self.path {
            if let Err(e) = self.doc.save(path) {
                self.doc = before;
                return Err(e);
            }
        }
        Ok(())
    }

    // --- Sessions ---

    /// Start a new session now.
    pub fn start_session(&mut self) -> Result<Session> {
        self.start_session_at(Utc::now())
    }

    /// Start a new session with an explicit start timestamp.
    pub fn start_session_at(&mut self, started_at: DateTime<Utc>) -> Result<Session> {
        let before = self.doc.clone();

        let session = Session {
            id: EntityId::new(),
            started_at,
            ended_at: None,
        };
        self.doc.sessions.push(session.clone());

        self.commit(before)?;
        Ok(session)
    }

    /// End a session, stamping its end timestamp with the current time.
    ///
    /// Ending an already-ended session overwrites the end timestamp.
    pub fn end_session(&mut self, id: &EntityId) -> Result<Session> {
        let before = self.doc.clone();

        let session = self
            .doc
            .sessions
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or_else(|| LiftlogError::SessionNotFound { id: id.clone() })?;
        session.ended_at = Some(Utc::now());
        let ended = session.clone();

        self.commit(before)?;
        Ok(ended)
    }

    /// Delete a session and, by cascade, all of its workouts and their sets.
    pub fn delete_session(&mut self, id: &EntityId) -> Result<()> {
        if !self.doc.sessions.iter().any(|s| &s.id == id) {
            return Err(LiftlogError::SessionNotFound { id: id.clone() });
        }
        let before = self.doc.clone();

        let workout_ids: Vec<EntityId> = self
            .doc
            .workouts
            .iter()
            .filter(|w| &w.session_id == id)
            .map(|w| w.id.clone())
            .collect();
        self.doc.sets.retain(|s| !workout_ids.contains(&s.workout_id));
        self.doc.workouts.retain(|w| &w.session_id != id);
        self.doc.sessions.retain(|s| &s.id != id);

        self.commit(before)
    }

    /// Look up a session by id.
    pub fn session(&self, id: &EntityId) -> Option<&Session> {
        self.doc.sessions.iter().find(|s| &s.id == id)
    }

    /// All sessions, most recently started first.
    pub fn sessions(&self) -> Vec<&Session> {
        let mut sessions: Vec<&Session> = self.doc.sessions.iter().collect();
        sessions.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        sessions
    }

    /// Sessions with no end timestamp, most recently started first.
    pub fn active_sessions(&self) -> Vec<&Session> {
        let mut sessions: Vec<&Session> = self
            .doc
            .sessions
            .iter()
            .filter(|s| s.is_active())
            .collect();
        sessions.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        sessions
    }

    // --- Workouts ---

    /// Add a workout to a session, appended at the end of the order.
    ///
    /// A name that is empty after trimming is rejected silently: the call
    /// succeeds, returns `None`, and changes nothing. The name is stored as
    /// given.
    pub fn add_workout(&mut self, session_id: &EntityId, name: &str) -> Result<Option<Workout>> {
        if self.session(session_id).is_none() {
            return Err(LiftlogError::SessionNotFound {
                id: session_id.clone(),
            });
        }
        if name.trim().is_empty() {
            debug!("ignoring workout with empty name");
            return Ok(None);
        }
        let before = self.doc.clone();

        let order = self.sibling_workout_indices(session_id).len() as u32;
        let workout = Workout {
            id: EntityId::new(),
            session_id: session_id.clone(),
            name: name.to_string(),
            order,
        };
        self.doc.workouts.push(workout.clone());

        self.commit(before)?;
        Ok(Some(workout))
    }

    /// Move a workout within its session's sorted view.
    ///
    /// `from` and `to` index the sorted-by-order sequence; the element is
    /// removed at `from` and reinserted so it ends up at position `to`, then
    /// every sibling's order is rewritten from its resulting position.
    pub fn move_workout(&mut self, session_id: &EntityId, from: usize, to: usize) -> Result<()> {
        if self.session(session_id).is_none() {
            return Err(LiftlogError::SessionNotFound {
                id: session_id.clone(),
            });
        }
        let mut indices = self.sibling_workout_indices(session_id);
        let count = indices.len();
        if from >= count {
            return Err(LiftlogError::PositionOutOfRange {
                position: from,
                count,
            });
        }
        if to >= count {
            return Err(LiftlogError::PositionOutOfRange {
                position: to,
                count,
            });
        }
        let before = self.doc.clone();

        let moved = indices.remove(from);
        indices.insert(to, moved);
        for (position, &idx) in indices.iter().enumerate() {
            self.doc.workouts[idx].order = position as u32;
        }

        self.commit(before)
    }

    /// Delete a workout and, by cascade, its sets. Surviving siblings are
    /// compacted back to dense zero-based order.
    pub fn delete_workout(&mut self, id: &EntityId) -> Result<()> {
        let session_id = self
            .workout(id)
            .map(|w| w.session_id.clone())
            .ok_or_else(|| LiftlogError::WorkoutNotFound { id: id.clone() })?;
        self.delete_workouts(&session_id, std::slice::from_ref(id))
    }

    /// Delete several workouts from one session in a single operation.
    ///
    /// Sets cascade with their workouts, and the survivors are compacted
    /// once, after all removals.
    pub fn delete_workouts(&mut self, session_id: &EntityId, ids: &[EntityId]) -> Result<()> {
        if self.session(session_id).is_none() {
            return Err(LiftlogError::SessionNotFound {
                id: session_id.clone(),
            });
        }
        for id in ids {
            let belongs = self
                .workout(id)
                .map(|w| &w.session_id == session_id)
                .unwrap_or(false);
            if !belongs {
                return Err(LiftlogError::WorkoutNotFound { id: id.clone() });
            }
        }
        let before = self.doc.clone();

        self.doc.sets.retain(|s| !ids.contains(&s.workout_id));
        self.doc.workouts.retain(|w| !ids.contains(&w.id));
        for (position, idx) in self.sibling_workout_indices(session_id).into_iter().enumerate() {
            self.doc.workouts[idx].order = position as u32;
        }

        self.commit(before)
    }

    /// Look up a workout by id.
    pub fn workout(&self, id: &EntityId) -> Option<&Workout> {
        self.doc.workouts.iter().find(|w| &w.id == id)
    }

    /// Workouts of a session, ascending by order, creation order as tie-break.
    pub fn workouts(&self, session_id: &EntityId) -> Vec<&Workout> {
        let mut workouts: Vec<&Workout> = self
            .doc
            .workouts
            .iter()
            .filter(|w| &w.session_id == session_id)
            .collect();
        workouts.sort_by_key(|w| w.order);
        workouts
    }

    /// Indices into the workout vector for one session, sorted the same way
    /// as [`Self::workouts`]. Mutations work on indices so they can rewrite
    /// order fields in place.
    fn sibling_workout_indices(&self, session_id: &EntityId) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .doc
            .workouts
            .iter()
            .enumerate()
            .filter(|(_, w)| &w.session_id == session_id)
            .map(|(i, _)| i)
            .collect();
        indices.sort_by_key(|&i| self.doc.workouts[i].order);
        indices
    }

    // --- Sets ---

    /// Add a set to a workout, appended at the end of the order.
    ///
    /// Reps and weight arrive as text, as typed. Empty input or a failed
    /// parse is rejected silently: the call succeeds, returns `None`, and
    /// changes nothing.
    pub fn add_set(
        &mut self,
        workout_id: &EntityId,
        reps: &str,
        weight: &str,
    ) -> Result<Option<WorkoutSet>> {
        if self.workout(workout_id).is_none() {
            return Err(LiftlogError::WorkoutNotFound {
                id: workout_id.clone(),
            });
        }
        if reps.is_empty() || weight.is_empty() {
            debug!("ignoring set with empty reps or weight");
            return Ok(None);
        }
        let (reps, weight) = match (reps.parse::<i32>(), weight.parse::<f64>()) {
            (Ok(r), Ok(w)) => (r, w),
            _ => {
                debug!("ignoring set with unparseable reps or weight");
                return Ok(None);
            }
        };
        let before = self.doc.clone();

        let order = self.sets(workout_id).len() as u32;
        let set = WorkoutSet {
            id: EntityId::new(),
            workout_id: workout_id.clone(),
            reps,
            weight,
            order,
        };
        self.doc.sets.push(set.clone());

        self.commit(before)?;
        Ok(Some(set))
    }

    /// Delete a set. Sibling orders are left as they are, so a gap remains
    /// where the deleted set was.
    pub fn delete_set(&mut self, id: &EntityId) -> Result<()> {
        if !self.doc.sets.iter().any(|s| &s.id == id) {
            return Err(LiftlogError::SetNotFound { id: id.clone() });
        }
        let before = self.doc.clone();

        self.doc.sets.retain(|s| &s.id != id);

        self.commit(before)
    }

    /// Sets of a workout, ascending by order, creation order as tie-break.
    pub fn sets(&self, workout_id: &EntityId) -> Vec<&WorkoutSet> {
        let mut sets: Vec<&WorkoutSet> = self
            .doc
            .sets
            .iter()
            .filter(|s| &s.workout_id == workout_id)
            .collect();
        sets.sort_by_key(|s| s.order);
        sets
    }
}
