//! Set commands implementation.
//!
//! The `liftlog add-set` and `liftlog remove-set` commands manage the sets
//! of one exercise in the active session.

use std::path::{Path, PathBuf};

use crate::cli::args::{AddSetArgs, RemoveSetArgs};
use crate::error::{LiftlogError, Result};
use crate::model::EntityId;
use crate::storage::WorkoutStore;
use crate::ui::{format_set_line, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Resolve a displayed 1-based exercise position to a workout id.
fn workout_at(store: &WorkoutStore, session_id: &EntityId, position: usize) -> Result<EntityId> {
    let workouts = store.workouts(session_id);
    let count = workouts.len();
    let index = position
        .checked_sub(1)
        .filter(|&i| i < count)
        .ok_or(LiftlogError::PositionOutOfRange { position, count })?;
    Ok(workouts[index].id.clone())
}

/// The add-set command implementation.
pub struct AddSetCommand {
    store_path: PathBuf,
    args: AddSetArgs,
}

impl AddSetCommand {
    /// Create a new add-set command.
    pub fn new(store_path: &Path, args: AddSetArgs) -> Self {
        Self {
            store_path: store_path.to_path_buf(),
            args,
        }
    }
}

impl Command for AddSetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = WorkoutStore::open(&self.store_path)?;

        let session_id = match store.active_sessions().first() {
            Some(session) => session.id.clone(),
            None => {
                ui.warning("No active session.");
                return Ok(CommandResult::failure(1));
            }
        };

        let workout_id = workout_at(&store, &session_id, self.args.exercise)?;

        // Unparseable reps or weight are ignored without comment, like an
        // invalid form submit.
        if let Some(set) = store.add_set(&workout_id, &self.args.reps, &self.args.weight)? {
            ui.success(&format!(
                "Added set: {}",
                format_set_line(set.reps, set.weight)
            ));
        }

        Ok(CommandResult::success())
    }
}

/// The remove-set command implementation.
pub struct RemoveSetCommand {
    store_path: PathBuf,
    args: RemoveSetArgs,
}

impl RemoveSetCommand {
    /// Create a new remove-set command.
    pub fn new(store_path: &Path, args: RemoveSetArgs) -> Self {
        Self {
            store_path: store_path.to_path_buf(),
            args,
        }
    }
}

impl Command for RemoveSetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = WorkoutStore::open(&self.store_path)?;

        let session_id = match store.active_sessions().first() {
            Some(session) => session.id.clone(),
            None => {
                ui.warning("No active session.");
                return Ok(CommandResult::failure(1));
            }
        };

        let workout_id = workout_at(&store, &session_id, self.args.exercise)?;

        let sets = store.sets(&workout_id);
        let count = sets.len();
        let index = self.args.set.checked_sub(1).filter(|&i| i < count).ok_or(
            LiftlogError::PositionOutOfRange {
                position: self.args.set,
                count,
            },
        )?;
        let set_id = sets[index].id.clone();

        store.delete_set(&set_id)?;
        ui.success(&format!("Removed set {}", self.args.set));

        Ok(CommandResult::success())
    }
}
