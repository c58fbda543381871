//! Remove command implementation.
//!
//! The `liftlog remove` command deletes one or more exercises from the
//! active session.

use std::path::{Path, PathBuf};

use crate::cli::args::RemoveArgs;
use crate::error::{LiftlogError, Result};
use crate::model::EntityId;
use crate::storage::WorkoutStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The remove command implementation.
pub struct RemoveCommand {
    store_path: PathBuf,
    args: RemoveArgs,
}

impl RemoveCommand {
    /// Create a new remove command.
    pub fn new(store_path: &Path, args: RemoveArgs) -> Self {
        Self {
            store_path: store_path.to_path_buf(),
            args,
        }
    }
}

impl Command for RemoveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = WorkoutStore::open(&self.store_path)?;

        let session_id = match store.active_sessions().first() {
            Some(session) => session.id.clone(),
            None => {
                ui.warning("No active session.");
                return Ok(CommandResult::failure(1));
            }
        };

        let workouts = store.workouts(&session_id);
        let count = workouts.len();
        let mut ids: Vec<EntityId> = Vec::new();
        for &position in &self.args.positions {
            let index = position.checked_sub(1).filter(|&i| i < count).ok_or(
                LiftlogError::PositionOutOfRange { position, count },
            )?;
            ids.push(workouts[index].id.clone());
        }

        store.delete_workouts(&session_id, &ids)?;

        let label = if ids.len() == 1 {
            "exercise"
        } else {
            "exercises"
        };
        ui.success(&format!("Removed {} {}", ids.len(), label));

        Ok(CommandResult::success())
    }
}
