//! Reorder command implementation.
//!
//! The `liftlog reorder` command moves an exercise to a new position
//! within the active session.

use std::path::{Path, PathBuf};

use crate::cli::args::ReorderArgs;
use crate::error::{LiftlogError, Result};
use crate::storage::WorkoutStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The reorder command implementation.
pub struct ReorderCommand {
    store_path: PathBuf,
    args: ReorderArgs,
}

impl ReorderCommand {
    /// Create a new reorder command.
    pub fn new(store_path: &Path, args: ReorderArgs) -> Self {
        Self {
            store_path: store_path.to_path_buf(),
            args,
        }
    }
}

impl Command for ReorderCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = WorkoutStore::open(&self.store_path)?;

        let session_id = match store.active_sessions().first() {
            Some(session) => session.id.clone(),
            None => {
                ui.warning("No active session.");
                return Ok(CommandResult::failure(1));
            }
        };

        // Positions are displayed 1-based; the store indexes from 0.
        let count = store.workouts(&session_id).len();
        let resolve = |position: usize| {
            position
                .checked_sub(1)
                .filter(|&i| i < count)
                .ok_or(LiftlogError::PositionOutOfRange { position, count })
        };
        let (from, to) = (resolve(self.args.from)?, resolve(self.args.to)?);

        store.move_workout(&session_id, from, to)?;

        let moved = store.workouts(&session_id)[to].name.clone();
        ui.success(&format!("Moved {} to position {}", moved, self.args.to));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn seeded_path(temp: &TempDir) -> PathBuf {
        let path = temp.path().join("log.json");
        let mut store = WorkoutStore::open(&path).unwrap();
        let session = store.start_session().unwrap();
        for name in ["Bench Press", "Squat", "Deadlift"] {
            store.add_workout(&session.id, name).unwrap();
        }
        path
    }

    fn workout_names(path: &Path) -> Vec<String> {
        let store = WorkoutStore::open(path).unwrap();
        let session_id = store.sessions()[0].id.clone();
        store
            .workouts(&session_id)
            .iter()
            .map(|w| w.name.clone())
            .collect()
    }

    #[test]
    fn reorder_moves_exercise() {
        let temp = TempDir::new().unwrap();
        let path = seeded_path(&temp);

        let cmd = ReorderCommand::new(&path, ReorderArgs { from: 1, to: 3 });
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("Moved Bench Press to position 3"));
        assert_eq!(workout_names(&path), ["Squat", "Deadlift", "Bench Press"]);
    }

    #[test]
    fn reorder_rejects_position_zero() {
        let temp = TempDir::new().unwrap();
        let path = seeded_path(&temp);

        let cmd = ReorderCommand::new(&path, ReorderArgs { from: 0, to: 2 });
        let mut ui = MockUI::new();
        let err = cmd.execute(&mut ui).unwrap_err();

        assert!(matches!(err, LiftlogError::PositionOutOfRange { .. }));
    }

    #[test]
    fn reorder_out_of_range_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = seeded_path(&temp);

        let cmd = ReorderCommand::new(&path, ReorderArgs { from: 1, to: 9 });
        let mut ui = MockUI::new();
        let err = cmd.execute(&mut ui).unwrap_err();

        assert!(matches!(err, LiftlogError::PositionOutOfRange { .. }));
    }

    #[test]
    fn reorder_without_active_session_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("log.json");

        let cmd = ReorderCommand::new(&path, ReorderArgs { from: 1, to: 2 });
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
    }
}
