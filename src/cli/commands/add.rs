//! Add command implementation.
//!
//! The `liftlog add` command adds an exercise to the active session.

use std::path::{Path, PathBuf};

use crate::cli::args::AddArgs;
use crate::error::Result;
use crate::storage::WorkoutStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The add command implementation.
pub struct AddCommand {
    store_path: PathBuf,
    args: AddArgs,
}

impl AddCommand {
    /// Create a new add command.
    pub fn new(store_path: &Path, args: AddArgs) -> Self {
        Self {
            store_path: store_path.to_path_buf(),
            args,
        }
    }
}

impl Command for AddCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = WorkoutStore::open(&self.store_path)?;

        let session_id = match store.active_sessions().first() {
            Some(session) => session.id.clone(),
            None => {
                ui.warning("No active session. Start one with `liftlog start`.");
                return Ok(CommandResult::failure(1));
            }
        };

        // A blank name is ignored without comment, like an empty form submit.
        if let Some(workout) = store.add_workout(&session_id, &self.args.name)? {
            let position = store.workouts(&session_id).len();
            ui.success(&format!("Added {} at position {}", workout.name, position));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn path_with_active_session(temp: &TempDir) -> PathBuf {
        let path = temp.path().join("log.json");
        let mut store = WorkoutStore::open(&path).unwrap();
        store.start_session().unwrap();
        path
    }

    #[test]
    fn add_appends_exercise() {
        let temp = TempDir::new().unwrap();
        let path = path_with_active_session(&temp);

        let cmd = AddCommand::new(
            &path,
            AddArgs {
                name: "Bench Press".to_string(),
            },
        );
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("Added Bench Press at position 1"));
    }

    #[test]
    fn add_blank_name_is_silently_ignored() {
        let temp = TempDir::new().unwrap();
        let path = path_with_active_session(&temp);

        let cmd = AddCommand::new(
            &path,
            AddArgs {
                name: "   ".to_string(),
            },
        );
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.successes().is_empty());
        assert!(ui.errors().is_empty());

        let store = WorkoutStore::open(&path).unwrap();
        let session_id = store.active_sessions()[0].id.clone();
        assert!(store.workouts(&session_id).is_empty());
    }

    #[test]
    fn add_without_active_session_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("log.json");

        let cmd = AddCommand::new(
            &path,
            AddArgs {
                name: "Squat".to_string(),
            },
        );
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert!(ui.has_warning("No active session"));
    }
}
