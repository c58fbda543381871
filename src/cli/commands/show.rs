//! Show command implementation.
//!
//! The `liftlog show` command displays the active session: its exercises in
//! order and the sets recorded for each.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::storage::WorkoutStore;
use crate::ui::{format_session_duration, format_set_line, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    store_path: PathBuf,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(store_path: &Path) -> Self {
        Self {
            store_path: store_path.to_path_buf(),
        }
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = WorkoutStore::open(&self.store_path)?;

        let session = match store.active_sessions().first() {
            Some(session) => (*session).clone(),
            None => {
                ui.message("No active session. Start one with `liftlog start`.");
                return Ok(CommandResult::success());
            }
        };

        ui.show_header("Active Session");
        ui.message(&format!(
            "Started at {} ({} so far)",
            session.started_at.format("%H:%M"),
            format_session_duration(session.started_at, None)
        ));

        let workouts = store.workouts(&session.id);
        if workouts.is_empty() {
            ui.message("No exercises yet. Add one with `liftlog add NAME`.");
            return Ok(CommandResult::success());
        }

        for (position, workout) in workouts.iter().enumerate() {
            let sets = store.sets(&workout.id);
            let set_label = if sets.len() == 1 { "set" } else { "sets" };
            ui.message(&format!(
                "{}. {} ({} {})",
                position + 1,
                workout.name,
                sets.len(),
                set_label
            ));

            if ui.output_mode().shows_detail() {
                for (set_position, set) in sets.iter().enumerate() {
                    ui.message(&format!(
                        "   Set {}: {}",
                        set_position + 1,
                        format_set_line(set.reps, set.weight)
                    ));
                }
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, OutputMode};
    use tempfile::TempDir;

    #[test]
    fn show_without_active_session_says_so() {
        let temp = TempDir::new().unwrap();
        let cmd = ShowCommand::new(&temp.path().join("log.json"));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("No active session"));
    }

    #[test]
    fn show_lists_exercises_in_order_with_sets() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("log.json");

        let mut store = WorkoutStore::open(&path).unwrap();
        let session = store.start_session().unwrap();
        let bench = store
            .add_workout(&session.id, "Bench Press")
            .unwrap()
            .unwrap();
        store.add_set(&bench.id, "8", "225").unwrap();
        store.add_workout(&session.id, "Squat").unwrap();

        let cmd = ShowCommand::new(&path);
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.headers(), &["Active Session"]);
        assert!(ui.has_message("1. Bench Press (1 set)"));
        assert!(ui.has_message("Set 1: 8 reps × 225.0 lbs"));
        assert!(ui.has_message("2. Squat (0 sets)"));
    }

    #[test]
    fn show_quiet_omits_set_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("log.json");

        let mut store = WorkoutStore::open(&path).unwrap();
        let session = store.start_session().unwrap();
        let bench = store
            .add_workout(&session.id, "Bench Press")
            .unwrap()
            .unwrap();
        store.add_set(&bench.id, "8", "225").unwrap();

        let cmd = ShowCommand::new(&path);
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("1. Bench Press"));
        assert!(!ui.has_message("Set 1:"));
    }

    #[test]
    fn show_mentions_empty_exercise_list() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("log.json");

        let mut store = WorkoutStore::open(&path).unwrap();
        store.start_session().unwrap();

        let cmd = ShowCommand::new(&path);
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("No exercises yet"));
    }
}
