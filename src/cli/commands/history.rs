//! History commands implementation.
//!
//! The `liftlog history` command lists past sessions, most recent first;
//! `liftlog delete-session` removes one along with everything it contains.

use std::path::{Path, PathBuf};

use crate::cli::args::{DeleteSessionArgs, HistoryArgs};
use crate::error::{LiftlogError, Result};
use crate::model::Session;
use crate::storage::WorkoutStore;
use crate::ui::{format_relative_time, format_session_duration, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The history command implementation.
pub struct HistoryCommand {
    store_path: PathBuf,
    args: HistoryArgs,
}

impl HistoryCommand {
    /// Create a new history command.
    pub fn new(store_path: &Path, args: HistoryArgs) -> Self {
        Self {
            store_path: store_path.to_path_buf(),
            args,
        }
    }

    /// Format a single session line.
    fn format_session_line(session: &Session, workout_count: usize) -> String {
        let workout_label = if workout_count == 1 {
            "workout"
        } else {
            "workouts"
        };
        format!(
            "{} ({}) - {} {}, {}",
            format_relative_time(session.started_at),
            session.started_at.format("%Y-%m-%d %H:%M"),
            workout_count,
            workout_label,
            format_session_duration(session.started_at, session.ended_at)
        )
    }
}

impl Command for HistoryCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = WorkoutStore::open(&self.store_path)?;

        let limit = self.args.limit.unwrap_or(10);
        let sessions = store.sessions();

        if sessions.is_empty() {
            ui.message("No sessions recorded yet.");
            return Ok(CommandResult::success());
        }

        ui.show_header("Session History");

        for session in sessions.iter().take(limit) {
            let workouts = store.workouts(&session.id);
            let line = Self::format_session_line(session, workouts.len());
            if session.is_active() {
                ui.warning(&format!("{} (active)", line));
            } else {
                ui.success(&line);
            }

            if self.args.detail {
                for workout in &workouts {
                    let set_count = store.sets(&workout.id).len();
                    let set_label = if set_count == 1 { "set" } else { "sets" };
                    ui.message(&format!(
                        "    {} ({} {})",
                        workout.name, set_count, set_label
                    ));
                }
            }
        }

        Ok(CommandResult::success())
    }
}

/// The delete-session command implementation.
pub struct DeleteSessionCommand {
    store_path: PathBuf,
    args: DeleteSessionArgs,
}

impl DeleteSessionCommand {
    /// Create a new delete-session command.
    pub fn new(store_path: &Path, args: DeleteSessionArgs) -> Self {
        Self {
            store_path: store_path.to_path_buf(),
            args,
        }
    }
}

impl Command for DeleteSessionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = WorkoutStore::open(&self.store_path)?;

        let sessions = store.sessions();
        let count = sessions.len();
        let index = self.args.position.checked_sub(1).filter(|&i| i < count).ok_or(
            LiftlogError::PositionOutOfRange {
                position: self.args.position,
                count,
            },
        )?;
        let session = sessions[index];
        let session_id = session.id.clone();
        let started = session.started_at;

        store.delete_session(&session_id)?;
        ui.success(&format!(
            "Deleted session from {}",
            started.format("%Y-%m-%d %H:%M")
        ));

        Ok(CommandResult::success())
    }
}
