//! Start command implementation.
//!
//! The `liftlog start` command begins a new workout session.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::storage::WorkoutStore;
use crate::ui::{format_relative_time, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The start command implementation.
pub struct StartCommand {
    store_path: PathBuf,
}

impl StartCommand {
    /// Create a new start command.
    pub fn new(store_path: &Path) -> Self {
        Self {
            store_path: store_path.to_path_buf(),
        }
    }
}

impl Command for StartCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = WorkoutStore::open(&self.store_path)?;

        // One session at a time: an already-active session wins, matching
        // the read-side query pattern the app surface relies on.
        if let Some(active) = store.active_sessions().first() {
            ui.warning(&format!(
                "A session is already active (started {})",
                format_relative_time(active.started_at)
            ));
            return Ok(CommandResult::success());
        }

        let session = store.start_session()?;
        ui.success(&format!(
            "Started a new session at {}",
            session.started_at.format("%H:%M")
        ));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn start_creates_a_session() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("log.json");
        let cmd = StartCommand::new(&path);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("Started a new session"));

        let store = WorkoutStore::open(&path).unwrap();
        assert_eq!(store.active_sessions().len(), 1);
    }

    #[test]
    fn start_with_active_session_does_not_create_another() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("log.json");
        let cmd = StartCommand::new(&path);

        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();
        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_warning("already active"));

        let store = WorkoutStore::open(&path).unwrap();
        assert_eq!(store.sessions().len(), 1);
    }
}
