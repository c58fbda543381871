//! End command implementation.
//!
//! The `liftlog end` command ends the active workout session.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::storage::WorkoutStore;
use crate::ui::{format_session_duration, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The end command implementation.
pub struct EndCommand {
    store_path: PathBuf,
}

impl EndCommand {
    /// Create a new end command.
    pub fn new(store_path: &Path) -> Self {
        Self {
            store_path: store_path.to_path_buf(),
        }
    }
}

impl Command for EndCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = WorkoutStore::open(&self.store_path)?;

        let session_id = match store.active_sessions().first() {
            Some(session) => session.id.clone(),
            None => {
                ui.warning("No active session.");
                return Ok(CommandResult::failure(1));
            }
        };

        let ended = store.end_session(&session_id)?;
        ui.success(&format!(
            "Session ended after {}",
            format_session_duration(ended.started_at, ended.ended_at)
        ));

        Ok(CommandResult::success())
    }
}
