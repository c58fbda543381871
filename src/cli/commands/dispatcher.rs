//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    store_path: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given store file.
    pub fn new(store_path: PathBuf) -> Self {
        Self { store_path }
    }

    /// Get the store file path.
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Start) => {
                let cmd = super::start::StartCommand::new(&self.store_path);
                cmd.execute(ui)
            }
            Some(Commands::End) => {
                let cmd = super::end::EndCommand::new(&self.store_path);
                cmd.execute(ui)
            }
            Some(Commands::Add(args)) => {
                let cmd = super::add::AddCommand::new(&self.store_path, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Reorder(args)) => {
                let cmd = super::reorder::ReorderCommand::new(&self.store_path, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Remove(args)) => {
                let cmd = super::remove::RemoveCommand::new(&self.store_path, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::AddSet(args)) => {
                let cmd = super::sets::AddSetCommand::new(&self.store_path, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::RemoveSet(args)) => {
                let cmd = super::sets::RemoveSetCommand::new(&self.store_path, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Show) => {
                let cmd = super::show::ShowCommand::new(&self.store_path);
                cmd.execute(ui)
            }
            Some(Commands::History(args)) => {
                let cmd = super::history::HistoryCommand::new(&self.store_path, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::DeleteSession(args)) => {
                let cmd =
                    super::history::DeleteSessionCommand::new(&self.store_path, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to showing the active session
                let cmd = super::show::ShowCommand::new(&self.store_path);
                cmd.execute(ui)
            }
        }
    }
}
