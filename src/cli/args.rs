//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Liftlog - Workout session tracking from the command line.
#[derive(Debug, Parser)]
#[command(name = "liftlog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the store file (overrides the default location)
    #[arg(short, long, global = true, env = "LIFTLOG_STORE")]
    pub store: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start a new workout session
    Start,

    /// End the active session
    End,

    /// Add an exercise to the active session
    Add(AddArgs),

    /// Move an exercise to a new position
    Reorder(ReorderArgs),

    /// Remove one or more exercises from the active session
    Remove(RemoveArgs),

    /// Add a set to an exercise
    AddSet(AddSetArgs),

    /// Remove a set from an exercise
    RemoveSet(RemoveSetArgs),

    /// Show the active session (default if no command specified)
    Show,

    /// Show past sessions
    History(HistoryArgs),

    /// Delete a session and everything in it
    DeleteSession(DeleteSessionArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AddArgs {
    /// Exercise name (e.g., "Bench Press")
    pub name: String,
}

/// Arguments for the `reorder` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ReorderArgs {
    /// Current position of the exercise, as shown by `show`
    pub from: usize,

    /// Position to move it to
    pub to: usize,
}

/// Arguments for the `remove` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RemoveArgs {
    /// Positions of the exercises to remove, as shown by `show`
    #[arg(required = true)]
    pub positions: Vec<usize>,
}

/// Arguments for the `add-set` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AddSetArgs {
    /// Position of the exercise, as shown by `show`
    pub exercise: usize,

    /// Repetition count
    pub reps: String,

    /// Weight in pounds
    pub weight: String,
}

/// Arguments for the `remove-set` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RemoveSetArgs {
    /// Position of the exercise, as shown by `show`
    pub exercise: usize,

    /// Position of the set within the exercise
    pub set: usize,
}

/// Arguments for the `history` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct HistoryArgs {
    /// Maximum number of sessions to show
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Show the exercises of each session
    #[arg(short, long)]
    pub detail: bool,
}

/// Arguments for the `delete-session` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DeleteSessionArgs {
    /// Position of the session in the history listing
    pub position: usize,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
