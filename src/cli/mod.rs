//! Command-line interface for liftlog.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    AddArgs, AddSetArgs, Cli, Commands, CompletionsArgs, DeleteSessionArgs, HistoryArgs,
    RemoveArgs, RemoveSetArgs, ReorderArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
