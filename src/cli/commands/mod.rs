//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands open the store themselves
//! so every invocation works against the freshest on-disk state.

pub mod add;
pub mod completions;
pub mod dispatcher;
pub mod end;
pub mod history;
pub mod remove;
pub mod reorder;
pub mod sets;
pub mod show;
pub mod start;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
