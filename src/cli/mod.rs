//! Command-line interface for packsync.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations and dispatch

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, TargetArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
