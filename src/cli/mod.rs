//! Command-line interface for viewpath.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, FormatsArgs, ResolveArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
