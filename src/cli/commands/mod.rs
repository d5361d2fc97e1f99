//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`], which also performs bootstrap format registration.

pub mod dispatcher;
pub mod formats;
pub mod resolve;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
