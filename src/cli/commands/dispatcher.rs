//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for loading config, registering formats and
//!   routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{
    load_config_file, load_merged_config, register_config_formats, ViewPathConfig,
};
use crate::error::Result;
use crate::format::{global_registry, FormatRegistry};
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
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
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_path: None,
        }
    }

    /// Use an explicit config file instead of discovering one.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load the configuration this dispatcher points at.
    pub fn load_config(&self) -> Result<ViewPathConfig> {
        match &self.config_path {
            Some(path) => load_config_file(path),
            None => load_merged_config(&self.project_root),
        }
    }

    /// Load config, register its formats globally, and run the command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.load_config()?;
        self.dispatch_with(&cli.command, &config, global_registry(), ui)
    }

    /// Run a command against an explicit config and registry.
    pub fn dispatch_with(
        &self,
        command: &Commands,
        config: &ViewPathConfig,
        registry: &FormatRegistry,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        register_config_formats(config, registry);

        match command {
            Commands::Resolve(args) => {
                let cmd = super::resolve::ResolveCommand::new(args.clone(), config, registry);
                cmd.execute(ui)
            }
            Commands::Formats(args) => {
                let cmd = super::formats::FormatsCommand::new(args.clone(), registry);
                cmd.execute(ui)
            }
        }
    }
}
