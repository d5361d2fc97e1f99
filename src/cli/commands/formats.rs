//! Formats command implementation.
//!
//! `viewpath formats` lists supported template formats;
//! `viewpath formats --check <FORMAT>` tests a single one.

use serde::Serialize;

use crate::cli::args::FormatsArgs;
use crate::error::Result;
use crate::format::{Format, FormatRegistry};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The formats command implementation.
pub struct FormatsCommand<'a> {
    args: FormatsArgs,
    registry: &'a FormatRegistry,
}

/// One row of `viewpath formats` output.
#[derive(Debug, Serialize)]
struct FormatEntry<'f> {
    name: &'f str,
    content_type: Option<&'static str>,
    builtin: bool,
}

impl<'f> From<&'f Format> for FormatEntry<'f> {
    fn from(format: &'f Format) -> Self {
        Self {
            name: format.name(),
            content_type: format.content_type(),
            builtin: format.is_default(),
        }
    }
}

impl<'a> FormatsCommand<'a> {
    /// Create a new formats command.
    pub fn new(args: FormatsArgs, registry: &'a FormatRegistry) -> Self {
        Self { args, registry }
    }

    fn check(&self, format: &Format, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let supported = self.registry.is_supported(format);

        if self.args.json {
            let value = serde_json::json!({ "format": format, "supported": supported });
            ui.message(&value.to_string());
        } else if supported {
            ui.success(&format!("Format '{}' is supported", format));
        } else {
            ui.error(&format!("Format '{}' is not supported", format));
        }

        Ok(if supported {
            CommandResult::success()
        } else {
            CommandResult::failure(1)
        })
    }

    fn list(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let formats = self.registry.supported();
        let entries: Vec<FormatEntry<'_>> = formats.iter().map(FormatEntry::from).collect();

        if self.args.json {
            let json = serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        for entry in &entries {
            let origin = if entry.builtin { "built-in" } else { "registered" };
            ui.message(&format!(
                "{:<10} {:<28} {}",
                entry.name,
                entry.content_type.unwrap_or("-"),
                origin
            ));
        }
        Ok(CommandResult::success())
    }
}

impl Command for FormatsCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.args.check {
            Some(format) => self.check(format, ui),
            None => self.list(ui),
        }
    }
}
