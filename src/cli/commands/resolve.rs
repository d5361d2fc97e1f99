//! Resolve command implementation.
//!
//! The `viewpath resolve` command prints the template path for a logical
//! template reference.

use crate::cli::args::ResolveArgs;
use crate::config::ViewPathConfig;
use crate::context::RequestContext;
use crate::error::Result;
use crate::format::{Format, FormatRegistry};
use crate::resolver::{AmendSuffix, TemplatePathResolver};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Exit code for a format the registry does not accept.
pub const EXIT_NOT_ACCEPTABLE: i32 = 2;

/// The resolve command implementation.
pub struct ResolveCommand<'a> {
    args: ResolveArgs,
    config: &'a ViewPathConfig,
    registry: &'a FormatRegistry,
}

impl<'a> ResolveCommand<'a> {
    /// Create a new resolve command.
    pub fn new(
        args: ResolveArgs,
        config: &'a ViewPathConfig,
        registry: &'a FormatRegistry,
    ) -> Self {
        Self {
            args,
            config,
            registry,
        }
    }

    /// The format to resolve with: `--accept`, then `--content-type`, then
    /// the config default.
    fn accept(&self) -> Format {
        self.args
            .accept
            .clone()
            .or_else(|| {
                self.args
                    .content_type
                    .as_deref()
                    .map(Format::from_content_type)
            })
            .or_else(|| self.config.default_accept.clone())
            .unwrap_or(Format::Unknown)
    }
}

impl Command for ResolveCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !self.args.register.is_empty() {
            self.registry.register(self.args.register.iter().cloned());
        }

        let context = RequestContext::new(self.args.template.as_str()).with_accept(self.accept());
        let resolver = TemplatePathResolver::with_strategy(AmendSuffix::new(self.registry));

        let resolved = match &self.args.method {
            Some(method) => {
                resolver.resolve_with_method_path(&context.with_method_path(method.as_str()))
            }
            None => resolver.resolve(&context),
        };

        match resolved {
            Ok(path) => {
                ui.message(&path);
                Ok(CommandResult::success())
            }
            Err(e) if e.is_not_acceptable() => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(EXIT_NOT_ACCEPTABLE))
            }
            Err(e) => Err(e),
        }
    }
}
