//! Suffix amendment and the pluggable resolution strategy.

use crate::context::TemplateContext;
use crate::error::{Result, ViewPathError};
use crate::format::{global_registry, Format, FormatRegistry};

/// The last step of template path resolution.
///
/// [`TemplatePathResolver`](super::TemplatePathResolver) hands every path it
/// builds to a strategy. The default is [`AmendSuffix`]; plain closures work
/// too:
///
/// ```
/// use viewpath::context::{RequestContext, TemplateContext};
/// use viewpath::format::global_registry;
/// use viewpath::resolver::{amend_suffix, TemplatePathResolver};
///
/// let resolver = TemplatePathResolver::with_strategy(|path: &str, ctx: &dyn TemplateContext| {
///     amend_suffix(&format!("views/{path}"), ctx, global_registry())
/// });
/// let ctx = RequestContext::new("home");
/// assert_eq!(resolver.resolve(&ctx).unwrap(), "views/home.html");
/// ```
pub trait ResolveStrategy {
    /// Turn a built path into the final template path.
    fn resolve_path(&self, path: &str, context: &dyn TemplateContext) -> Result<String>;
}

impl<F> ResolveStrategy for F
where
    F: Fn(&str, &dyn TemplateContext) -> Result<String>,
{
    fn resolve_path(&self, path: &str, context: &dyn TemplateContext) -> Result<String> {
        self(path, context)
    }
}

/// Default strategy: [`amend_suffix`] against a given registry.
#[derive(Debug, Clone, Copy)]
pub struct AmendSuffix<'r> {
    registry: &'r FormatRegistry,
}

impl<'r> AmendSuffix<'r> {
    /// Amend against a specific registry.
    pub fn new(registry: &'r FormatRegistry) -> Self {
        Self { registry }
    }
}

impl AmendSuffix<'static> {
    /// Amend against the process-wide registry.
    pub fn global() -> Self {
        Self::new(global_registry())
    }
}

impl Default for AmendSuffix<'static> {
    fn default() -> Self {
        Self::global()
    }
}

impl ResolveStrategy for AmendSuffix<'_> {
    fn resolve_path(&self, path: &str, context: &dyn TemplateContext) -> Result<String> {
        amend_suffix(path, context, self.registry)
    }
}

/// Append a suffix derived from the negotiated format.
///
/// A path containing `.` anywhere is taken to carry its suffix already and is
/// returned unchanged. Otherwise the context's format is appended, with
/// [`Format::Unknown`] read as [`Format::Html`].
///
/// # Errors
///
/// [`ViewPathError::UnsupportedFormat`] when the format is neither built in
/// nor registered.
pub fn amend_suffix(
    path: &str,
    context: &dyn TemplateContext,
    registry: &FormatRegistry,
) -> Result<String> {
    // NOTE: a dot in a directory name also counts as a suffix
    if path.contains('.') {
        return Ok(path.to_string());
    }

    let format = match context.accept() {
        Format::Unknown => Format::Html,
        format => format,
    };

    if !registry.is_supported(&format) {
        tracing::debug!("Template format not supported: {} (path: {})", format, path);
        return Err(ViewPathError::UnsupportedFormat { format });
    }

    Ok(format!("{}.{}", path, format))
}
