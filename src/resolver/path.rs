//! Template path resolution.
//!
//! Two entry points share a final [`ResolveStrategy`] step:
//!
//! - [`TemplatePathResolver::resolve`] uses the context's template path as is.
//! - [`TemplatePathResolver::resolve_with_method_path`] first places a relative
//!   template path under the package of the handling action, so an action
//!   `app.users.UserController.show` rendering `show` resolves to
//!   `app/users/UserController/show.html`.

use crate::context::TemplateContext;
use crate::error::Result;

use super::suffix::{AmendSuffix, ResolveStrategy};

/// Resolves logical template references into template file paths.
#[derive(Debug, Clone)]
pub struct TemplatePathResolver<S = AmendSuffix<'static>> {
    strategy: S,
}

impl TemplatePathResolver {
    /// A resolver that amends suffixes against the process-wide registry.
    pub fn new() -> Self {
        Self {
            strategy: AmendSuffix::global(),
        }
    }
}

impl Default for TemplatePathResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ResolveStrategy> TemplatePathResolver<S> {
    /// A resolver with a custom final step.
    pub fn with_strategy(strategy: S) -> Self {
        Self { strategy }
    }

    /// Resolve the context's template path without method path handling.
    pub fn resolve(&self, context: &dyn TemplateContext) -> Result<String> {
        let path = context.template_path();
        tracing::debug!("Resolving template path: {}", path);
        self.strategy.resolve_path(path, context)
    }

    /// Resolve the template path relative to the handling action.
    ///
    /// One trailing segment of the method path is stripped per `.`-delimited
    /// segment of the template path, the remainder becomes the prefix, and
    /// every `.` in the combined path turns into `/`.
    ///
    /// # Example
    ///
    /// ```
    /// use viewpath::context::RequestContext;
    /// use viewpath::format::Format;
    /// use viewpath::resolver::TemplatePathResolver;
    ///
    /// let resolver = TemplatePathResolver::new();
    /// let ctx = RequestContext::new("page")
    ///     .with_method_path("a.b.C.action")
    ///     .with_accept(Format::Html);
    /// assert_eq!(resolver.resolve_with_method_path(&ctx).unwrap(), "a/b/C/page.html");
    /// ```
    pub fn resolve_with_method_path(&self, context: &dyn TemplateContext) -> Result<String> {
        let template_path = context.template_path();
        let prefix = method_prefix(context.method_path(), segment_count(template_path));

        let mut path = String::with_capacity(prefix.len() + template_path.len() + 1);
        path.push_str(prefix);
        if !prefix.is_empty() && !template_path.starts_with('/') {
            path.push('/');
        }
        path.push_str(template_path);
        let path = path.replace('.', "/");

        tracing::debug!(
            "Resolving template path {} for {} as {}",
            template_path,
            context.method_path(),
            path
        );
        self.strategy.resolve_path(&path, context)
    }
}

/// Number of `.`-delimited segments, not counting trailing empty ones.
///
/// An empty path still counts as one segment; a path of only dots has none.
fn segment_count(path: &str) -> usize {
    if path.is_empty() {
        return 1;
    }
    let trimmed = path.trim_end_matches('.');
    if trimmed.is_empty() {
        return 0;
    }
    trimmed.split('.').count()
}

/// Strip `levels` trailing segments from the method path.
///
/// Running out of segments yields the empty string. A blank method path
/// gives an empty prefix.
fn method_prefix(method_path: &str, levels: usize) -> &str {
    if method_path.trim().is_empty() {
        return "";
    }
    let mut prefix = method_path;
    for _ in 0..levels {
        prefix = match prefix.rfind('.') {
            Some(idx) => &prefix[..idx],
            None => "",
        };
    }
    tracing::trace!("Method path {} stripped {} levels to {}", method_path, levels, prefix);
    prefix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RequestContext;
    use crate::error::ViewPathError;
    use crate::format::{Format, FormatRegistry};
    use crate::resolver::amend_suffix;

    fn ctx(template: &str, method: &str, accept: Format) -> RequestContext {
        RequestContext::new(template)
            .with_method_path(method)
            .with_accept(accept)
    }

    #[test]
    fn segment_count_cases() {
        assert_eq!(segment_count(""), 1);
        assert_eq!(segment_count("page"), 1);
        assert_eq!(segment_count("user.show"), 2);
        assert_eq!(segment_count("/x/y"), 1);
        assert_eq!(segment_count("a.b."), 2);
        assert_eq!(segment_count("."), 0);
        assert_eq!(segment_count(".a"), 2);
    }

    #[test]
    fn method_prefix_strips_levels() {
        assert_eq!(method_prefix("a.b.C.action", 1), "a.b.C");
        assert_eq!(method_prefix("a.b.C.action", 2), "a.b");
        assert_eq!(method_prefix("a.b.C.action", 0), "a.b.C.action");
    }

    #[test]
    fn method_prefix_runs_out_to_empty() {
        assert_eq!(method_prefix("C.action", 2), "");
        assert_eq!(method_prefix("C.action", 5), "");
        assert_eq!(method_prefix("action", 1), "");
    }

    #[test]
    fn method_prefix_blank_is_empty() {
        assert_eq!(method_prefix("", 3), "");
        assert_eq!(method_prefix("   ", 1), "");
    }

    #[test]
    fn resolve_uses_template_path_verbatim() {
        let registry = FormatRegistry::new();
        let resolver = TemplatePathResolver::with_strategy(AmendSuffix::new(&registry));
        let context = ctx("user.show", "a.b.C.action", Format::Json);
        // the dot means a suffix is already present
        assert_eq!(resolver.resolve(&context).unwrap(), "user.show");

        let context = ctx("user/show", "a.b.C.action", Format::Json);
        assert_eq!(resolver.resolve(&context).unwrap(), "user/show.json");
    }

    #[test]
    fn resolve_matches_amend_suffix() {
        let registry = FormatRegistry::new();
        let resolver = TemplatePathResolver::with_strategy(AmendSuffix::new(&registry));
        for (template, accept) in [
            ("home", Format::Unknown),
            ("/x/y", Format::Csv),
            ("a.b", Format::Pdf),
            ("report", Format::Text),
        ] {
            let context = ctx(template, "", accept);
            let direct = amend_suffix(template, &context, &registry).unwrap();
            assert_eq!(resolver.resolve(&context).unwrap(), direct);
        }
    }

    #[test]
    fn method_path_single_segment_template() {
        let resolver = TemplatePathResolver::new();
        let context = ctx("page", "a.b.C.action", Format::Html);
        assert_eq!(
            resolver.resolve_with_method_path(&context).unwrap(),
            "a/b/C/page.html"
        );
    }

    #[test]
    fn method_path_multi_segment_template() {
        let resolver = TemplatePathResolver::new();
        let context = ctx("C.other", "a.b.C.action", Format::Json);
        assert_eq!(
            resolver.resolve_with_method_path(&context).unwrap(),
            "a/b/C/other.json"
        );
    }

    #[test]
    fn method_path_absolute_template_gets_no_separator() {
        let resolver = TemplatePathResolver::new();
        let context = ctx("/shared/layout", "a.b.C.action", Format::Html);
        assert_eq!(
            resolver.resolve_with_method_path(&context).unwrap(),
            "a/b/C/shared/layout.html"
        );
    }

    #[test]
    fn empty_method_path_absolute_template() {
        let resolver = TemplatePathResolver::new();
        let context = ctx("/x/y", "", Format::Json);
        assert_eq!(resolver.resolve_with_method_path(&context).unwrap(), "/x/y.json");
    }

    #[test]
    fn empty_method_path_relative_template() {
        let resolver = TemplatePathResolver::new();
        let context = ctx("user.show", "", Format::Unknown);
        assert_eq!(
            resolver.resolve_with_method_path(&context).unwrap(),
            "user/show.html"
        );
    }

    #[test]
    fn short_method_path_degrades_to_empty_prefix() {
        let resolver = TemplatePathResolver::new();
        let context = ctx("x.y.z", "C.action", Format::Xml);
        assert_eq!(resolver.resolve_with_method_path(&context).unwrap(), "x/y/z.xml");
    }

    #[test]
    fn suffix_in_template_becomes_a_segment() {
        // Dots are converted before amendment, so "page.json" is read as two
        // segments and gains a suffix of its own.
        let resolver = TemplatePathResolver::new();
        let context = ctx("page.json", "a.b.C.action", Format::Html);
        assert_eq!(
            resolver.resolve_with_method_path(&context).unwrap(),
            "a/b/page/json.html"
        );
    }

    #[test]
    fn method_path_unsupported_format_fails() {
        let registry = FormatRegistry::new();
        let resolver = TemplatePathResolver::with_strategy(AmendSuffix::new(&registry));
        let context = ctx("page", "a.b.C.action", Format::Docx);
        let err = resolver.resolve_with_method_path(&context).unwrap_err();
        assert!(matches!(
            err,
            ViewPathError::UnsupportedFormat { format: Format::Docx }
        ));
    }

    #[test]
    fn custom_strategy_sees_built_path() {
        let resolver = TemplatePathResolver::with_strategy(
            |path: &str, _: &dyn TemplateContext| -> Result<String> {
                Ok(format!("{path}.peb"))
            },
        );
        let context = ctx("page", "a.b.C.action", Format::Html);
        assert_eq!(
            resolver.resolve_with_method_path(&context).unwrap(),
            "a/b/C/page.peb"
        );
    }
}
