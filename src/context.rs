//! The request context capability the resolver reads from.

use crate::format::Format;

/// What the resolver needs to know about the request being handled.
///
/// Implemented by whatever request/action context the host framework has.
/// The resolver only reads from it.
pub trait TemplateContext {
    /// Logical template reference, dot- or slash-delimited, possibly with a
    /// suffix already.
    fn template_path(&self) -> &str;

    /// Dot-qualified identity of the handling action (e.g.
    /// `com.example.UserController.show`), or empty.
    fn method_path(&self) -> &str;

    /// The already-negotiated response format.
    fn accept(&self) -> Format;
}

/// A plain owned [`TemplateContext`].
///
/// # Example
///
/// ```
/// use viewpath::context::{RequestContext, TemplateContext};
/// use viewpath::format::Format;
///
/// let ctx = RequestContext::new("show")
///     .with_method_path("app.UserController.show")
///     .with_accept(Format::Json);
/// assert_eq!(ctx.template_path(), "show");
/// assert_eq!(ctx.accept(), Format::Json);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    template_path: String,
    method_path: String,
    accept: Format,
}

impl RequestContext {
    /// Create a context with no method path and an unknown format.
    pub fn new(template_path: impl Into<String>) -> Self {
        Self {
            template_path: template_path.into(),
            method_path: String::new(),
            accept: Format::Unknown,
        }
    }

    /// Set the handling action's identity.
    pub fn with_method_path(mut self, method_path: impl Into<String>) -> Self {
        self.method_path = method_path.into();
        self
    }

    /// Set the negotiated format.
    pub fn with_accept(mut self, accept: Format) -> Self {
        self.accept = accept;
        self
    }
}

impl TemplateContext for RequestContext {
    fn template_path(&self) -> &str {
        &self.template_path
    }

    fn method_path(&self) -> &str {
        &self.method_path
    }

    fn accept(&self) -> Format {
        self.accept.clone()
    }
}
