//! Template path resolution.
//!
//! - [`path`] - [`TemplatePathResolver`] and its two entry points
//! - [`suffix`] - Suffix amendment and the [`ResolveStrategy`] seam

pub mod path;
pub mod suffix;

pub use path::TemplatePathResolver;
pub use suffix::{amend_suffix, AmendSuffix, ResolveStrategy};
