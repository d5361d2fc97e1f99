//! viewpath - Template path resolution.
//!
//! Maps a logical template reference carried by a request context to a
//! concrete template path: a directory prefix derived from the handling
//! action's identity, and a file suffix derived from the negotiated format.
//! Loading and rendering templates is left to the caller.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and bootstrap format registration
//! - [`context`] - The request context capability the resolver reads
//! - [`error`] - Error types and result aliases
//! - [`format`] - Format tokens and the supported-format registry
//! - [`resolver`] - Template path resolution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use viewpath::context::RequestContext;
//! use viewpath::format::{register_supported_formats, Format};
//! use viewpath::resolver::TemplatePathResolver;
//!
//! // bootstrap
//! register_supported_formats([Format::Pdf]);
//!
//! let resolver = TemplatePathResolver::new();
//! let ctx = RequestContext::new("invoice")
//!     .with_method_path("shop.billing.InvoiceController.show")
//!     .with_accept(Format::Pdf);
//! assert_eq!(
//!     resolver.resolve_with_method_path(&ctx).unwrap(),
//!     "shop/billing/InvoiceController/invoice.pdf"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod resolver;
pub mod ui;

pub use error::{Result, ViewPathError};
