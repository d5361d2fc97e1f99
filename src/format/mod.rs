//! Format tokens and the registry of formats usable as template suffixes.
//!
//! - [`token`] - The [`Format`] value type
//! - [`registry`] - [`FormatRegistry`] and the process-wide registry functions

pub mod registry;
pub mod token;

pub use registry::{
    global_registry, is_format_supported, register_supported_formats, FormatRegistry,
};
pub use token::{CustomFormat, Format};
