//! Error types for viewpath operations.
//!
//! This module defines [`ViewPathError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Path resolution itself fails in exactly one way:
//!   [`ViewPathError::UnsupportedFormat`]. Dispatch code is expected to turn it
//!   into a "not acceptable" response (see [`ViewPathError::is_not_acceptable`]).
//! - Configuration and format parsing errors are reported separately.
//! - Use `anyhow::Error` (via `ViewPathError::Other`) for unexpected errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::format::Format;

/// Core error type for viewpath operations.
#[derive(Debug, Error)]
pub enum ViewPathError {
    /// The negotiated format is neither built in nor registered.
    #[error("Request accept not supported: {format}")]
    UnsupportedFormat { format: Format },

    /// A string that cannot name a format token.
    #[error("Invalid format token: '{name}'")]
    InvalidFormat { name: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ViewPathError {
    /// Whether this error means the client asked for a format we cannot serve.
    pub fn is_not_acceptable(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. })
    }
}

/// Result type alias for viewpath operations.
pub type Result<T> = std::result::Result<T, ViewPathError>;
