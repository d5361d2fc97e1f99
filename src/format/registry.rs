//! Registry of formats accepted for template suffixes.
//!
//! The built-in default set (see [`Format::defaults`]) is always supported.
//! Anything else must be registered, typically once while the application
//! boots and before requests are served. Registration only ever adds.

use std::collections::HashSet;
use std::sync::{LazyLock, PoisonError, RwLock};

use super::token::Format;

static GLOBAL: LazyLock<FormatRegistry> = LazyLock::new(FormatRegistry::new);

/// Grow-only set of formats accepted beyond the built-in defaults.
///
/// A registration call applies its whole batch under one write lock, so
/// concurrent readers observe all of it or none of it.
#[derive(Debug, Default)]
pub struct FormatRegistry {
    registered: RwLock<HashSet<Format>>,
}

impl FormatRegistry {
    /// Create an empty registry (only the defaults are supported).
    pub fn new() -> Self {
        Self::default()
    }

    /// Register formats, returning how many were not already registered.
    pub fn register<I>(&self, formats: I) -> usize
    where
        I: IntoIterator<Item = Format>,
    {
        let mut registered = self
            .registered
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let mut added = 0;
        for format in formats {
            if registered.insert(format.clone()) {
                tracing::debug!("Registered template format: {}", format);
                added += 1;
            }
        }
        added
    }

    /// Check whether a format may be used as a template suffix.
    pub fn is_supported(&self, format: &Format) -> bool {
        if format.is_default() {
            return true;
        }
        self.registered
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(format)
    }

    /// Formats added through [`register`](Self::register), sorted.
    pub fn registered(&self) -> Vec<Format> {
        let mut formats: Vec<Format> = self
            .registered
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect();
        formats.sort();
        formats
    }

    /// Every supported format: defaults first, then registered ones.
    pub fn supported(&self) -> Vec<Format> {
        let mut formats = Format::defaults().to_vec();
        formats.extend(
            self.registered()
                .into_iter()
                .filter(|format| !format.is_default()),
        );
        formats
    }
}

/// The process-wide registry consulted by the default resolver.
pub fn global_registry() -> &'static FormatRegistry {
    &GLOBAL
}

/// Register formats with the process-wide registry.
///
/// Accepts anything iterable, so both a fixed list and a collection work:
///
/// ```
/// use viewpath::format::{is_format_supported, register_supported_formats, Format};
///
/// register_supported_formats([Format::Pdf, Format::Yaml]);
/// register_supported_formats(vec![Format::custom("ics").unwrap()]);
/// assert!(is_format_supported(&Format::Pdf));
/// ```
pub fn register_supported_formats<I>(formats: I) -> usize
where
    I: IntoIterator<Item = Format>,
{
    GLOBAL.register(formats)
}

/// Check a format against the process-wide registry.
pub fn is_format_supported(format: &Format) -> bool {
    GLOBAL.is_supported(format)
}
