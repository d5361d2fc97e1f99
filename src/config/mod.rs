//! Configuration loading and application bootstrap.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//!
//! # Example
//!
//! ```
//! use viewpath::config::{load_merged_config, register_config_formats};
//! use viewpath::format::{Format, FormatRegistry};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".viewpath");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "formats: [pdf]").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! let registry = FormatRegistry::new();
//! register_config_formats(&config, &registry);
//! assert!(registry.is_supported(&Format::Pdf));
//! ```

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{
    load_config_file, load_config_value, load_merged_config, parse_config, ConfigPaths,
    CONFIG_DIR,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::ViewPathConfig;

use crate::format::FormatRegistry;

/// Register the formats a config names.
///
/// Meant to run during bootstrap, before any resolution traffic starts.
pub fn register_config_formats(config: &ViewPathConfig, registry: &FormatRegistry) -> usize {
    let added = registry.register(config.formats.iter().cloned());
    if added > 0 {
        tracing::info!("Registered {} template format(s) from config", added);
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Format;

    #[test]
    fn register_config_formats_counts_new() {
        let registry = FormatRegistry::new();
        let config = ViewPathConfig {
            formats: vec![Format::Pdf, Format::Html, Format::Pdf],
            default_accept: None,
        };
        // html is a default but still lands in the registered set
        assert_eq!(register_config_formats(&config, &registry), 2);
        assert_eq!(register_config_formats(&config, &registry), 0);
        assert!(registry.is_supported(&Format::Pdf));
    }
}
