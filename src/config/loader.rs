//! Configuration file discovery and loading.

use crate::config::merger::merge_configs;
use crate::config::schema::ViewPathConfig;
use crate::error::{Result, ViewPathError};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding viewpath configuration inside a project.
pub const CONFIG_DIR: &str = ".viewpath";

/// Paths to configuration files in merge order (later overrides earlier).
///
/// 1. Project config (`.viewpath/config.yml`)
/// 2. Local overrides (`.viewpath/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .viewpath/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .viewpath/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ViewPathConfig> {
    let content = read(path)?;
    parse_config(&content, path)
}

/// Parse YAML content into a [`ViewPathConfig`].
///
/// An empty document is an empty config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ViewPathConfig> {
    if content.trim().is_empty() {
        return Ok(ViewPathConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| ViewPathError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file as a raw YAML value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = read(path)?;
    serde_yaml::from_str(&content).map_err(|e| ViewPathError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge the config files of a project.
///
/// A project without any config file yields the default config.
pub fn load_merged_config(project_root: &Path) -> Result<ViewPathConfig> {
    let paths = ConfigPaths::discover(project_root);

    let mut configs = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!("Loading config from {}", path.display());
        configs.push(load_config_value(path)?);
    }

    let merged = merge_configs(&configs);
    serde_yaml::from_value(merged).map_err(|e| ViewPathError::ConfigParseError {
        path: project_root.join(CONFIG_DIR),
        message: e.to_string(),
    })
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ViewPathError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ViewPathError::Io(e)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Format;
    use tempfile::TempDir;

    fn setup_project(config: Option<&str>, local: Option<&str>) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        if let Some(config) = config {
            fs::write(dir.join("config.yml"), config).unwrap();
        }
        if let Some(local) = local {
            fs::write(dir.join("config.local.yml"), local).unwrap();
        }
        temp
    }

    #[test]
    fn discover_finds_nothing_in_empty_project() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::discover(temp.path());
        assert!(paths.all_existing().is_empty());
    }

    #[test]
    fn discover_orders_project_before_local() {
        let temp = setup_project(Some("formats: [pdf]"), Some("formats: [xls]"));
        let paths = ConfigPaths::discover(temp.path());
        let all = paths.all_existing();
        assert_eq!(all.len(), 2);
        assert!(all[0].ends_with("config.yml"));
        assert!(all[1].ends_with("config.local.yml"));
    }

    #[test]
    fn load_config_file_missing() {
        let temp = TempDir::new().unwrap();
        let result = load_config_file(&temp.path().join("nope.yml"));
        assert!(matches!(result, Err(ViewPathError::ConfigNotFound { .. })));
    }

    #[test]
    fn load_config_file_invalid_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "formats: [unclosed").unwrap();
        let result = load_config_file(&path);
        assert!(matches!(result, Err(ViewPathError::ConfigParseError { .. })));
    }

    #[test]
    fn load_config_file_empty_is_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "").unwrap();
        assert_eq!(load_config_file(&path).unwrap(), ViewPathConfig::default());
    }

    #[test]
    fn merged_config_without_files_is_default() {
        let temp = TempDir::new().unwrap();
        let config = load_merged_config(temp.path()).unwrap();
        assert_eq!(config, ViewPathConfig::default());
    }

    #[test]
    fn local_overrides_project() {
        let temp = setup_project(
            Some("formats: [pdf]\ndefault_accept: json"),
            Some("default_accept: xml"),
        );
        let config = load_merged_config(temp.path()).unwrap();
        assert_eq!(config.formats, vec![Format::Pdf]);
        assert_eq!(config.default_accept, Some(Format::Xml));
    }

    #[test]
    fn merged_config_reports_bad_format() {
        let temp = setup_project(Some("formats: [\"x/y\"]"), None);
        let result = load_merged_config(temp.path());
        assert!(matches!(result, Err(ViewPathError::ConfigParseError { .. })));
    }
}
