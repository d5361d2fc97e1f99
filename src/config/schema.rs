//! Configuration schema definitions for viewpath.
//!
//! Maps to the YAML file at `.viewpath/config.yml`.

use serde::{Deserialize, Serialize};

use crate::format::Format;

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewPathConfig {
    /// Formats accepted as template suffixes in addition to the defaults.
    /// Registered with the process-wide registry at bootstrap.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub formats: Vec<Format>,

    /// Format used by `viewpath resolve` when none is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_accept: Option<Format>,
}
