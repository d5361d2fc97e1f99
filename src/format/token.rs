//! The [`Format`] token.
//!
//! A format is the categorical result of content negotiation: `html`, `json`
//! and so on. Its canonical string form (see [`Format::name`]) doubles as the
//! template file suffix.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewPathError};

/// A negotiated content format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Format {
    /// Nothing was negotiated. Suffix amendment treats this as [`Format::Html`].
    Unknown,
    Html,
    Json,
    Xml,
    /// Plain text. Renders as `txt`.
    Text,
    Csv,
    Pdf,
    Xls,
    Xlsx,
    Doc,
    Docx,
    Yaml,
    Css,
    Javascript,
    /// Externally defined token. Built with [`Format::custom`].
    Custom(CustomFormat),
}

/// Name of an externally defined format.
///
/// Only [`Format::custom`] and parsing create one, so the name is always
/// lowercase, usable as a suffix, and not claimed by a built-in variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomFormat(String);

impl CustomFormat {
    /// The token name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Formats accepted for template suffixes without registration.
const DEFAULT_FORMATS: [Format; 6] = [
    Format::Unknown,
    Format::Html,
    Format::Json,
    Format::Xml,
    Format::Text,
    Format::Csv,
];

impl Format {
    /// Build a format from a name, the same way parsing does.
    ///
    /// Known names map to their variants, so `custom("HTML")` is
    /// [`Format::Html`]; anything else must be a valid token name.
    ///
    /// ```
    /// use viewpath::format::Format;
    ///
    /// assert_eq!(Format::custom("HTML").unwrap(), Format::Html);
    /// assert_eq!(Format::custom("ics").unwrap().name(), "ics");
    /// assert!(Format::custom("a.b").is_err());
    /// ```
    pub fn custom(name: &str) -> Result<Format> {
        name.parse()
    }

    /// The built-in default set: unknown, html, json, xml, txt and csv.
    pub fn defaults() -> [Format; 6] {
        DEFAULT_FORMATS
    }

    /// Whether this format belongs to the built-in default set.
    pub fn is_default(&self) -> bool {
        matches!(
            self,
            Self::Unknown | Self::Html | Self::Json | Self::Xml | Self::Text | Self::Csv
        )
    }

    /// Canonical lowercase name, also used as the file suffix.
    pub fn name(&self) -> &str {
        match self {
            Self::Unknown => "unknown",
            Self::Html => "html",
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Text => "txt",
            Self::Csv => "csv",
            Self::Pdf => "pdf",
            Self::Xls => "xls",
            Self::Xlsx => "xlsx",
            Self::Doc => "doc",
            Self::Docx => "docx",
            Self::Yaml => "yaml",
            Self::Css => "css",
            Self::Javascript => "js",
            Self::Custom(custom) => custom.as_str(),
        }
    }

    /// The primary MIME type of this format, if it has a well-known one.
    pub fn content_type(&self) -> Option<&'static str> {
        let mime = match self {
            Self::Html => "text/html",
            Self::Json => "application/json",
            Self::Xml => "text/xml",
            Self::Text => "text/plain",
            Self::Csv => "text/csv",
            Self::Pdf => "application/pdf",
            Self::Xls => "application/vnd.ms-excel",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Doc => "application/msword",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Yaml => "application/yaml",
            Self::Css => "text/css",
            Self::Javascript => "application/javascript",
            Self::Unknown | Self::Custom(_) => return None,
        };
        Some(mime)
    }

    /// Map a single content type to its format.
    ///
    /// Parameters after `;` are ignored. This is a lookup, not negotiation:
    /// anything unrecognised (including `*/*` and ranked lists) is
    /// [`Format::Unknown`].
    ///
    /// # Example
    ///
    /// ```
    /// use viewpath::format::Format;
    ///
    /// assert_eq!(Format::from_content_type("application/json; charset=utf-8"), Format::Json);
    /// assert_eq!(Format::from_content_type("*/*"), Format::Unknown);
    /// ```
    pub fn from_content_type(content_type: &str) -> Format {
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match mime.as_str() {
            "text/html" | "application/xhtml+xml" => Self::Html,
            "application/json" | "text/json" => Self::Json,
            "text/xml" | "application/xml" => Self::Xml,
            "text/plain" => Self::Text,
            "text/csv" => Self::Csv,
            "application/pdf" => Self::Pdf,
            "application/vnd.ms-excel" => Self::Xls,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => Self::Xlsx,
            "application/msword" => Self::Doc,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Self::Docx
            }
            "application/yaml" | "application/x-yaml" | "text/yaml" => Self::Yaml,
            "text/css" => Self::Css,
            "application/javascript" | "text/javascript" => Self::Javascript,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = ViewPathError;

    /// Parse a format name, case-insensitively.
    ///
    /// Well-known names and a few aliases (`htm`, `text`, `yml`,
    /// `javascript`) map to their variants; any other name made of ASCII
    /// alphanumerics, `-`, `_` or `+` becomes [`Format::Custom`].
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        let format = match name.as_str() {
            "unknown" => Self::Unknown,
            "html" | "htm" => Self::Html,
            "json" => Self::Json,
            "xml" => Self::Xml,
            "txt" | "text" => Self::Text,
            "csv" => Self::Csv,
            "pdf" => Self::Pdf,
            "xls" => Self::Xls,
            "xlsx" => Self::Xlsx,
            "doc" => Self::Doc,
            "docx" => Self::Docx,
            "yaml" | "yml" => Self::Yaml,
            "css" => Self::Css,
            "js" | "javascript" => Self::Javascript,
            _ if is_token_name(&name) => Self::Custom(CustomFormat(name)),
            _ => {
                return Err(ViewPathError::InvalidFormat {
                    name: s.to_string(),
                })
            }
        };
        Ok(format)
    }
}

fn is_token_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+'))
}

impl TryFrom<String> for Format {
    type Error = ViewPathError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Format> for String {
    fn from(format: Format) -> Self {
        format.name().to_string()
    }
}
