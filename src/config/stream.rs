//! Stream configuration.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::FilterConfig;

/// Errors raised while loading a [`StreamConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "yaml")]
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension does not name an enabled format
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

fn default_delimiter() -> char {
    ','
}

fn default_has_headers() -> bool {
    true
}

/// Configuration for one CSV stream.
///
/// ```yaml
/// delimiter: ";"
/// has_headers: true
/// filter:
///   ranges:
///     column: Price
///     conditions: "5-7,15"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StreamConfig {
    /// Field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Whether the first record is a header row
    #[serde(default = "default_has_headers")]
    pub has_headers: bool,
    /// Row selection; `None` keeps every record
    #[serde(default)]
    pub filter: Option<FilterConfig>,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            has_headers: default_has_headers(),
            filter: None,
        }
    }
}

impl StreamConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether the source has a header row.
    pub fn with_has_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// Set the row filter.
    pub fn with_filter(mut self, filter: FilterConfig) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Parse YAML. The filter mode is written as a single-key map
    /// (`filter: { lines: "2-3" }`), not as a `!lines` tag.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let de = serde_yaml::Deserializer::from_str(s);
        Ok(serde_yaml::with::singleton_map_recursive::deserialize(de)?)
    }

    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a configuration file, choosing the format by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let content = std::fs::read_to_string(path)?;

        match ext.as_str() {
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Self::from_yaml_str(&content),
            #[cfg(feature = "json")]
            "json" => Self::from_json_str(&content),
            _ => Err(ConfigError::UnsupportedFormat(ext)),
        }
    }
}
