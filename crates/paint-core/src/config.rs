//! Service configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default upstream: the opensheet JSON export of the paint sheet.
pub const DEFAULT_SOURCE_URL: &str =
    "https://opensheet.elk.sh/11_MINVNU2k1k6grZ3T03JGjOEdTdo4LZa6ZyidfklTw/Sheet1";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: String, value: String },
}

/// Shape of the upstream payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// JSON array of row objects.
    #[default]
    Rows,
    /// Delimited text with a header line.
    Delimited,
}

impl SourceFormat {
    /// Get the config name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rows => "rows",
            Self::Delimited => "delimited",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SourceFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rows" | "json" => Ok(Self::Rows),
            "delimited" | "csv" => Ok(Self::Delimited),
            _ => Err(ConfigError::Invalid {
                key: "source_format".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Upstream spreadsheet source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Export URL of the sheet.
    #[serde(default = "default_url")]
    pub url: String,
    /// Payload shape.
    #[serde(default)]
    pub format: SourceFormat,
    /// Field delimiter for delimited text.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

fn default_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_delimiter() -> char {
    ','
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            format: SourceFormat::default(),
            delimiter: default_delimiter(),
        }
    }
}

/// Header names of the three columns the pipeline reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    /// Color key column.
    #[serde(default = "default_key_column")]
    pub key: String,
    /// Display name column.
    #[serde(default = "default_name_column")]
    pub name: String,
    /// Category (paint range) column.
    #[serde(default = "default_category_column")]
    pub category: String,
}

fn default_key_column() -> String {
    "hex".to_string()
}

fn default_name_column() -> String {
    "name".to_string()
}

fn default_category_column() -> String {
    "range".to_string()
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            key: default_key_column(),
            name: default_name_column(),
            category: default_category_column(),
        }
    }
}

/// Lifetimes used for successful responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Shared cache lifetime.
    #[serde(default = "default_max_age")]
    pub max_age_secs: u64,
    /// Stale-while-revalidate window.
    #[serde(default = "default_swr")]
    pub stale_while_revalidate_secs: u64,
}

fn default_max_age() -> u64 {
    86_400
}

fn default_swr() -> u64 {
    3_600
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            max_age_secs: default_max_age(),
            stale_while_revalidate_secs: default_swr(),
        }
    }
}

/// Full service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub columns: ColumnMap,
    #[serde(default)]
    pub cache: CacheSettings,
}

impl PaintConfig {
    /// Load config from a TOML or JSON file.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_string(),
            message: e.to_string(),
        })?;

        if path.ends_with(".json") {
            Self::from_json(&content)
        } else {
            Self::from_toml(&content)
        }
    }

    /// Parse config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Parse config from JSON text.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Render config as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Build config from flat key lookups (e.g. Spin variables).
    ///
    /// Keys that the lookup does not provide keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("source_url") {
            config.source.url = url;
        }
        if let Some(format) = lookup("source_format") {
            config.source.format = format.parse()?;
        }
        if let Some(delimiter) = lookup("source_delimiter") {
            config.source.delimiter = parse_delimiter(&delimiter)?;
        }
        if let Some(key) = lookup("column_key") {
            config.columns.key = key;
        }
        if let Some(name) = lookup("column_name") {
            config.columns.name = name;
        }
        if let Some(category) = lookup("column_category") {
            config.columns.category = category;
        }
        if let Some(value) = lookup("cache_max_age_secs") {
            config.cache.max_age_secs = parse_secs("cache_max_age_secs", &value)?;
        }
        if let Some(value) = lookup("cache_stale_while_revalidate_secs") {
            config.cache.stale_while_revalidate_secs =
                parse_secs("cache_stale_while_revalidate_secs", &value)?;
        }

        Ok(config)
    }
}

/// Parse a single-character delimiter. `\t` and `tab` mean a tab.
pub fn parse_delimiter(value: &str) -> Result<char, ConfigError> {
    if value == "\\t" || value.eq_ignore_ascii_case("tab") {
        return Ok('\t');
    }

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::Invalid {
            key: "source_delimiter".to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_secs(key: &str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key: key.to_string(),
        value: value.to_string(),
    })
}
