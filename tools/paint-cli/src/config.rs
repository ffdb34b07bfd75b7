//! CLI configuration.

use anyhow::{Context, Result};
use paint_core::PaintConfig;
use serde::{Deserialize, Serialize};

/// CLI configuration file: the service config plus transport settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Service configuration shared with the endpoint.
    #[serde(flatten)]
    pub paint: PaintConfig,

    /// Outbound HTTP settings.
    #[serde(default)]
    pub http: HttpConfig,
}

/// Outbound HTTP settings for the reqwest transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Total request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User-Agent header.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("paints-cli/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

#[cfg(test)]
mod tests {
    use paint_core::SourceFormat;

    use super::*;

    #[test]
    fn test_parse_full_toml() {
        let config: CliConfig = toml::from_str(
            r#"
            [source]
            url = "https://docs.example.com/export?format=csv"
            format = "delimited"

            [columns]
            category = "brand"

            [http]
            timeout_secs = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.paint.source.format, SourceFormat::Delimited);
        assert_eq!(config.paint.columns.category, "brand");
        assert_eq!(config.paint.columns.key, "hex");
        assert_eq!(config.http.timeout_secs, 5);
        assert!(config.http.user_agent.starts_with("paints-cli/"));
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config, CliConfig::default());
    }
}
