use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

use crate::shorten::bitly::BITLY_API_URL;
use crate::utils::paths::get_config_path;

/// Environment variable holding the Bitly bearer token.
pub const ACCESS_TOKEN_ENV: &str = "BITLY_ACCESS_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_status_message_secs")]
    pub status_message_secs: u64,

    /// Bearer credential, read once at startup from the environment and
    /// never again. An absent token is not an error here; requests fail
    /// authorization at the service instead.
    #[serde(skip)]
    pub access_token: String,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_api_url() -> String {
    BITLY_API_URL.to_string()
}

fn default_status_message_secs() -> u64 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            api_url: default_api_url(),
            status_message_secs: default_status_message_secs(),
            access_token: String::new(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        let mut config = if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        config.access_token = env::var(ACCESS_TOKEN_ENV).unwrap_or_default();

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "default");
        assert_eq!(config.api_url, "https://api-ssl.bitly.com/v4/shorten");
        assert_eq!(config.status_message_secs, 3);
        assert!(config.access_token.is_empty());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("theme"));
        assert!(toml_str.contains("api_url"));
        assert!(!toml_str.contains("access_token"));
    }

    #[test]
    fn test_config_deserialization_fills_defaults() {
        let toml_str = r#"
        theme = "dark"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.api_url, "https://api-ssl.bitly.com/v4/shorten");
    }

    #[test]
    fn test_config_endpoint_override() {
        let toml_str = r#"
        api_url = "https://shortener.internal/v4/shorten"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api_url, "https://shortener.internal/v4/shorten");
    }
}
