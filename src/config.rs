//! Configuration management for watchtui
//!
//! Handles config file loading/saving and the credential store read.
//! Config is stored at ~/.config/watchtui/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable consulted before the config file for the bearer token
pub const TOKEN_ENV_VAR: &str = "WATCHTUI_TOKEN";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Bearer token for the catalog service
    pub api_token: Option<String>,
    /// Catalog service base URL override
    pub catalog_url: Option<String>,
    /// Start in dark theme
    pub dark_theme: Option<bool>,
}

impl Config {
    /// Get config file path (~/.config/watchtui/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("watchtui").join("config.toml"))
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path().ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Read the bearer token for the current session.
    ///
    /// Lookup order: WATCHTUI_TOKEN env var, then the config file. An absent
    /// token yields an empty string; requests are still issued with it.
    pub fn bearer_token(&self) -> String {
        if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
            return token;
        }
        self.api_token.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_token.is_none());
        assert!(config.catalog_url.is_none());
        assert!(config.dark_theme.is_none());
    }

    #[test]
    fn test_bearer_token_from_config() {
        let config = Config {
            api_token: Some("jwt123".into()),
            ..Default::default()
        };
        // Env var may shadow the config value in a shared test environment
        if std::env::var(TOKEN_ENV_VAR).is_err() {
            assert_eq!(config.bearer_token(), "jwt123");
        }
    }

    #[test]
    fn test_bearer_token_absent_is_empty() {
        let config = Config::default();
        if std::env::var(TOKEN_ENV_VAR).is_err() {
            assert_eq!(config.bearer_token(), "");
        }
    }

    #[test]
    fn test_roundtrip_toml() {
        let config = Config {
            api_token: Some("abc".into()),
            catalog_url: Some("http://localhost:9000".into()),
            dark_theme: Some(true),
        };
        let s = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&s).unwrap();
        assert_eq!(back.api_token.as_deref(), Some("abc"));
        assert_eq!(back.dark_theme, Some(true));
    }
}
