use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Environment override for the catalog API key.
pub const API_KEY_ENV: &str = "API_KEY";
/// Environment override for the catalog base URL.
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub tmdb: TmdbConfig,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct TmdbConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Config {
    /// Load from a TOML file, falling back to defaults when the file
    /// does not exist yet.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file {:?}", path))?;
        Ok(())
    }

    /// Load the file and apply `API_KEY` / `API_BASE_URL` from the
    /// environment on top. Environment wins over the file.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_overrides(
            std::env::var(API_KEY_ENV).ok(),
            std::env::var(API_BASE_URL_ENV).ok(),
        );
        Ok(config)
    }

    pub fn apply_overrides(&mut self, api_key: Option<String>, base_url: Option<String>) {
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            self.tmdb.api_key = key;
        }
        if let Some(url) = base_url.filter(|u| !u.is_empty()) {
            self.tmdb.base_url = Some(url);
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.tmdb.api_key.is_empty()
    }

    /// API key as shown by `config show` without `--full`.
    pub fn masked_api_key(&self) -> String {
        mask_secret(&self.tmdb.api_key)
    }
}

fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "(not set)".to_string();
    }
    if secret.len() <= 4 {
        return "****".to_string();
    }
    format!("{}****", &secret[..4])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.tmdb.api_key = "abcdef123456".to_string();
        config.tmdb.base_url = Some("http://localhost:9000".to_string());
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert!(!config.has_api_key());
        assert!(config.tmdb.base_url.is_none());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut config = Config::default();
        config.tmdb.api_key = "from-file".to_string();
        config.apply_overrides(Some("from-env".to_string()), None);
        assert_eq!(config.tmdb.api_key, "from-env");
        assert!(config.tmdb.base_url.is_none());
    }

    #[test]
    fn test_empty_overrides_are_ignored() {
        let mut config = Config::default();
        config.tmdb.api_key = "from-file".to_string();
        config.apply_overrides(Some(String::new()), Some(String::new()));
        assert_eq!(config.tmdb.api_key, "from-file");
    }

    #[test]
    fn test_masking() {
        let mut config = Config::default();
        assert_eq!(config.masked_api_key(), "(not set)");
        config.tmdb.api_key = "abc".to_string();
        assert_eq!(config.masked_api_key(), "****");
        config.tmdb.api_key = "abcdef123456".to_string();
        assert_eq!(config.masked_api_key(), "abcd****");
    }
}
