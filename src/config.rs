use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::app_data::app_data;
use crate::ui::theme::ThemePreset;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub joke: JokeConfig,
    #[serde(default)]
    pub tips: TipsConfig,
}

/// Appearance settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Color theme
    #[serde(default)]
    pub theme: ThemePreset,
}

/// Joke widget settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JokeConfig {
    /// Endpoint returning `{ "setup": ..., "punchline": ... }`
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds (unset = HTTP client default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for JokeConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: None,
        }
    }
}

impl JokeConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn default_endpoint() -> String {
    app_data().joke.endpoint.clone()
}

/// Tips widget settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TipsConfig {
    /// Custom tips JSON file (unset = built-in tips)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("dev", "devnotes", "DevNotes")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        let config_dir = dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, falling back to defaults if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("Invalid configuration in {}", path.display()))?;
            tracing::info!("Loaded configuration from {:?}", path);
            Ok(config)
        } else {
            tracing::info!("No configuration file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Read a value by dotted key (e.g. "joke.endpoint")
    pub fn get_value(&self, key: &str) -> Result<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["ui", "theme"] => Ok(self.ui.theme.key().to_string()),
            ["joke", "endpoint"] => Ok(self.joke.endpoint.clone()),
            ["joke", "timeout_secs"] => Ok(self
                .joke
                .timeout_secs
                .map(|s| s.to_string())
                .unwrap_or_else(|| "<not set>".to_string())),
            ["tips", "file"] => Ok(self
                .tips
                .file
                .clone()
                .unwrap_or_else(|| "<not set>".to_string())),
            _ => anyhow::bail!("Unknown config key: {}", key),
        }
    }

    /// Set a value by dotted key. An empty value unsets optional keys.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["ui", "theme"] => {
                self.ui.theme = ThemePreset::from_key(value)
                    .ok_or_else(|| anyhow::anyhow!("Unknown theme: {}", value))?;
            }
            ["joke", "endpoint"] => {
                if value.is_empty() {
                    self.joke.endpoint = default_endpoint();
                } else {
                    reqwest::Url::parse(value)
                        .with_context(|| format!("Invalid endpoint URL: {}", value))?;
                    self.joke.endpoint = value.to_string();
                }
            }
            ["joke", "timeout_secs"] => {
                self.joke.timeout_secs = if value.is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                };
            }
            ["tips", "file"] => {
                self.tips.file = (!value.is_empty()).then(|| value.to_string());
            }
            _ => anyhow::bail!("Unknown config key: {}", key),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: Config = toml::from_str("[tips]\nfile = \"my-tips.json\"\n").unwrap();
        assert_eq!(config.tips.file.as_deref(), Some("my-tips.json"));
        assert_eq!(config.joke.endpoint, app_data().joke.endpoint);
        assert_eq!(config.joke.timeout(), None);
        assert_eq!(config.ui.theme, ThemePreset::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.set_value("joke.timeout_secs", "10").unwrap();
        config.set_value("ui.theme", "ocean").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.joke.timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[joke\nendpoint = ").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_get_and_set_values() {
        let mut config = Config::default();
        assert_eq!(config.get_value("tips.file").unwrap(), "<not set>");

        config.set_value("tips.file", "/tmp/tips.json").unwrap();
        assert_eq!(config.get_value("tips.file").unwrap(), "/tmp/tips.json");

        config.set_value("tips.file", "").unwrap();
        assert!(config.tips.file.is_none());

        config
            .set_value("joke.endpoint", "http://localhost:8080/joke")
            .unwrap();
        assert_eq!(
            config.get_value("joke.endpoint").unwrap(),
            "http://localhost:8080/joke"
        );

        assert!(config.set_value("joke.endpoint", "not a url").is_err());
        assert!(config.set_value("joke.timeout_secs", "soon").is_err());
        assert!(config.set_value("ui.theme", "neon").is_err());
        assert!(config.get_value("joke.nope").is_err());
    }
}
