//! Persisted settings for the AI commit workflow.
//!
//! A small TOML file under the platform config directory holds the API key,
//! the endpoint base URL, and the default model. Writes go through a temp
//! file in the same directory so a crash never leaves a half-written config.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub default_model: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            default_model: default_model(),
        }
    }
}

impl Config {
    /// Load from the default location; a missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(ConfigError::Read)?;
        Ok(toml::from_str(&content)?)
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;

        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(ConfigError::Write)?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(ConfigError::Write)?;
        tmp.write_all(content.as_bytes()).map_err(ConfigError::Write)?;
        tmp.persist(path).map_err(|e| ConfigError::Write(e.error))?;
        Ok(())
    }

    /// Precondition check for the aic workflow: the key must be set before
    /// any diff collection or prompt construction happens.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(&self.api_key)
    }

    /// Read a settable key; the api_key is only exposed redacted via key-get.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "base_url" => Some(&self.base_url),
            "default_model" => Some(&self.default_model),
            _ => None,
        }
    }

    /// Update a settable key.
    pub fn set(&mut self, key: &str, value: String) -> Result<(), ConfigError> {
        match key {
            "base_url" => self.base_url = value,
            "default_model" => self.default_model = value,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

/// Platform config file location, e.g. `~/.config/quill/config.toml`.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dirs = ProjectDirs::from("dev", "aveline", "quill").ok_or(ConfigError::NoConfigDir)?;
    Ok(dirs.config_dir().join("config.toml"))
}

/// Redact an API key for display: first 4 and last 4 characters visible,
/// anything 8 characters or shorter fully masked.
pub fn redact_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}{}", head, "*".repeat(chars.len() - 8), tail)
}
