//! Configuration management for styler
//!
//! Configuration is a TOML file with `[genai]` and `[history]` sections.
//! Every value has a built-in default, so a missing file is valid
//! configuration. The API key itself never appears in the file; the file
//! names the environment variable that holds it (`api_key_env`), and the
//! backend reads it at construction time.
//!
//! ```toml
//! [genai]
//! api_key_env = "GEMINI_API_KEY"
//! image_model = "gemini-2.5-flash-image"
//! advice_model = "gemini-3-flash-preview"
//!
//! [history]
//! capacity = 5
//! path = "/home/me/.local/share/styler/history.json"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default environment variable holding the API key
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default model for the image-composition call
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Default model for the advisory-text call
pub const DEFAULT_ADVICE_MODEL: &str = "gemini-3-flash-preview";

/// Default bound on the history store
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Invalid {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid configuration value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Settings for the generative service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenaiConfig {
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Optional override of the service base URL
    pub base_url: Option<String>,
    /// Model used for the image-composition call
    pub image_model: String,
    /// Model used for the advisory-text call
    pub advice_model: String,
}

impl Default for GenaiConfig {
    fn default() -> Self {
        Self {
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            base_url: None,
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            advice_model: DEFAULT_ADVICE_MODEL.to_string(),
        }
    }
}

/// Settings for the history store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of retained records
    pub capacity: usize,
    /// Path of the persisted history file; defaults under the user data dir
    pub path: Option<PathBuf>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
            path: None,
        }
    }
}

impl HistoryConfig {
    /// Resolve the history file path, falling back to the platform data dir
    #[must_use]
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("styler")
                .join("history.json")
        })
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub genai: GenaiConfig,
    pub history: HistoryConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, does not parse,
    /// or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an optional path, using defaults when none is given
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an explicit path that fails to load.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate semantic constraints the type system cannot express
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for out-of-range values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history.capacity == 0 {
            return Err(ConfigError::InvalidValue {
                key: "history.capacity".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.genai.api_key_env.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "genai.api_key_env".to_string(),
                reason: "must name an environment variable".to_string(),
            });
        }
        if self.genai.image_model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "genai.image_model".to_string(),
                reason: "must name a model".to_string(),
            });
        }
        if self.genai.advice_model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "genai.advice_model".to_string(),
                reason: "must name a model".to_string(),
            });
        }
        Ok(())
    }
}
