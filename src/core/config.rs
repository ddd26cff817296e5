//! Settings management.
//!
//! Settings are resolved in layers: built-in defaults, then an optional TOML
//! file (`.keyrelay.toml` in the working directory, falling back to
//! `<config_dir>/keyrelay/config.toml`), then command-line flags and their
//! environment variables.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Model name sent with every request
    pub model: String,
    /// API base URL, without the `/chat/completions` suffix
    pub endpoint: String,
    /// Credential file location
    pub keys_file: PathBuf,
    /// Per-request timeout in seconds; `DEFAULT_TIMEOUT_SECS` when unset
    pub timeout_secs: Option<u64>,
}

/// One layer of optional overrides.
///
/// Deserialized from a settings file, or built from CLI flags.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Layer {
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub keys_file: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

impl Layer {
    /// Fields set in `self` win over those in `base`.
    fn over(self, base: Layer) -> Layer {
        Layer {
            model: self.model.or(base.model),
            endpoint: self.endpoint.or(base.endpoint),
            keys_file: self.keys_file.or(base.keys_file),
            timeout_secs: self.timeout_secs.or(base.timeout_secs),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: constants::DEFAULT_MODEL.to_string(),
            endpoint: constants::DEFAULT_ENDPOINT.to_string(),
            keys_file: PathBuf::from(constants::KEYS_FILE),
            timeout_secs: None,
        }
    }
}

impl Settings {
    /// Resolve settings from the discovered settings file and CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a settings file exists but cannot be read or
    /// parsed, or if a resolved value is invalid.
    pub fn load(cli: Layer) -> Result<Self> {
        let file = match Self::discover() {
            Some(path) => Self::read_layer(&path)?,
            None => Layer::default(),
        };
        Self::from_layers(file, cli)
    }

    /// Locate the settings file, if any.
    pub fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(constants::SETTINGS_FILE);
        if local.exists() {
            return Some(local);
        }

        dirs::config_dir()
            .map(|dir| {
                dir.join(constants::SETTINGS_DIR)
                    .join(constants::GLOBAL_SETTINGS_FILE)
            })
            .filter(|path| path.exists())
    }

    /// Parse one settings file.
    pub fn read_layer(path: &Path) -> Result<Layer> {
        debug!(path = %path.display(), "loading settings");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        let layer: Layer = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        Ok(layer)
    }

    /// Merge layers over the defaults and validate the result.
    pub fn from_layers(file: Layer, cli: Layer) -> Result<Self> {
        let merged = cli.over(file);
        let defaults = Self::default();

        let settings = Self {
            model: merged.model.unwrap_or(defaults.model),
            endpoint: merged.endpoint.unwrap_or(defaults.endpoint),
            keys_file: merged.keys_file.unwrap_or(defaults.keys_file),
            timeout_secs: merged.timeout_secs,
        };
        settings.validate()?;

        debug!(
            model = %settings.model,
            endpoint = %settings.endpoint,
            keys_file = %settings.keys_file.display(),
            "settings resolved"
        );

        Ok(settings)
    }

    /// Request timeout, if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "model",
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "endpoint",
                reason: format!("not an http(s) URL: {}", self.endpoint),
            }
            .into());
        }

        if self.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "timeout",
                reason: "must be at least 1 second".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
