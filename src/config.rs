//! Settings persisted in `config.toml` under the app directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs::{AppDirError, AppPaths};
use crate::http_client::HttpTimeouts;
use crate::logging::LogSettings;
use crate::prediction::api::DEFAULT_ENDPOINT;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that may occur while loading or saving app configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No usable config directory found.
    #[error("No suitable config directory found")]
    NoConfigDir,
    /// Failed to create the config directory.
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
    /// The prediction endpoint is not an absolute http(s) URL.
    #[error("Invalid prediction endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

/// Top-level settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub prediction: PredictionSettings,
    pub form: FormSettings,
    pub logging: LogSettings,
}

/// Where and how to reach the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionSettings {
    pub endpoint: String,
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
    pub write_timeout_secs: u64,
}

impl Default for PredictionSettings {
    fn default() -> Self {
        let timeouts = HttpTimeouts::default();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout_secs: timeouts.connect.as_secs(),
            read_timeout_secs: timeouts.read.as_secs(),
            write_timeout_secs: timeouts.write.as_secs(),
        }
    }
}

impl PredictionSettings {
    pub fn timeouts(&self) -> HttpTimeouts {
        // A zero timeout would fail every request immediately.
        HttpTimeouts {
            connect: Duration::from_secs(self.connect_timeout_secs.max(1)),
            read: Duration::from_secs(self.read_timeout_secs.max(1)),
            write: Duration::from_secs(self.write_timeout_secs.max(1)),
        }
    }

    /// Parse the endpoint, accepting only absolute `http`/`https` URLs.
    pub fn endpoint_url(&self) -> Result<url::Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason,
        };
        let url = url::Url::parse(self.endpoint.trim()).map_err(|err| invalid(err.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme {other}"))),
        }
    }
}

/// Form behavior toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// Refuse to submit while any input is blank.
    pub require_all_fields: bool,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            require_all_fields: true,
        }
    }
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let paths = AppPaths::resolve().map_err(map_app_dir_error)?;
    config_path_in(&paths)
}

fn config_path_in(paths: &AppPaths) -> Result<PathBuf, ConfigError> {
    let root = paths.ensure_root().map_err(map_app_dir_error)?;
    Ok(root.join(CONFIG_FILE_NAME))
}

/// Load settings from disk, writing the defaults on first launch.
pub fn load_or_default() -> Result<AppSettings, ConfigError> {
    let paths = AppPaths::resolve().map_err(map_app_dir_error)?;
    load_or_default_in(&paths)
}

/// [`load_or_default`] for an explicit app folder.
pub fn load_or_default_in(paths: &AppPaths) -> Result<AppSettings, ConfigError> {
    let path = config_path_in(paths)?;
    if !path.exists() {
        let settings = AppSettings::default();
        save_to_path(&settings, &path)?;
        tracing::info!("Wrote default config to {}", path.display());
        return Ok(settings);
    }
    load_from_path(&path)
}

/// Load and validate settings from a specific file.
pub fn load_from_path(path: &Path) -> Result<AppSettings, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: AppSettings = toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;
    settings.prediction.endpoint_url()?;
    Ok(settings)
}

/// Serialize settings to a specific file, creating parent directories.
pub fn save_to_path(settings: &AppSettings, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let text = toml::to_string_pretty(settings).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn map_app_dir_error(error: AppDirError) -> ConfigError {
    match error {
        AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        AppDirError::CreateDir { path, source } => ConfigError::CreateDir { path, source },
    }
}
