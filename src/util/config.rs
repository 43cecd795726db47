//! Application configuration.
//!
//! Read from `config.json` in the platform config directory, then overridden by
//! `SKIP_*` environment variables. A missing or malformed file falls back to
//! defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "SkipHireSelector";
const APP_NAME: &str = "SkipHireSelector";
const CONFIG_FILE: &str = "config.json";

pub const ENV_API_URL: &str = "SKIP_API_URL";
pub const ENV_POSTCODE: &str = "SKIP_POSTCODE";
pub const ENV_AREA: &str = "SKIP_AREA";
pub const ENV_STORAGE_URL: &str = "SKIP_STORAGE_URL";
pub const ENV_IMAGE_BUCKET: &str = "SKIP_IMAGE_BUCKET";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Inventory endpoint; postcode and area are appended as query params.
    pub api_url: Option<String>,
    pub postcode: String,
    pub area: String,
    /// Base URL of the storage service hosting skip photos.
    pub storage_url: Option<String>,
    pub image_bucket: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            postcode: "NR32".to_string(),
            area: "Lowestoft".to_string(),
            storage_url: None,
            image_bucket: "redesign".to_string(),
        }
    }
}

impl AppConfig {
    /// Applies overrides from `lookup`, usually the process environment.
    /// Empty values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = get(ENV_API_URL) {
            self.api_url = Some(url);
        }
        if let Some(postcode) = get(ENV_POSTCODE) {
            self.postcode = postcode;
        }
        if let Some(area) = get(ENV_AREA) {
            self.area = area;
        }
        if let Some(url) = get(ENV_STORAGE_URL) {
            self.storage_url = Some(url);
        }
        if let Some(bucket) = get(ENV_IMAGE_BUCKET) {
            self.image_bucket = bucket;
        }
        self
    }
}

fn config_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Loads the config file (if any) and applies environment overrides.
///
/// On first launch a starter file with the defaults is written so it can be
/// edited by hand.
pub fn load_config() -> AppConfig {
    let base = match config_file() {
        Some(path) if path.exists() => load_config_from(&path),
        Some(_) => {
            let defaults = AppConfig::default();
            if let Err(err) = save_config(&defaults) {
                tracing::warn!("could not write starter config: {err}");
            }
            defaults
        }
        None => {
            tracing::debug!("no config directory available, using defaults");
            AppConfig::default()
        }
    };
    base.with_overrides(|key| std::env::var(key).ok())
}

pub fn load_config_from(path: &Path) -> AppConfig {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("no config found at {}, using defaults", path.display());
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!("failed to read {}: {err}, using defaults", path.display());
            return AppConfig::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("failed to parse {}: {err}, using defaults", path.display());
            AppConfig::default()
        }
    }
}

pub fn save_config(config: &AppConfig) -> Result<(), ConfigSaveError> {
    let path = config_file().ok_or(ConfigSaveError::StorageUnavailable)?;
    save_config_to(&path, config)
}

pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<(), ConfigSaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
