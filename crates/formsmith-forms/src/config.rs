//! Forms configuration
//!
//! Loaded from TOML; every section falls back to its defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FormsError, Result};

/// Environment variable that replaces `storage.data_dir`
pub const DATA_DIR_ENV: &str = "FORMSMITH_DATA_DIR";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsConfig {
    pub storage: StorageConfig,
    pub logging: LogConfig,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    Memory,
    #[default]
    JsonFile,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub data_dir: PathBuf,
    pub schemas_file: String,
    pub submissions_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: PathBuf::from("data"),
            schemas_file: "schemas.json".to_string(),
            submissions_file: "submissions.json".to_string(),
        }
    }
}

impl StorageConfig {
    pub fn schemas_path(&self) -> PathBuf {
        self.data_dir.join(&self.schemas_file)
    }

    pub fn submissions_path(&self) -> PathBuf {
        self.data_dir.join(&self.submissions_file)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `info` or `formsmith_forms=debug`
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

impl FormsConfig {
    /// Load from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| FormsError::Config(format!("Failed to read {:?}: {}", path, e)))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FormsError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| FormsError::Config(e.to_string()))
    }

    pub fn apply_env_overrides(&mut self) {
        self.override_data_dir(std::env::var_os(DATA_DIR_ENV).map(PathBuf::from));
    }

    /// Replace the data directory when `dir` is set and non-empty
    pub fn override_data_dir(&mut self, dir: Option<PathBuf>) {
        if let Some(dir) = dir.filter(|d| !d.as_os_str().is_empty()) {
            self.storage.data_dir = dir;
        }
    }
}
