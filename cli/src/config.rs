//! CLI Configuration

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use formsmith_forms::FormsConfig;

/// Config file, then `FORMSMITH_DATA_DIR`, then `--data-dir`
pub fn resolve(path: &Path, data_dir: Option<PathBuf>) -> anyhow::Result<FormsConfig> {
    let mut config = FormsConfig::load(path).with_context(|| format!("loading {}", path.display()))?;
    config.apply_env_overrides();
    config.override_data_dir(data_dir);
    Ok(config)
}

/// Write the default configuration unless `path` already exists
pub fn init(path: &Path) -> anyhow::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let content = FormsConfig::default().to_toml()?;
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
    Ok(true)
}
