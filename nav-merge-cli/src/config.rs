use std::{fs, path::Path};

use anyhow::{Context as _, Result};
use nav_merge_core::MergeConfig;

/// Reads and validates a merge config. Keys missing from the file keep
/// their defaults; a missing file is an error.
pub fn load_config(path: &Path) -> Result<MergeConfig> {
    let config_str = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = parse_config(&config_str)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}

pub fn parse_config(config_str: &str) -> Result<MergeConfig> {
    let config: MergeConfig = toml::from_str(config_str)?;
    config.validate()?;
    Ok(config)
}

/// `--config` given: load it, otherwise the defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<MergeConfig> {
    match path {
        Some(path) => load_config(path),
        None => {
            log::info!("no config given, using defaults");
            Ok(MergeConfig::default())
        }
    }
}

pub fn config_to_string(config: &MergeConfig) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

pub fn save_config(config: &MergeConfig, path: &Path) -> Result<()> {
    let config_str = config_to_string(config)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, config_str).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
