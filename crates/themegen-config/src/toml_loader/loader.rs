//! Core TOML config loading: read from path or platform default.

use crate::schema::ThemegenConfig;
use crate::validation;
use std::path::Path;
use themegen_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take serde defaults. A config that parses but fails
/// validation is logged and returned as-is; `crate::load_config` is the
/// strict entry point.
pub fn load_from_path(path: &Path) -> Result<ThemegenConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: ThemegenConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/themegen/config.toml`
///
/// If the file does not exist, writes the commented template and returns
/// defaults.
pub fn load_default() -> Result<ThemegenConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::ParseError(msg)) if msg.contains("failed to read") => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(ThemegenConfig::default())
        }
        Err(e) => Err(e),
    }
}
