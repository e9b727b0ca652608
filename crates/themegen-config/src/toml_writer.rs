//! Write `ThemegenConfig` to TOML on disk.
//!
//! Only configs that pass validation are written, so a saved file always
//! loads back through `load_config`. Writes go to a `.tmp` sibling first
//! and are renamed into place.

use std::path::Path;

use themegen_common::ConfigError;

use crate::schema::{ThemegenConfig, CONFIG_SCHEMA_VERSION};
use crate::toml_loader::default_config_path;
use crate::validation;

/// Write config to the platform default path.
pub fn save_config(config: &ThemegenConfig) -> Result<(), ConfigError> {
    let path = default_config_path()?;
    save_config_to_path(config, &path)
}

/// Validate, serialize and write config to `path`, creating parent
/// directories.
pub fn save_config_to_path(config: &ThemegenConfig, path: &Path) -> Result<(), ConfigError> {
    validation::validate(config)?;

    let body = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config to TOML: {e}")))?;
    let contents = format!("# themegen configuration (schema v{CONFIG_SCHEMA_VERSION})\n\n{body}");

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }
    write_replacing(path, &contents)?;

    tracing::debug!(
        path = %path.display(),
        preset = config.theme.preset.as_deref().unwrap_or("none"),
        flavor = ?config.output.flavor,
        "config saved"
    );
    Ok(())
}

/// Write through a `.tmp` sibling; a failed rename falls back to writing
/// `path` directly.
fn write_replacing(path: &Path, contents: &str) -> Result<(), ConfigError> {
    let write_err = |target: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("failed to write config to {}: {e}", target.display()))
    };

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, contents).map_err(|e| write_err(&tmp_path, e))?;
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        tracing::warn!("rename over {} failed ({e}), writing directly", path.display());
        std::fs::write(path, contents).map_err(|e| write_err(path, e))?;
        let _ = std::fs::remove_file(&tmp_path);
    }
    Ok(())
}
