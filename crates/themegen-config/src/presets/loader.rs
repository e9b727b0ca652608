//! Preset resolution and YAML loading.

use super::builtin::find_built_in;
use super::types::{slugify, Preset};
use crate::toml_loader::config_dir;
use std::path::{Path, PathBuf};
use themegen_common::ConfigError;
use tracing::info;

/// Resolve a user preset name to a file path.
///
/// Names that look like paths (contain `/` or end in `.yaml`/`.yml`) are
/// used directly; otherwise `<config_dir>/themegen/presets/<slug>.yaml`.
fn resolve_preset_path(name: &str) -> Result<PathBuf, ConfigError> {
    if name.contains('/') || name.ends_with(".yaml") || name.ends_with(".yml") {
        let path = PathBuf::from(name);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(path));
    }

    if let Ok(dir) = presets_dir() {
        let user_preset = dir.join(format!("{}.yaml", slugify(name)));
        if user_preset.exists() {
            return Ok(user_preset);
        }
    }

    Err(ConfigError::FileNotFound(PathBuf::from(format!(
        "preset '{name}' not found in any search path"
    ))))
}

/// Directory holding user preset YAML files.
pub fn presets_dir() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("presets"))
}

/// Load a preset by name: built-ins first, then user YAML files.
pub fn load_preset(name: &str) -> Result<Preset, ConfigError> {
    if let Some(preset) = find_built_in(name) {
        return Ok(preset);
    }

    let path = resolve_preset_path(name)?;
    load_preset_from_path(&path)
}

/// Load a preset from a specific YAML file.
///
/// A file without a `name` takes its file stem.
pub fn load_preset_from_path(path: &Path) -> Result<Preset, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read preset file {}: {e}", path.display()))
    })?;

    let mut preset: Preset = serde_yaml::from_str(&content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to parse preset YAML {}: {e}",
            path.display()
        ))
    })?;

    if preset.name.is_empty() {
        if let Some(stem) = path.file_stem() {
            preset.name = stem.to_string_lossy().into_owned();
        }
    }

    info!("loaded preset from {}", path.display());
    Ok(preset)
}

/// User preset files in `dir`, sorted by file name. A missing directory
/// yields an empty list.
pub fn list_user_presets(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            matches!(
                path.extension().and_then(|ext| ext.to_str()),
                Some("yaml" | "yml")
            )
        })
        .collect();
    files.sort();
    files
}
