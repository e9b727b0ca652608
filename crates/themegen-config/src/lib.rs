//! themegen configuration system.
//!
//! TOML-based configuration holding the theme controls plus output,
//! editor and extractor settings. Every section has Bootstrap defaults so
//! partial configs work out of the box. Presets (built-in or YAML) are
//! layered over `[controls]` at load time.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use themegen_config::{config_to_json, load_config};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod colors;
pub mod presets;
pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;
pub mod watcher;

pub use presets::{apply_preset, load_preset, Preset};
pub use schema::{CssFlavor, ThemeControls, ThemegenConfig, CONFIG_SCHEMA_VERSION};
pub use toml_writer::{save_config, save_config_to_path};
pub use watcher::FileWatcher;

use std::path::Path;
use themegen_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default file is created from the commented template if missing.
/// The selected preset is applied over `[controls]`, then the result is
/// validated.
pub fn load_config(path: Option<&Path>) -> Result<ThemegenConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    if let Some(name) = config.theme.preset.clone() {
        match presets::load_preset(&name) {
            Ok(preset) => {
                tracing::info!("applying preset '{}'", preset.name);
                apply_preset(&mut config.controls, &preset);
            }
            Err(e) => tracing::warn!("failed to load preset '{name}': {e}"),
        }
    }

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ThemegenConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&ThemegenConfig::default());
        for section in ["theme", "controls", "output", "editor", "extractor", "logging"] {
            assert!(json.contains(&format!("\"{section}\"")), "missing {section}");
        }
        assert!(json.contains("\"typography\""));
        assert!(json.contains("\"grid\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_applies_preset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r##"
[theme]
preset = "Neobank"

[controls.colors]
primary = "#000000"
"##,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.controls.colors.primary, "#ec4899");
        assert_eq!(config.controls.borders.radius_lg, 24);
    }

    #[test]
    fn load_config_keeps_controls_when_preset_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r##"
[theme]
preset = "no-such-preset-anywhere"

[controls.colors]
primary = "#123456"
"##,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.controls.colors.primary, "#123456");
    }

    #[test]
    fn load_config_rejects_out_of_range_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[controls.grid]\ncolumns = 99\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = ThemegenConfig::default();
        let parsed: ThemegenConfig = serde_json::from_str(&config_to_json(&config)).unwrap();
        assert_eq!(parsed.controls, config.controls);
        assert_eq!(parsed.extractor.prefix, "--bs-");
    }
}
