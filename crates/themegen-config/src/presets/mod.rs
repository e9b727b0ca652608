//! Theme presets.
//!
//! Presets override a subset of the theme controls (palette, typography,
//! radii). Ten are built in; more can be dropped into
//! `<config_dir>/themegen/presets/` as YAML.

mod apply;
mod builtin;
mod loader;
mod types;

pub use apply::apply_preset;
pub use builtin::{built_in_names, built_in_presets, find_built_in};
pub use loader::{list_user_presets, load_preset, load_preset_from_path, presets_dir};
pub use types::{Preset, PresetBorders, PresetColors, PresetTypography};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ThemeControls;
    use crate::validation;

    #[test]
    fn ten_built_in_presets() {
        let names: Vec<&str> = built_in_names().collect();
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "Fintech Trust");
        assert!(names.contains(&"Neobank"));
        assert!(names.contains(&"Dark Mode Pro"));
    }

    #[test]
    fn find_built_in_by_name_or_slug() {
        assert_eq!(find_built_in("AI Startup").unwrap().name, "AI Startup");
        assert_eq!(find_built_in("ai-startup").unwrap().name, "AI Startup");
        assert_eq!(find_built_in("  enterprise saas ").unwrap().name, "Enterprise SaaS");
        assert!(find_built_in("Vaporwave").is_none());
    }

    #[test]
    fn slug_lowercases_and_dashes() {
        let preset = find_built_in("Modern Crypto").unwrap();
        assert_eq!(preset.slug(), "modern-crypto");
    }

    #[test]
    fn apply_fintech_trust() {
        let mut controls = ThemeControls::default();
        apply_preset(&mut controls, &find_built_in("Fintech Trust").unwrap());
        assert_eq!(controls.colors.primary, "#1e3a8a");
        assert_eq!(controls.colors.dark, "#0f172a");
        assert_eq!(controls.borders.radius, 8);
        assert_eq!(controls.borders.radius_sm, 6);
        assert_eq!(controls.borders.radius_lg, 12);
        assert!((controls.typography.line_height - 1.5).abs() < f64::EPSILON);
        // untouched by presets
        assert_eq!(controls.borders.width, 1);
        assert_eq!(controls.links.color, "#0d6efd");
    }

    #[test]
    fn corporate_tech_font_size_is_fractional_px() {
        let mut controls = ThemeControls::default();
        apply_preset(&mut controls, &find_built_in("Corporate Tech").unwrap());
        assert!((controls.typography.font_size - 15.2).abs() < f64::EPSILON);
    }

    #[test]
    fn every_built_in_preset_validates() {
        for preset in built_in_presets() {
            let mut config = crate::schema::ThemegenConfig::default();
            apply_preset(&mut config.controls, &preset);
            assert!(
                validation::validate(&config).is_ok(),
                "preset {} should validate",
                preset.name
            );
        }
    }

    #[test]
    fn apply_empty_preset_changes_nothing() {
        let mut controls = ThemeControls::default();
        apply_preset(&mut controls, &Preset::default());
        assert_eq!(controls, ThemeControls::default());
    }

    #[test]
    fn partial_color_overrides_keep_other_colors() {
        let mut controls = ThemeControls::default();
        let preset = Preset {
            name: "Just Primary".into(),
            colors: Some(PresetColors {
                primary: Some("#ff0000".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        apply_preset(&mut controls, &preset);
        assert_eq!(controls.colors.primary, "#ff0000");
        assert_eq!(controls.colors.secondary, "#6c757d");
    }

    #[test]
    fn load_preset_from_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sunset.yaml");
        std::fs::write(
            &path,
            r##"
description: Warm evening tones
colors:
  primary: "#f97316"
  dark: "#431407"
typography:
  font_family: "'Poppins', sans-serif"
  font_size: 17
borders:
  radius: 10
"##,
        )
        .unwrap();

        let preset = load_preset_from_path(&path).unwrap();
        assert_eq!(preset.name, "sunset");
        let colors = preset.colors.as_ref().unwrap();
        assert_eq!(colors.primary.as_deref(), Some("#f97316"));
        assert!(colors.secondary.is_none());

        let mut controls = ThemeControls::default();
        apply_preset(&mut controls, &preset);
        assert_eq!(controls.typography.font_family, "'Poppins', sans-serif");
        assert!((controls.typography.font_size - 17.0).abs() < f64::EPSILON);
        assert_eq!(controls.borders.radius, 10);
        assert_eq!(controls.borders.radius_sm, 4);
    }

    #[test]
    fn load_preset_by_path_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mine.yml");
        std::fs::write(&path, "name: Mine\n").unwrap();
        let preset = load_preset(path.to_str().unwrap()).unwrap();
        assert_eq!(preset.name, "Mine");
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "colors: [unclosed").unwrap();
        let err = load_preset_from_path(&path).unwrap_err();
        assert!(matches!(err, themegen_common::ConfigError::ParseError(_)));
    }

    #[test]
    fn unknown_preset_is_not_found() {
        let err = load_preset("definitely-not-a-real-preset-name").unwrap_err();
        assert!(matches!(err, themegen_common::ConfigError::FileNotFound(_)));
    }

    #[test]
    fn list_user_presets_filters_yaml() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.yaml", "a.yml", "notes.txt"] {
            std::fs::write(dir.path().join(name), "name: x\n").unwrap();
        }
        let files = list_user_presets(dir.path());
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.yml", "b.yaml"]);
        assert!(list_user_presets(&dir.path().join("missing")).is_empty());
    }
}
