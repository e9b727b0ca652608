//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = ThemegenConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_font_size_too_small() {
    let mut config = ThemegenConfig::default();
    config.controls.typography.font_size = 4.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("controls.typography.font_size"));
}

#[test]
fn catches_font_weight_out_of_range() {
    let mut config = ThemegenConfig::default();
    config.controls.typography.font_weight = 1000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("controls.typography.font_weight"));
}

#[test]
fn catches_line_height_out_of_range() {
    let mut config = ThemegenConfig::default();
    config.controls.typography.line_height = 5.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("controls.typography.line_height"));
}

#[test]
fn negative_letter_spacing_within_range_is_ok() {
    let mut config = ThemegenConfig::default();
    config.controls.typography.letter_spacing = -0.01;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_empty_font_family() {
    let mut config = ThemegenConfig::default();
    config.controls.typography.font_family = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("font_family"));
}

#[test]
fn catches_radius_too_large() {
    let mut config = ThemegenConfig::default();
    config.controls.borders.radius_lg = 80;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("controls.borders.radius_lg"));
}

#[test]
fn catches_focus_opacity_over_one() {
    let mut config = ThemegenConfig::default();
    config.controls.links.focus_ring_opacity = 1.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("controls.links.focus_ring_opacity"));
}

#[test]
fn catches_zero_grid_columns() {
    let mut config = ThemegenConfig::default();
    config.controls.grid.columns = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("controls.grid.columns"));
}

#[test]
fn catches_container_width_too_small() {
    let mut config = ThemegenConfig::default();
    config.controls.grid.container_max_width_sm = 100;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("controls.grid.container_max_width_sm"));
}

#[test]
fn catches_invalid_palette_color() {
    let mut config = ThemegenConfig::default();
    config.controls.colors.danger = "notacolor".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("controls.colors.danger"));
    assert!(err.contains("notacolor"));
}

#[test]
fn catches_invalid_form_color() {
    let mut config = ThemegenConfig::default();
    config.controls.forms.input_bg = "#ggg".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("controls.forms.input_bg"));
}

#[test]
fn catches_bad_extractor_settings() {
    let mut config = ThemegenConfig::default();
    config.extractor.prefix = "bs-".into();
    config.extractor.url = "ftp://example.com/x.css".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("extractor.prefix"));
    assert!(err.contains("extractor.url"));
}

#[test]
fn catches_warning_display_out_of_range() {
    let mut config = ThemegenConfig::default();
    config.editor.warning_display_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("editor.warning_display_secs"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = ThemegenConfig::default();
    config.controls.typography.font_size = 100.0;
    config.controls.borders.width = 20;
    config.controls.grid.gutter_width = 500;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("controls.typography.font_size"));
    assert!(err.contains("controls.borders.width"));
    assert!(err.contains("controls.grid.gutter_width"));
}

#[test]
fn rejects_declaration_breaking_text() {
    let mut config = ThemegenConfig::default();
    config.controls.shadows.box_shadow = "0 1px 2px red; --bs-primary: #000".into();
    config.controls.animation.transition_timing = "ease } .x {".into();
    config.controls.links.decoration = "underline /* x */".into();
    config.controls.typography.font_family = "'Inter',\nsans-serif".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("controls.shadows.box_shadow"));
    assert!(err.contains("controls.animation.transition_timing"));
    assert!(err.contains("controls.links.decoration"));
    assert!(err.contains("controls.typography.font_family"));
}

#[test]
fn rejects_padded_or_blank_text() {
    let mut config = ThemegenConfig::default();
    config.controls.colors.primary = " #0d6efd ".into();
    config.controls.spacing.spacing_base = "".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("controls.colors.primary"));
    assert!(err.contains("controls.spacing.spacing_base must not be empty"));
}

#[test]
fn rejects_nan_float() {
    let mut config = ThemegenConfig::default();
    config.controls.typography.line_height = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("controls.typography.line_height"));
}

#[test]
fn built_in_presets_validate() {
    for preset in crate::presets::built_in_presets() {
        let mut config = ThemegenConfig::default();
        crate::presets::apply_preset(&mut config.controls, &preset);
        assert!(validate(&config).is_ok(), "{} failed validation", preset.name);
    }
}
