//! Tests for both generator flavors.

use super::*;
use crate::parser::parse_root;
use crate::validator::ValueValidator;
use rand::rngs::StdRng;
use rand::SeedableRng;
use themegen_config::presets::{apply_preset, built_in_presets, find_built_in};
use themegen_config::{validation, ThemegenConfig};

fn default_bootstrap() -> GeneratedCss {
    render(&ThemeControls::default(), CssFlavor::Bootstrap)
}

fn default_dynamic() -> GeneratedCss {
    render(&ThemeControls::default(), CssFlavor::Dynamic)
}

// =============================================================================
// BOOTSTRAP FLAVOR
// =============================================================================

#[test]
fn bootstrap_header_and_root_block() {
    let css = default_bootstrap();
    assert!(css
        .text
        .starts_with("/* Bootstrap Custom Variables */\n:root {\n    --bs-primary: #0d6efd;\n"));
    assert!(css.text.contains("\n}\n\n/* Component Overrides */\n.btn-primary {"));
    assert!(css
        .text
        .ends_with(".glow {\n    box-shadow: var(--bs-glow-effect);\n}"));
}

#[test]
fn bootstrap_unit_conversions() {
    let vars = default_bootstrap().variables;
    assert_eq!(vars.get("--bs-body-font-size"), Some("1rem"));
    assert_eq!(vars.get("--bs-border-radius"), Some("0.375rem"));
    assert_eq!(vars.get("--bs-border-radius-sm"), Some("0.25rem"));
    assert_eq!(vars.get("--bs-border-radius-lg"), Some("0.5rem"));
    assert_eq!(vars.get("--bs-border-width"), Some("1px"));
    assert_eq!(vars.get("--bs-letter-spacing"), Some("0em"));
    assert_eq!(vars.get("--bs-body-line-height"), Some("1.5"));
    assert_eq!(vars.get("--bs-font-weight"), Some("400"));
    assert_eq!(vars.get("--bs-focus-ring-width"), Some("3px"));
    assert_eq!(vars.get("--bs-focus-ring-opacity"), Some("0.25"));
    assert_eq!(vars.get("--bs-input-padding-y"), Some("0.375rem"));
    assert_eq!(vars.get("--bs-input-padding-x"), Some("0.75rem"));
    assert_eq!(vars.get("--bs-form-label-font-size"), Some("0.875rem"));
    assert_eq!(vars.get("--bs-grid-columns"), Some("12"));
    assert_eq!(vars.get("--bs-grid-gutter-width"), Some("24px"));
    assert_eq!(vars.get("--bs-container-max-width-xl"), Some("1140px"));
}

#[test]
fn bootstrap_variable_order_follows_control_groups() {
    let vars = default_bootstrap().variables;
    let names: Vec<&str> = vars.names().collect();
    assert_eq!(names.len(), 51);
    assert_eq!(names[0], "--bs-primary");
    assert_eq!(names[7], "--bs-dark");
    assert_eq!(names[8], "--bs-font-family");
    assert_eq!(names[names.len() - 1], "--bs-container-max-width-xl");
}

#[test]
fn bootstrap_override_groups_in_order() {
    let text = default_bootstrap().text;
    let groups = [
        "/* Component Overrides */",
        "/* Text Colors */",
        "/* Background Colors */",
        "/* Links & Focus */",
        "/* Forms & Inputs */",
        "/* Grid System */",
        "/* Typography */",
        "/* Spacing */",
        "/* Borders & Radius */",
        "/* Shadows & Effects */",
    ];
    let positions: Vec<usize> = groups.iter().map(|g| text.find(g).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    for breakpoint in ["576px", "768px", "992px", "1200px"] {
        assert!(text.contains(&format!("@media (min-width: {breakpoint})")));
    }
}

#[test]
fn fractional_font_sizes_format_cleanly() {
    let mut controls = ThemeControls::default();
    apply_preset(&mut controls, &find_built_in("Neobank").unwrap());
    let vars = render(&controls, CssFlavor::Bootstrap).variables;
    assert_eq!(vars.get("--bs-body-font-size"), Some("1.05rem"));
    assert_eq!(vars.get("--bs-border-radius-lg"), Some("1.5rem"));

    apply_preset(&mut controls, &find_built_in("Corporate Tech").unwrap());
    let vars = render(&controls, CssFlavor::Bootstrap).variables;
    assert_eq!(vars.get("--bs-body-font-size"), Some("0.95rem"));
}

#[test]
fn negative_letter_spacing() {
    let mut controls = ThemeControls::default();
    controls.typography.letter_spacing = -0.01;
    let vars = render(&controls, CssFlavor::Bootstrap).variables;
    assert_eq!(vars.get("--bs-letter-spacing"), Some("-0.01em"));
}

// =============================================================================
// DYNAMIC FLAVOR
// =============================================================================

#[test]
fn dynamic_header_and_companions() {
    let css = default_dynamic();
    assert!(css.text.starts_with(
        "/* Dynamic Framework Theme Variables */\n:root {\n    /* Base Colors (Dynamic Framework compatible) */\n    --bs-primary-rgb: 13, 110, 253;\n"
    ));
    assert_eq!(css.variables.get("--bs-gray-rgb"), Some("108, 117, 125"));
    assert_eq!(css.variables.get("--bs-primary"), Some("#0d6efd"));
    assert_eq!(css.file_name(), "bootstrap-custom-variables.css");
}

#[test]
fn dynamic_scales_and_aliases() {
    let vars = default_dynamic().variables;
    for name in ["primary", "secondary", "success", "danger", "warning", "info", "light", "dark", "gray"] {
        assert!(vars.contains(&format!("--bs-{name}-25-rgb")), "{name}");
        assert!(vars.contains(&format!("--bs-{name}-900-rgb")), "{name}");
        assert_eq!(
            vars.get(&format!("--bs-surface-{name}-rgb")),
            Some(format!("var(--bs-{name}-50-rgb)").as_str())
        );
        assert_eq!(
            vars.get(&format!("--bs-{name}-soft-rgb")),
            Some(format!("var(--bs-{name}-25-rgb)").as_str())
        );
    }
}

#[test]
fn dynamic_spacing_nav_typography_borders() {
    let vars = default_dynamic().variables;
    assert_eq!(vars.get("--bs-ref-spacer-6"), Some("1.5rem"));
    assert_eq!(vars.get("--bs-ref-spacer-30"), Some("7.5rem"));
    assert_eq!(vars.get("--bs-nav-link-hover-color"), Some("rgb(var(--bs-primary-rgb))"));
    assert_eq!(vars.get("--bs-nav-tabs-nav-gap"), Some("0"));
    assert_eq!(vars.get("--bs-body-font-size"), Some("1rem"));
    assert_eq!(vars.get("--bs-border-style"), Some("solid"));
    assert!(!vars.contains("--bs-link-color"));
    assert!(!vars.contains("--bs-grid-columns"));
}

#[test]
fn dynamic_overrides_use_rgb_companions() {
    let text = default_dynamic().text;
    assert!(text.contains(".btn-primary {\n    background-color: rgb(var(--bs-primary-rgb));"));
    assert!(text.contains(
        ".bg-surface-info { background-color: rgb(var(--bs-surface-info-rgb)) !important; }"
    ));
    assert!(text.ends_with(
        ".bg-info-soft { background-color: rgb(var(--bs-info-soft-rgb)) !important; }\n"
    ));
    assert!(!text.contains(".bg-light-soft"));
}

#[test]
fn dynamic_accepts_rgb_function_colors() {
    let mut controls = ThemeControls::default();
    controls.colors.primary = "rgb(30, 58, 138)".into();
    controls.colors.secondary = "rgba(1, 2, 3, 0.5)".into();
    let css = render(&controls, CssFlavor::Dynamic);
    assert_eq!(css.variables.get("--bs-primary-rgb"), Some("30, 58, 138"));
    assert_eq!(css.variables.get("--bs-secondary-rgb"), Some("1, 2, 3"));
    assert_eq!(css.variables.get("--bs-gray-rgb"), Some("1, 2, 3"));
    assert_eq!(css.variables.get("--bs-primary"), Some("rgb(30, 58, 138)"));

    let mut hex = ThemeControls::default();
    hex.colors.primary = "#1e3a8a".into();
    let expected = render(&hex, CssFlavor::Dynamic);
    assert_eq!(
        css.variables.get("--bs-primary-500-rgb"),
        expected.variables.get("--bs-primary-500-rgb")
    );
    assert!(css.variables.contains("--bs-secondary-50-rgb"));
    assert!(css.variables.contains("--bs-gray-50-rgb"));
}

#[test]
fn dynamic_skips_scales_for_unparseable_colors() {
    let mut controls = ThemeControls::default();
    controls.colors.secondary = "var(--brand)".into();
    let css = render(&controls, CssFlavor::Dynamic);
    assert_eq!(css.variables.get("--bs-secondary-rgb"), Some("0, 0, 0"));
    assert!(!css.variables.contains("--bs-secondary-50-rgb"));
    assert!(!css.variables.contains("--bs-gray-50-rgb"));
    assert!(css.variables.contains("--bs-primary-50-rgb"));
    assert!(!css.text.contains("/* secondary scales */"));
}

// =============================================================================
// SHARED PROPERTIES
// =============================================================================

#[test]
fn generation_is_deterministic() {
    for flavor in [CssFlavor::Bootstrap, CssFlavor::Dynamic] {
        let controls = ThemeControls::default();
        assert_eq!(render(&controls, flavor), render(&controls, flavor));
    }
}

#[test]
fn parse_recovers_generated_pairs() {
    for flavor in [CssFlavor::Bootstrap, CssFlavor::Dynamic] {
        let css = render(&ThemeControls::default(), flavor);
        let outcome = parse_root(&css.text);
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.variables, css.variables, "{flavor:?}");
    }
}

/// Controls that pass config validation, covering presets, randomised
/// themes and hand-written free text.
fn valid_control_sets() -> Vec<ThemeControls> {
    let mut sets = vec![ThemeControls::default()];
    for preset in built_in_presets() {
        let mut controls = ThemeControls::default();
        apply_preset(&mut controls, &preset);
        sets.push(controls);
    }
    for seed in 0..50 {
        let mut controls = ThemeControls::default();
        crate::surprise::surprise(&mut controls, &mut StdRng::seed_from_u64(seed));
        sets.push(controls);
    }
    let mut custom = ThemeControls::default();
    custom.colors.primary = "rgb(30, 58, 138)".into();
    custom.typography.font_family = "\"Inter Var\", system-ui, sans-serif".into();
    custom.shadows.box_shadow = "0 1px 2px rgba(0, 0, 0, 0.2), inset 0 0 0 1px #fff".into();
    custom.animation.transition_timing = "cubic-bezier(0.4, 0, 0.2, 1)".into();
    custom.spacing.component_padding = "calc(0.5rem + 2px) 1rem".into();
    custom.links.decoration = "underline dotted".into();
    sets.push(custom);
    sets
}

#[test]
fn parse_recovers_pairs_for_every_valid_config() {
    for controls in valid_control_sets() {
        let config = ThemegenConfig {
            controls: controls.clone(),
            ..ThemegenConfig::default()
        };
        assert!(validation::validate(&config).is_ok(), "{controls:?}");
        for flavor in [CssFlavor::Bootstrap, CssFlavor::Dynamic] {
            let css = render(&controls, flavor);
            assert_eq!(parse_root(&css.text).variables, css.variables, "{flavor:?}");
        }
    }
}

#[test]
fn injected_declarations_fail_config_validation() {
    let mut config = ThemegenConfig::default();
    config.controls.shadows.box_shadow = "0 1px 2px red; --bs-primary: #000".into();
    assert!(validation::validate(&config).is_err());

    let css = render(&config.controls, CssFlavor::Bootstrap);
    assert_eq!(css.variables.get("--bs-primary"), Some("#0d6efd"));
    assert_eq!(parse_root(&css.text).variables.get("--bs-primary"), Some("#000"));
}

#[test]
fn generated_output_validates_strictly() {
    let validator = ValueValidator::new(true);
    for flavor in [CssFlavor::Bootstrap, CssFlavor::Dynamic] {
        for preset in built_in_presets() {
            let mut controls = ThemeControls::default();
            apply_preset(&mut controls, &preset);
            let css = render(&controls, flavor);
            let report = validator.validate(&css.variables);
            assert!(report.is_clean(), "{} {flavor:?}: {report:?}", preset.name);
        }
    }
}

#[test]
fn generate_writes_sink_and_retains_text() {
    let mut generator = ThemeGenerator::new(CssFlavor::Bootstrap);
    assert!(generator.last_text().is_none());

    let mut sink = InMemoryStyle::new();
    let controls = ThemeControls::default();
    let expected = render(&controls, CssFlavor::Bootstrap);
    let generated = generator.generate(&controls, &mut sink).clone();

    assert_eq!(generated, expected);
    assert_eq!(sink.properties(), &expected.variables);
    assert_eq!(sink.write_count(), expected.variables.len());
    assert_eq!(generator.last_text(), Some(expected.text.as_str()));
    assert_eq!(generator.last_generated().unwrap().mime_type(), "text/css");
}

#[test]
fn set_flavor_changes_next_generate() {
    let mut generator = ThemeGenerator::default();
    assert_eq!(generator.flavor(), CssFlavor::Bootstrap);
    generator.set_flavor(CssFlavor::Dynamic);
    let mut sink = InMemoryStyle::new();
    let css = generator.generate(&ThemeControls::default(), &mut sink);
    assert_eq!(css.flavor, CssFlavor::Dynamic);
    assert!(sink.get("--bs-primary-rgb").is_some());
}

struct RejectingSink {
    accepted: Vec<String>,
}

impl StyleSink for RejectingSink {
    fn set_property(&mut self, name: &str, _value: &str) -> Result<(), themegen_common::ThemegenError> {
        if name.starts_with("--bs-grid") {
            return Err(themegen_common::ThemegenError::Other("read-only".into()));
        }
        self.accepted.push(name.to_string());
        Ok(())
    }
}

#[test]
fn rejected_sink_writes_are_skipped() {
    let css = default_bootstrap();
    let mut sink = RejectingSink { accepted: Vec::new() };
    let written = apply_variables(&css.variables, &mut sink);
    assert_eq!(written, css.variables.len() - 2);
    assert!(!sink.accepted.iter().any(|n| n.starts_with("--bs-grid")));
}
