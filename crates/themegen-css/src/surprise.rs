//! Random professional themes.
//!
//! A built-in preset supplies the palette. Everything else is drawn from
//! narrow ranges that keep the result usable: readable font sizes, subtle
//! letter spacing, one coherent border style, mostly-subtle shadows.

use rand::seq::SliceRandom;
use rand::Rng;
use themegen_config::presets::{apply_preset, built_in_presets};
use themegen_config::schema::FONT_OPTIONS;
use themegen_config::ThemeControls;
use tracing::info;

use crate::scales::adjust_brightness;

/// Box shadows with their selection weights.
const SHADOWS: [(&str, f64); 5] = [
    ("none", 0.05),
    ("0 1px 2px rgba(0,0,0,0.05)", 0.25),
    ("0 1px 3px rgba(0,0,0,0.12), 0 1px 2px rgba(0,0,0,0.24)", 0.35),
    ("0 4px 6px rgba(0,0,0,0.1)", 0.25),
    ("0 10px 15px -3px rgba(0,0,0,0.1), 0 4px 6px -2px rgba(0,0,0,0.05)", 0.1),
];

/// 300ms listed twice so it comes up half the time.
const DURATIONS: [&str; 4] = ["150ms", "300ms", "300ms", "500ms"];

const TIMINGS: [&str; 3] = ["ease", "ease-in-out", "cubic-bezier(0.4, 0, 0.2, 1)"];

const HOVER_SCALES: [&str; 4] = ["1", "1", "1.02", "1.05"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BorderStyle {
    Sharp,
    Subtle,
    Rounded,
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Randomise `controls` in place. Returns the name of the preset whose
/// palette was used.
pub fn surprise<R: Rng + ?Sized>(controls: &mut ThemeControls, rng: &mut R) -> String {
    let presets = built_in_presets();
    let Some(preset) = presets.choose(rng) else {
        return String::new();
    };
    apply_preset(controls, preset);
    let primary = controls.colors.primary.clone();
    let secondary = controls.colors.secondary.clone();

    let links = &mut controls.links;
    links.color = primary.clone();
    links.hover_color = adjust_brightness(&primary, -15.0);
    links.focus_ring_color = primary.clone();
    links.focus_ring_width = rng.gen_range(2..=4);
    links.focus_ring_opacity = round_to(rng.gen_range(0.2..0.3), 2);

    let forms = &mut controls.forms;
    forms.input_bg = "#ffffff".into();
    forms.input_border_color = adjust_brightness(&secondary, 30.0);
    forms.input_focus_border_color = primary;
    forms.input_padding_y = rng.gen_range(6..=9);
    forms.input_padding_x = rng.gen_range(10..=15);

    let typography = &mut controls.typography;
    if let Some(font) = FONT_OPTIONS[1..7].choose(rng) {
        typography.font_family = (*font).to_string();
    }
    typography.font_size = f64::from(rng.gen_range(15u32..=18));
    typography.font_weight = if rng.gen_bool(0.5) { 400 } else { 500 };
    typography.heading_weight = if rng.gen_bool(0.5) { 500 } else { 600 };
    typography.line_height = round_to(rng.gen_range(1.4..1.6), 2);
    typography.letter_spacing = round_to(rng.gen_range(-0.01..0.01), 3);

    let style = *[BorderStyle::Sharp, BorderStyle::Subtle, BorderStyle::Rounded]
        .choose(rng)
        .unwrap_or(&BorderStyle::Subtle);
    let borders = &mut controls.borders;
    let (radius, radius_sm, radius_lg) = match style {
        BorderStyle::Sharp => (rng.gen_range(0..=2), 0, rng.gen_range(0..=1)),
        BorderStyle::Subtle => (rng.gen_range(4..=7), rng.gen_range(2..=3), rng.gen_range(6..=9)),
        BorderStyle::Rounded => (rng.gen_range(8..=15), rng.gen_range(4..=6), rng.gen_range(12..=19)),
    };
    borders.radius = radius;
    borders.radius_sm = radius_sm;
    borders.radius_lg = radius_lg;
    borders.width = if rng.gen_bool(0.2) { 2 } else { 1 };

    controls.shadows.box_shadow = SHADOWS
        .choose_weighted(rng, |(_, weight)| *weight)
        .map(|(shadow, _)| *shadow)
        .unwrap_or(SHADOWS[2].0)
        .to_string();

    let animation = &mut controls.animation;
    animation.transition_duration = DURATIONS.choose(rng).unwrap_or(&DURATIONS[1]).to_string();
    animation.transition_timing = TIMINGS.choose(rng).unwrap_or(&TIMINGS[0]).to_string();
    animation.hover_scale = HOVER_SCALES.choose(rng).unwrap_or(&HOVER_SCALES[0]).to_string();

    // 16-32px in steps of 4
    controls.grid.gutter_width = rng.gen_range(0..=4) * 4 + 16;

    info!(preset = %preset.name, ?style, "surprise theme generated");
    preset.name.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use themegen_config::presets::built_in_names;
    use themegen_config::ThemegenConfig;

    #[test]
    fn same_seed_same_theme() {
        let mut a = ThemeControls::default();
        let mut b = ThemeControls::default();
        let name_a = surprise(&mut a, &mut StdRng::seed_from_u64(7));
        let name_b = surprise(&mut b, &mut StdRng::seed_from_u64(7));
        assert_eq!(name_a, name_b);
        assert_eq!(a, b);
    }

    #[test]
    fn values_stay_in_professional_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let mut controls = ThemeControls::default();
            let name = surprise(&mut controls, &mut rng);
            assert!(built_in_names().any(|n| n == name));

            let t = &controls.typography;
            assert!((15.0..=18.0).contains(&t.font_size));
            assert!(t.font_weight == 400 || t.font_weight == 500);
            assert!(t.heading_weight == 500 || t.heading_weight == 600);
            assert!((1.4..=1.6).contains(&t.line_height));
            assert!((-0.01..=0.01).contains(&t.letter_spacing));
            assert!(FONT_OPTIONS[1..7].contains(&t.font_family.as_str()));

            let l = &controls.links;
            assert!((2..=4).contains(&l.focus_ring_width));
            assert!((0.2..=0.3).contains(&l.focus_ring_opacity));

            let f = &controls.forms;
            assert!((6..=9).contains(&f.input_padding_y));
            assert!((10..=15).contains(&f.input_padding_x));

            let b = &controls.borders;
            assert!(b.radius <= 15);
            assert!(b.radius_sm <= 6);
            assert!(b.radius_lg <= 19);
            assert!(b.width == 1 || b.width == 2);

            let gutter = controls.grid.gutter_width;
            assert!((16..=32).contains(&gutter) && gutter % 4 == 0);
            assert!(SHADOWS.iter().any(|(s, _)| *s == controls.shadows.box_shadow));
        }
    }

    #[test]
    fn link_and_form_colors_follow_palette() {
        let mut controls = ThemeControls::default();
        surprise(&mut controls, &mut StdRng::seed_from_u64(3));
        let primary = controls.colors.primary.clone();
        assert_eq!(controls.links.color, primary);
        assert_eq!(controls.links.focus_ring_color, primary);
        assert_eq!(controls.forms.input_focus_border_color, primary);
        assert_eq!(controls.links.hover_color, adjust_brightness(&primary, -15.0));
        assert_eq!(
            controls.forms.input_border_color,
            adjust_brightness(&controls.colors.secondary, 30.0)
        );
    }

    #[test]
    fn surprise_result_passes_config_validation() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let mut config = ThemegenConfig::default();
            surprise(&mut config.controls, &mut rng);
            assert!(themegen_config::validation::validate(&config).is_ok());
        }
    }
}
