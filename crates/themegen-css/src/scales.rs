//! Color scale and extended spacing generation.
//!
//! Scales derive 25..900 steps from a base color by fixing lightness and
//! scaling saturation, mirroring the Dynamic Framework palette.

use themegen_common::Color;
use themegen_config::colors::parse_color;

use crate::variables::VariableMap;

/// Scale steps as (step, lightness %, saturation multiplier).
pub const SCALE_STEPS: [(u16, f64, f64); 11] = [
    (25, 97.0, 0.5),
    (50, 95.0, 0.6),
    (100, 90.0, 0.7),
    (200, 80.0, 0.8),
    (300, 70.0, 0.9),
    (400, 60.0, 1.0),
    (500, 50.0, 1.0),
    (600, 40.0, 1.0),
    (700, 30.0, 1.0),
    (800, 20.0, 0.9),
    (900, 10.0, 0.8),
];

/// Step aliased by `--bs-surface-{name}-rgb`.
pub const SURFACE_STEP: u16 = 50;
/// Step aliased by `--bs-{name}-soft-rgb`.
pub const SOFT_STEP: u16 = 25;

/// Parse a 3- or 6-digit hex color (leading `#` optional).
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 3 && digits.len() != 6 {
        return None;
    }
    Color::from_hex(digits).map(|c| (c.r, c.g, c.b))
}

/// Channels of a control color: hex or `rgb()`/`rgba()`, alpha dropped.
pub fn color_to_rgb(value: &str) -> Option<(u8, u8, u8)> {
    parse_color(value).ok().map(|c| (c.r, c.g, c.b))
}

/// `r, g, b` for a control color, `0, 0, 0` when it does not parse.
pub fn rgb_triplet(value: &str) -> String {
    parse_color(value).map_or_else(|_| "0, 0, 0".into(), |c| c.to_rgb_triplet())
}

/// RGB to HSL with hue in degrees and saturation/lightness in percent.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    } / 6.0;

    (h * 360.0, s * 100.0, l * 100.0)
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// HSL (degrees, percent, percent) to RGB, channels rounded.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    let channel = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(r), channel(g), channel(b))
}

/// One step of a generated scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleStep {
    pub step: u16,
    /// `r, g, b`
    pub rgb: String,
}

/// Generate the eleven scale steps for a control color.
///
/// Returns an empty vector when `color` does not parse.
pub fn color_scale_steps(color: &str) -> Vec<ScaleStep> {
    let Some((r, g, b)) = color_to_rgb(color) else {
        return Vec::new();
    };
    let (h, s, _) = rgb_to_hsl(r, g, b);
    SCALE_STEPS
        .iter()
        .map(|&(step, lightness, saturation)| {
            let (r, g, b) = hsl_to_rgb(h, s * saturation, lightness);
            ScaleStep {
                step,
                rgb: Color::from_rgb(r, g, b).to_rgb_triplet(),
            }
        })
        .collect()
}

/// Scale variables for `name`: `--bs-{name}-{step}-rgb` for every step,
/// plus `--bs-surface-{name}-rgb` and `--bs-{name}-soft-rgb` carrying the
/// 50 and 25 values.
pub fn generate_color_scale(color: &str, name: &str) -> VariableMap {
    let steps = color_scale_steps(color);
    let mut scale = VariableMap::new();
    for step in &steps {
        scale.insert(format!("--bs-{name}-{}-rgb", step.step), step.rgb.clone());
    }
    let value_at = |wanted: u16| steps.iter().find(|s| s.step == wanted).map(|s| s.rgb.clone());
    if let Some(surface) = value_at(SURFACE_STEP) {
        scale.insert(format!("--bs-surface-{name}-rgb"), surface);
    }
    if let Some(soft) = value_at(SOFT_STEP) {
        scale.insert(format!("--bs-{name}-soft-rgb"), soft);
    }
    scale
}

/// `--bs-ref-spacer-N` = `0.25 * N` rem for N in 6..=30.
pub fn extended_spacing() -> VariableMap {
    (6..=30)
        .map(|n| (format!("--bs-ref-spacer-{n}"), format!("{}rem", 0.25 * f64::from(n))))
        .collect()
}

/// Lighten (positive) or darken (negative) a hex color by `percent`,
/// adding `round(2.55 * percent)` to every channel.
///
/// Unparseable input is returned unchanged.
pub fn adjust_brightness(hex: &str, percent: f64) -> String {
    let Some((r, g, b)) = hex_to_rgb(hex) else {
        return hex.to_string();
    };
    let amount = (2.55 * percent).round() as i32;
    let shift = |c: u8| (i32::from(c) + amount).clamp(0, 255) as u8;
    Color::from_rgb(shift(r), shift(g), shift(b)).to_hex()
}
