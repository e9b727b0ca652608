//! Low-level color parsing for control values.
//!
//! Control colors come from pickers and preset files, so only hex and
//! numeric `rgb()`/`rgba()` are meaningful here. Stylesheet-level checks
//! (keywords, `var()`, CSS functions) live in the css crate's validator.

use regex::Regex;
use std::sync::LazyLock;
use themegen_common::Color;

/// Hex color: #RGB, #RRGGBB or #RRGGBBAA.
pub(crate) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

/// `rgb(r, g, b)` or `rgba(r, g, b, a)` with a float alpha.
pub(crate) static RGB_FN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
    )
    .unwrap()
});

pub(super) fn parse_hex(s: &str) -> Option<Color> {
    if !HEX_RE.is_match(s) {
        return None;
    }
    Color::from_hex(s)
}

/// Parse `rgb()`/`rgba()`. Alpha is 0.0-1.0 and scaled to 0-255.
pub(super) fn parse_rgb_function(s: &str) -> Option<Color> {
    let caps = RGB_FN_RE.captures(s)?;
    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;

    let a = match caps.get(4) {
        Some(alpha) => {
            let a_float: f64 = alpha.as_str().parse().ok()?;
            if !(0.0..=1.0).contains(&a_float) {
                return None;
            }
            (a_float * 255.0).round() as u8
        }
        None => 255,
    };

    Some(Color::from_rgba(r, g, b, a))
}
