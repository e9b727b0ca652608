//! Color parsing and validation for control values.
//!
//! Supports `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r,g,b)` and `rgba(r,g,b,a)`
//! where `a` is 0.0-1.0.

mod parse;

#[cfg(test)]
mod tests;

use themegen_common::{Color, ConfigError};

use parse::{parse_hex, parse_rgb_function};

/// Parse a control color string into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();

    if s.starts_with('#') {
        return parse_hex(s)
            .ok_or_else(|| ConfigError::ParseError(format!("invalid hex color: {s}")));
    }

    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return parse_rgb_function(s)
            .ok_or_else(|| ConfigError::ParseError(format!("invalid rgb color: {s}")));
    }

    Err(ConfigError::ParseError(format!(
        "unrecognized color format: {s}"
    )))
}

/// Whether a control color string is in a recognized format.
pub fn validate_color(s: &str) -> bool {
    parse_color(s).is_ok()
}
