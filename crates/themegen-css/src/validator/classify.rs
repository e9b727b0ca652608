//! Data-driven variable classification and value acceptance rules.

use regex::Regex;
use std::sync::LazyLock;

/// How a variable's value is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableClass {
    Color,
    RgbTriplet,
    Other,
}

/// Palette tokens that mark a name as color-valued.
pub const COLOR_TOKENS: [&str; 8] = [
    "primary",
    "secondary",
    "success",
    "danger",
    "warning",
    "info",
    "light",
    "dark",
];

/// Name fragments that mark a name as not color-valued even when it
/// mentions a palette token or "color".
pub const NON_COLOR_KEYWORDS: &[&str] = &[
    "box-shadow",
    "opacity",
    "weight",
    "width",
    "height",
    "size",
    "radius",
    "padding",
    "margin",
    "font",
    "line",
    "letter",
    "spacing",
    "index",
    "duration",
    "delay",
    "timing",
    "transition",
    "transform",
    "scale",
    "rotate",
    "translate",
];

/// Keywords accepted as colors, compared case-insensitively.
pub const COLOR_KEYWORDS: &[&str] = &[
    "transparent",
    "currentcolor",
    "inherit",
    "initial",
    "unset",
    "red",
    "green",
    "blue",
    "white",
    "black",
    "gray",
    "grey",
];

/// Substrings that mark a value as a CSS function expression.
pub const FUNCTION_MARKERS: &[&str] = &[
    "var(",
    "calc(",
    "color-mix(",
    "url(",
    "gradient(",
    "min(",
    "max(",
    "clamp(",
];

const NUM: &str = r"\d+(?:\.\d+)?%?";
const ALPHA: &str = r"(?:\d*\.)?\d+%?";
const VAR: &str = r"var\(--[\w-]+\)";

static COLOR_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$".to_string(),
        format!(r"^rgb\(\s*{NUM}\s*,\s*{NUM}\s*,\s*{NUM}\s*\)$"),
        format!(r"^rgba\(\s*{NUM}\s*,\s*{NUM}\s*,\s*{NUM}\s*,\s*{ALPHA}\s*\)$"),
        format!(r"^hsl\(\s*{NUM}(?:deg)?\s*,\s*{NUM}\s*,\s*{NUM}\s*\)$"),
        format!(r"^hsla\(\s*{NUM}(?:deg)?\s*,\s*{NUM}\s*,\s*{NUM}\s*,\s*{ALPHA}\s*\)$"),
        format!(r"^{VAR}$"),
        format!(r"^rgb\(\s*{VAR}\s*\)$"),
        format!(r"^rgba\(\s*{VAR}\s*,\s*{ALPHA}\s*\)$"),
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static RGB_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^\d{1,3}\s*,\s*\d{1,3}\s*,\s*\d{1,3}$".to_string(),
        format!(r"^{VAR}$"),
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static FUNCTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        format!(r"^{VAR}$"),
        format!(r"^rgb\(\s*{VAR}\s*\)$"),
        format!(r"^rgba\(\s*{VAR}\s*,\s*{ALPHA}\s*\)$"),
        r"^calc\(.+\)$".to_string(),
        r"^color-mix\(.+\)$".to_string(),
        format!(r"^hsl\(\s*{VAR}\s*\)$"),
        format!(r"^hsla\(\s*{VAR}\s*,\s*{ALPHA}\s*\)$"),
        r"^url\(.+\)$".to_string(),
        r"^(?:repeating-)?(?:linear|radial|conic)-gradient\(.+\)$".to_string(),
        r"^(?:min|max|clamp)\(.+\)$".to_string(),
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Classify a variable by name.
pub fn classify(name: &str) -> VariableClass {
    if name.ends_with("-rgb") {
        return VariableClass::RgbTriplet;
    }
    let mentions_color =
        name.contains("color") || COLOR_TOKENS.iter().any(|token| name.contains(token));
    if mentions_color && !NON_COLOR_KEYWORDS.iter().any(|kw| name.contains(kw)) {
        VariableClass::Color
    } else {
        VariableClass::Other
    }
}

/// Whether a value is acceptable for a color-class variable.
pub fn is_valid_color(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    COLOR_PATTERNS.iter().any(|re| re.is_match(value))
        || COLOR_KEYWORDS.contains(&value.to_ascii_lowercase().as_str())
        || is_css_function(value)
}

/// Whether a value is acceptable for an `-rgb` variable.
pub fn is_valid_rgb(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && RGB_PATTERNS.iter().any(|re| re.is_match(value))
}

/// Whether a value is a CSS function expression the validator lets through.
pub fn is_css_function(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    FUNCTION_PATTERNS.iter().any(|re| re.is_match(value))
        || FUNCTION_MARKERS.iter().any(|marker| value.contains(marker))
}

/// Whether `value` is acceptable for `class`.
pub fn accepts(class: VariableClass, value: &str) -> bool {
    match class {
        VariableClass::Color => is_valid_color(value),
        VariableClass::RgbTriplet => is_valid_rgb(value) || is_css_function(value),
        VariableClass::Other => true,
    }
}
