//! Typography controls.

use serde::{Deserialize, Serialize};

/// Font stacks offered by the font selects, in display order.
pub const FONT_OPTIONS: &[&str] = &[
    "system-ui, -apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, 'Noto Sans', 'Liberation Sans', sans-serif",
    "'Inter', sans-serif",
    "'Roboto', sans-serif",
    "'Open Sans', sans-serif",
    "'Poppins', sans-serif",
    "'DM Sans', sans-serif",
    "'Plus Jakarta Sans', sans-serif",
    "'Helvetica Neue', Helvetica, Arial, sans-serif",
    "'Arial', sans-serif",
    "'Georgia', serif",
    "'Times New Roman', Times, serif",
];

/// Typography controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographyControls {
    pub font_family: String,
    pub heading_font_family: String,
    /// Body font size in px (valid range: 8-32). Emitted as rem.
    pub font_size: f64,
    /// Body font weight (valid range: 100-900).
    pub font_weight: u32,
    /// Heading font weight (valid range: 100-900).
    pub heading_weight: u32,
    /// Line height multiplier (valid range: 1.0-3.0).
    pub line_height: f64,
    /// Letter spacing in em (valid range: -0.1-0.5).
    pub letter_spacing: f64,
}

impl Default for TypographyControls {
    fn default() -> Self {
        Self {
            font_family: FONT_OPTIONS[0].into(),
            heading_font_family: "inherit".into(),
            font_size: 16.0,
            font_weight: 400,
            heading_weight: 500,
            line_height: 1.5,
            letter_spacing: 0.0,
        }
    }
}
