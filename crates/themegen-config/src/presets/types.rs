//! Preset type definitions.

use serde::{Deserialize, Serialize};

/// A named theme preset.
///
/// All override groups are optional; only present fields replace control
/// values when the preset is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preset {
    pub name: String,
    pub description: Option<String>,
    pub colors: Option<PresetColors>,
    pub typography: Option<PresetTypography>,
    pub borders: Option<PresetBorders>,
}

impl Preset {
    /// File-name form of the preset name: lowercase, spaces to dashes.
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

pub(crate) fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Optional palette overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetColors {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub success: Option<String>,
    pub danger: Option<String>,
    pub warning: Option<String>,
    pub info: Option<String>,
    pub light: Option<String>,
    pub dark: Option<String>,
}

/// Optional typography overrides. Sizes in px.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetTypography {
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<u32>,
    pub heading_weight: Option<u32>,
    pub line_height: Option<f64>,
    pub letter_spacing: Option<f64>,
}

/// Optional border overrides. Radii in px.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetBorders {
    pub radius: Option<u32>,
    pub radius_sm: Option<u32>,
    pub radius_lg: Option<u32>,
    pub width: Option<u32>,
}
