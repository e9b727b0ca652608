//! Spacing, border and grid controls.

use serde::{Deserialize, Serialize};

/// Spacing controls. Values are free-form CSS lengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacingControls {
    pub spacing_base: String,
    pub container_padding: String,
    pub component_padding: String,
}

impl Default for SpacingControls {
    fn default() -> Self {
        Self {
            spacing_base: "1rem".into(),
            container_padding: "0.75rem".into(),
            component_padding: "0.375rem 0.75rem".into(),
        }
    }
}

/// Border controls. Radii are px (emitted as rem), width stays px.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderControls {
    /// Default radius in px (valid range: 0-50).
    pub radius: u32,
    /// Small radius in px (valid range: 0-50).
    pub radius_sm: u32,
    /// Large radius in px (valid range: 0-50).
    pub radius_lg: u32,
    /// Border width in px (valid range: 0-10).
    pub width: u32,
    pub style: String,
}

impl Default for BorderControls {
    fn default() -> Self {
        Self {
            radius: 6,
            radius_sm: 4,
            radius_lg: 8,
            width: 1,
            style: "solid".into(),
        }
    }
}

/// Grid controls, all px except the column count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridControls {
    /// Column count (valid range: 1-24).
    pub columns: u32,
    /// Gutter width in px (valid range: 0-100).
    pub gutter_width: u32,
    pub container_max_width_sm: u32,
    pub container_max_width_md: u32,
    pub container_max_width_lg: u32,
    pub container_max_width_xl: u32,
}

impl Default for GridControls {
    fn default() -> Self {
        Self {
            columns: 12,
            gutter_width: 24,
            container_max_width_sm: 540,
            container_max_width_md: 720,
            container_max_width_lg: 960,
            container_max_width_xl: 1140,
        }
    }
}
