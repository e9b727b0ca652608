//! Link, focus-ring and form input controls.

use serde::{Deserialize, Serialize};

/// Link and focus-ring controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkControls {
    pub color: String,
    pub hover_color: String,
    pub decoration: String,
    pub focus_ring_color: String,
    /// Focus ring width in px (valid range: 0-10).
    pub focus_ring_width: u32,
    /// Focus ring opacity (valid range: 0.0-1.0).
    pub focus_ring_opacity: f64,
}

impl Default for LinkControls {
    fn default() -> Self {
        Self {
            color: "#0d6efd".into(),
            hover_color: "#0a58ca".into(),
            decoration: "underline".into(),
            focus_ring_color: "#0d6efd".into(),
            focus_ring_width: 3,
            focus_ring_opacity: 0.25,
        }
    }
}

/// Form input controls. Paddings and label size are px, emitted as rem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormControls {
    pub input_bg: String,
    pub input_border_color: String,
    pub input_focus_border_color: String,
    pub input_placeholder_color: String,
    pub input_disabled_bg: String,
    /// Vertical input padding in px (valid range: 0-40).
    pub input_padding_y: u32,
    /// Horizontal input padding in px (valid range: 0-40).
    pub input_padding_x: u32,
    /// Label font size in px (valid range: 8-32).
    pub label_font_size: u32,
}

impl Default for FormControls {
    fn default() -> Self {
        Self {
            input_bg: "#ffffff".into(),
            input_border_color: "#ced4da".into(),
            input_focus_border_color: "#0d6efd".into(),
            input_placeholder_color: "#6c757d".into(),
            input_disabled_bg: "#e9ecef".into(),
            input_padding_y: 6,
            input_padding_x: 12,
            label_font_size: 14,
        }
    }
}
