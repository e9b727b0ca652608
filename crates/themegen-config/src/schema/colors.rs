//! Palette controls: the eight Bootstrap theme colors.

use serde::{Deserialize, Serialize};

/// Theme palette. Values are hex strings as produced by a color picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorControls {
    pub primary: String,
    pub secondary: String,
    pub success: String,
    pub danger: String,
    pub warning: String,
    pub info: String,
    pub light: String,
    pub dark: String,
}

impl ColorControls {
    /// Palette entries as `(token, value)` in Bootstrap's canonical order.
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("success", &self.success),
            ("danger", &self.danger),
            ("warning", &self.warning),
            ("info", &self.info),
            ("light", &self.light),
            ("dark", &self.dark),
        ]
    }

    /// Mutable access by palette token (`"primary"`, `"danger"`, ...).
    pub fn get_mut(&mut self, token: &str) -> Option<&mut String> {
        match token {
            "primary" => Some(&mut self.primary),
            "secondary" => Some(&mut self.secondary),
            "success" => Some(&mut self.success),
            "danger" => Some(&mut self.danger),
            "warning" => Some(&mut self.warning),
            "info" => Some(&mut self.info),
            "light" => Some(&mut self.light),
            "dark" => Some(&mut self.dark),
            _ => None,
        }
    }
}

impl Default for ColorControls {
    fn default() -> Self {
        Self {
            primary: "#0d6efd".into(),
            secondary: "#6c757d".into(),
            success: "#198754".into(),
            danger: "#dc3545".into(),
            warning: "#ffc107".into(),
            info: "#0dcaf0".into(),
            light: "#f8f9fa".into(),
            dark: "#212529".into(),
        }
    }
}
