//! Shadow and animation controls.

use serde::{Deserialize, Serialize};

/// Shadow and glow controls. Values are raw CSS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowControls {
    pub box_shadow: String,
    pub box_shadow_hover: String,
    pub text_shadow: String,
    pub glow_effect: String,
}

impl Default for ShadowControls {
    fn default() -> Self {
        Self {
            box_shadow: "0 0.125rem 0.25rem rgba(0, 0, 0, 0.075)".into(),
            box_shadow_hover: "0 0.5rem 1rem rgba(0, 0, 0, 0.15)".into(),
            text_shadow: "none".into(),
            glow_effect: "none".into(),
        }
    }
}

/// Transition and hover animation controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationControls {
    pub transition_duration: String,
    pub transition_timing: String,
    pub hover_scale: String,
    pub animation_intensity: String,
}

impl Default for AnimationControls {
    fn default() -> Self {
        Self {
            transition_duration: "300ms".into(),
            transition_timing: "ease".into(),
            hover_scale: "1".into(),
            animation_intensity: "normal".into(),
        }
    }
}
