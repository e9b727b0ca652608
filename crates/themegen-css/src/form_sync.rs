//! Map applied `:root` variables back onto theme controls.

use themegen_config::schema::FONT_OPTIONS;
use themegen_config::ThemeControls;
use tracing::debug;

use crate::generator::length_to_px;
use crate::scales::hex_to_rgb;
use crate::variables::VariableMap;

/// First family of a font stack, unquoted and lowercased.
fn first_family(stack: &str) -> String {
    stack
        .split(',')
        .next()
        .unwrap_or_default()
        .replace(['"', '\''], "")
        .trim()
        .to_lowercase()
}

/// The font option whose leading family matches `value`'s, or `value`
/// itself when none does.
fn match_font_option(value: &str) -> String {
    let wanted = first_family(value);
    if !wanted.is_empty() {
        if let Some(option) = FONT_OPTIONS.iter().find(|opt| first_family(opt) == wanted) {
            return (*option).to_string();
        }
    }
    value.to_string()
}

/// Update `controls` from `variables`. Returns the variable names that
/// changed a control.
///
/// Palette colors are taken only when they are hex. `--bs-border-radius`
/// is read as rem or px and stored as whole px.
pub fn sync_controls_from_variables(controls: &mut ThemeControls, variables: &VariableMap) -> Vec<String> {
    let mut synced = Vec::new();

    for token in ["primary", "secondary", "success", "danger", "warning", "info", "light", "dark"] {
        let name = format!("--bs-{token}");
        let Some(value) = variables.get(&name) else {
            continue;
        };
        if !value.starts_with('#') || hex_to_rgb(value).is_none() {
            debug!(name = %name, value, "skipping non-hex palette value");
            continue;
        }
        if let Some(slot) = controls.colors.get_mut(token) {
            *slot = value.to_string();
            synced.push(name);
        }
    }

    if let Some(value) = variables.get("--bs-border-radius") {
        match length_to_px(value) {
            Some(px) if px.is_finite() && px >= 0.0 => {
                controls.borders.radius = px.round() as u32;
                synced.push("--bs-border-radius".to_string());
            }
            _ => debug!(value, "unreadable border radius"),
        }
    }

    if let Some(value) = variables.get("--bs-font-family") {
        controls.typography.font_family = match_font_option(value);
        synced.push("--bs-font-family".to_string());
    }
    if let Some(value) = variables.get("--bs-heading-font-family") {
        controls.typography.heading_font_family = match_font_option(value);
        synced.push("--bs-heading-font-family".to_string());
    }

    synced
}
