//! Preset application.

use super::types::Preset;
use crate::schema::ThemeControls;

/// Apply a preset to controls, replacing only the fields it sets.
pub fn apply_preset(controls: &mut ThemeControls, preset: &Preset) {
    if let Some(ref colors) = preset.colors {
        let c = &mut controls.colors;
        for (target, source) in [
            (&mut c.primary, &colors.primary),
            (&mut c.secondary, &colors.secondary),
            (&mut c.success, &colors.success),
            (&mut c.danger, &colors.danger),
            (&mut c.warning, &colors.warning),
            (&mut c.info, &colors.info),
            (&mut c.light, &colors.light),
            (&mut c.dark, &colors.dark),
        ] {
            if let Some(value) = source {
                *target = value.clone();
            }
        }
    }

    if let Some(ref t) = preset.typography {
        let typography = &mut controls.typography;
        if let Some(ref family) = t.font_family {
            typography.font_family = family.clone();
        }
        if let Some(size) = t.font_size {
            typography.font_size = size;
        }
        if let Some(weight) = t.font_weight {
            typography.font_weight = weight;
        }
        if let Some(weight) = t.heading_weight {
            typography.heading_weight = weight;
        }
        if let Some(line_height) = t.line_height {
            typography.line_height = line_height;
        }
        if let Some(spacing) = t.letter_spacing {
            typography.letter_spacing = spacing;
        }
    }

    if let Some(ref b) = preset.borders {
        let borders = &mut controls.borders;
        if let Some(radius) = b.radius {
            borders.radius = radius;
        }
        if let Some(radius) = b.radius_sm {
            borders.radius_sm = radius;
        }
        if let Some(radius) = b.radius_lg {
            borders.radius_lg = radius;
        }
        if let Some(width) = b.width {
            borders.width = width;
        }
    }
}
