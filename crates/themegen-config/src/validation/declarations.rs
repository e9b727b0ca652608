//! Checks for control values written verbatim into `:root` declarations.

use crate::schema::ThemeControls;

/// Sequences that would end the declaration, open or close a block, or be
/// stripped as a comment when the stylesheet is read back.
const FORBIDDEN: [&str; 7] = [";", "{", "}", "/*", "*/", "\n", "\r"];

/// Every string control must survive as a single declaration value.
pub(crate) fn validate_declaration_values(errors: &mut Vec<String>, controls: &ThemeControls) {
    for (name, value) in declaration_values(controls) {
        if let Some(bad) = FORBIDDEN.iter().find(|seq| value.contains(**seq)) {
            errors.push(format!(
                "{name} = '{}' must not contain {:?}",
                value.escape_debug(),
                bad
            ));
        } else if value.trim().is_empty() {
            errors.push(format!("{name} must not be empty"));
        } else if value.trim() != value {
            errors.push(format!("{name} = '{value}' has surrounding whitespace"));
        }
    }
}

fn declaration_values(c: &ThemeControls) -> Vec<(String, &str)> {
    let mut values: Vec<(String, &str)> = c
        .colors
        .entries()
        .into_iter()
        .map(|(token, value)| (format!("controls.colors.{token}"), value))
        .collect();

    let named: &[(&str, &str)] = &[
        ("controls.typography.font_family", c.typography.font_family.as_str()),
        ("controls.typography.heading_font_family", c.typography.heading_font_family.as_str()),
        ("controls.spacing.spacing_base", c.spacing.spacing_base.as_str()),
        ("controls.spacing.container_padding", c.spacing.container_padding.as_str()),
        ("controls.spacing.component_padding", c.spacing.component_padding.as_str()),
        ("controls.borders.style", c.borders.style.as_str()),
        ("controls.shadows.box_shadow", c.shadows.box_shadow.as_str()),
        ("controls.shadows.box_shadow_hover", c.shadows.box_shadow_hover.as_str()),
        ("controls.shadows.text_shadow", c.shadows.text_shadow.as_str()),
        ("controls.shadows.glow_effect", c.shadows.glow_effect.as_str()),
        ("controls.animation.transition_duration", c.animation.transition_duration.as_str()),
        ("controls.animation.transition_timing", c.animation.transition_timing.as_str()),
        ("controls.animation.hover_scale", c.animation.hover_scale.as_str()),
        ("controls.animation.animation_intensity", c.animation.animation_intensity.as_str()),
        ("controls.links.color", c.links.color.as_str()),
        ("controls.links.hover_color", c.links.hover_color.as_str()),
        ("controls.links.decoration", c.links.decoration.as_str()),
        ("controls.links.focus_ring_color", c.links.focus_ring_color.as_str()),
        ("controls.forms.input_bg", c.forms.input_bg.as_str()),
        ("controls.forms.input_border_color", c.forms.input_border_color.as_str()),
        ("controls.forms.input_focus_border_color", c.forms.input_focus_border_color.as_str()),
        ("controls.forms.input_placeholder_color", c.forms.input_placeholder_color.as_str()),
        ("controls.forms.input_disabled_bg", c.forms.input_disabled_bg.as_str()),
    ];
    values.extend(named.iter().map(|&(name, value)| (name.to_string(), value)));
    values
}
