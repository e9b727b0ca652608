//! Color control validation (palette, links, form inputs).

use crate::colors::validate_color;
use crate::schema::ThemeControls;

/// Every color-typed control must hold a hex or rgb()/rgba() literal.
pub(crate) fn validate_colors(errors: &mut Vec<String>, controls: &ThemeControls) {
    for (token, value) in controls.colors.entries() {
        check(errors, &format!("controls.colors.{token}"), value);
    }

    let links = &controls.links;
    check(errors, "controls.links.color", &links.color);
    check(errors, "controls.links.hover_color", &links.hover_color);
    check(errors, "controls.links.focus_ring_color", &links.focus_ring_color);

    let forms = &controls.forms;
    check(errors, "controls.forms.input_bg", &forms.input_bg);
    check(errors, "controls.forms.input_border_color", &forms.input_border_color);
    check(
        errors,
        "controls.forms.input_focus_border_color",
        &forms.input_focus_border_color,
    );
    check(
        errors,
        "controls.forms.input_placeholder_color",
        &forms.input_placeholder_color,
    );
    check(errors, "controls.forms.input_disabled_bg", &forms.input_disabled_bg);
}

fn check(errors: &mut Vec<String>, name: &str, value: &str) {
    if !validate_color(value) {
        errors.push(format!("{name} = '{value}' is not a valid color"));
    }
}
