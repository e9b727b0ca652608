//! Border, link/form and grid control validation.

use crate::schema::ThemeControls;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_borders(errors: &mut Vec<String>, controls: &ThemeControls) {
    let b = &controls.borders;
    validate_range(errors, "controls.borders.radius", b.radius, 0, 50);
    validate_range(errors, "controls.borders.radius_sm", b.radius_sm, 0, 50);
    validate_range(errors, "controls.borders.radius_lg", b.radius_lg, 0, 50);
    validate_range(errors, "controls.borders.width", b.width, 0, 10);
}

pub(crate) fn validate_forms(errors: &mut Vec<String>, controls: &ThemeControls) {
    let l = &controls.links;
    validate_range(errors, "controls.links.focus_ring_width", l.focus_ring_width, 0, 10);
    validate_range_f64(
        errors,
        "controls.links.focus_ring_opacity",
        l.focus_ring_opacity,
        0.0,
        1.0,
    );

    let f = &controls.forms;
    validate_range(errors, "controls.forms.input_padding_y", f.input_padding_y, 0, 40);
    validate_range(errors, "controls.forms.input_padding_x", f.input_padding_x, 0, 40);
    validate_range(errors, "controls.forms.label_font_size", f.label_font_size, 8, 32);
}

pub(crate) fn validate_grid(errors: &mut Vec<String>, controls: &ThemeControls) {
    let g = &controls.grid;
    validate_range(errors, "controls.grid.columns", g.columns, 1, 24);
    validate_range(errors, "controls.grid.gutter_width", g.gutter_width, 0, 100);
    for (name, value) in [
        ("controls.grid.container_max_width_sm", g.container_max_width_sm),
        ("controls.grid.container_max_width_md", g.container_max_width_md),
        ("controls.grid.container_max_width_lg", g.container_max_width_lg),
        ("controls.grid.container_max_width_xl", g.container_max_width_xl),
    ] {
        validate_range(errors, name, value, 300, 2000);
    }
}
