//! Typography control validation.

use crate::schema::ThemeControls;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_typography(errors: &mut Vec<String>, controls: &ThemeControls) {
    let t = &controls.typography;
    validate_range_f64(errors, "controls.typography.font_size", t.font_size, 8.0, 32.0);
    validate_range(errors, "controls.typography.font_weight", t.font_weight, 100, 900);
    validate_range(
        errors,
        "controls.typography.heading_weight",
        t.heading_weight,
        100,
        900,
    );
    validate_range_f64(errors, "controls.typography.line_height", t.line_height, 1.0, 3.0);
    validate_range_f64(
        errors,
        "controls.typography.letter_spacing",
        t.letter_spacing,
        -0.1,
        0.5,
    );
}
