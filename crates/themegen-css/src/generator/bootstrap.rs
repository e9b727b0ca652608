//! Plain Bootstrap flavor.

use themegen_config::ThemeControls;

use super::root::RootBuilder;
use super::units::{em, px, px_to_rem};
use crate::variables::VariableMap;

const HEADER: &str = "Bootstrap Custom Variables";

/// Fixed rules that consume the `:root` variables.
const OVERRIDES: &str = r#"/* Component Overrides */
.btn-primary {
    background-color: var(--bs-primary);
    border-color: var(--bs-primary);
}

.btn-secondary {
    background-color: var(--bs-secondary);
    border-color: var(--bs-secondary);
}

.btn-success {
    background-color: var(--bs-success);
    border-color: var(--bs-success);
}

.btn-danger {
    background-color: var(--bs-danger);
    border-color: var(--bs-danger);
}

.btn-warning {
    background-color: var(--bs-warning);
    border-color: var(--bs-warning);
}

.btn-info {
    background-color: var(--bs-info);
    border-color: var(--bs-info);
}

/* Text Colors */
.text-primary { color: var(--bs-primary) !important; }
.text-secondary { color: var(--bs-secondary) !important; }
.text-success { color: var(--bs-success) !important; }
.text-danger { color: var(--bs-danger) !important; }
.text-warning { color: var(--bs-warning) !important; }
.text-info { color: var(--bs-info) !important; }

/* Background Colors */
.bg-primary { background-color: var(--bs-primary) !important; }
.bg-secondary { background-color: var(--bs-secondary) !important; }
.bg-success { background-color: var(--bs-success) !important; }
.bg-danger { background-color: var(--bs-danger) !important; }
.bg-warning { background-color: var(--bs-warning) !important; }
.bg-info { background-color: var(--bs-info) !important; }

/* Links & Focus */
a {
    color: var(--bs-link-color);
    text-decoration: var(--bs-link-decoration);
}

a:hover {
    color: var(--bs-link-hover-color);
}

*:focus {
    outline: var(--bs-focus-ring-width) solid rgba(var(--bs-focus-ring-color), var(--bs-focus-ring-opacity));
    outline-offset: 2px;
}

/* Forms & Inputs */
.form-control, .form-select {
    background-color: var(--bs-input-bg);
    border-color: var(--bs-input-border-color);
    padding: var(--bs-input-padding-y) var(--bs-input-padding-x);
}

.form-control:focus, .form-select:focus {
    border-color: var(--bs-input-focus-border-color);
    box-shadow: 0 0 0 0.25rem rgba(var(--bs-input-focus-border-color), 0.25);
}

.form-control::placeholder {
    color: var(--bs-input-placeholder-color);
}

.form-control:disabled, .form-select:disabled {
    background-color: var(--bs-input-disabled-bg);
}

.form-label {
    font-size: var(--bs-form-label-font-size);
}

/* Grid System */
.container {
    --bs-gutter-x: var(--bs-grid-gutter-width);
}

@media (min-width: 576px) {
    .container { max-width: var(--bs-container-max-width-sm); }
}
@media (min-width: 768px) {
    .container { max-width: var(--bs-container-max-width-md); }
}
@media (min-width: 992px) {
    .container { max-width: var(--bs-container-max-width-lg); }
}
@media (min-width: 1200px) {
    .container { max-width: var(--bs-container-max-width-xl); }
}

/* Typography */
body {
    font-family: var(--bs-font-family);
    font-size: var(--bs-body-font-size);
    font-weight: var(--bs-font-weight);
    line-height: var(--bs-body-line-height);
    letter-spacing: var(--bs-letter-spacing);
}

h1, h2, h3, h4, h5, h6 {
    font-family: var(--bs-heading-font-family);
    font-weight: var(--bs-heading-weight);
}

/* Spacing */
.container, .container-fluid {
    padding-left: var(--bs-container-padding);
    padding-right: var(--bs-container-padding);
}

.btn {
    padding: var(--bs-component-padding);
}

/* Borders & Radius */
.btn, .card, .alert, .modal-content, .dropdown-menu,
.form-control, .form-select {
    border-radius: var(--bs-border-radius);
    border-width: var(--bs-border-width);
    border-style: var(--bs-border-style);
}

.btn-sm { border-radius: var(--bs-border-radius-sm); }
.btn-lg { border-radius: var(--bs-border-radius-lg); }
.rounded-pill { border-radius: 50rem !important; }

/* Shadows & Effects */
.card, .btn, .dropdown-menu {
    box-shadow: var(--bs-box-shadow);
    transition: all var(--bs-transition-duration) var(--bs-transition-timing);
}

.btn:hover, .card:hover {
    box-shadow: var(--bs-box-shadow-hover);
    transform: scale(var(--bs-hover-scale));
}

.text-shadow {
    text-shadow: var(--bs-text-shadow);
}

.glow {
    box-shadow: var(--bs-glow-effect);
}"#;

/// Render the Bootstrap flavor: `:root` block plus override rules.
pub(crate) fn render(controls: &ThemeControls) -> (String, VariableMap) {
    let mut root = RootBuilder::new(HEADER);

    for (token, value) in controls.colors.entries() {
        root.var(&format!("--bs-{token}"), value);
    }

    let t = &controls.typography;
    root.var("--bs-font-family", t.font_family.as_str())
        .var("--bs-heading-font-family", t.heading_font_family.as_str())
        .var("--bs-body-font-size", px_to_rem(t.font_size))
        .var("--bs-font-weight", t.font_weight.to_string())
        .var("--bs-heading-weight", t.heading_weight.to_string())
        .var("--bs-body-line-height", t.line_height.to_string())
        .var("--bs-letter-spacing", em(t.letter_spacing));

    let s = &controls.spacing;
    root.var("--bs-spacing-base", s.spacing_base.as_str())
        .var("--bs-container-padding", s.container_padding.as_str())
        .var("--bs-component-padding", s.component_padding.as_str());

    let b = &controls.borders;
    root.var("--bs-border-radius", px_to_rem(f64::from(b.radius)))
        .var("--bs-border-radius-sm", px_to_rem(f64::from(b.radius_sm)))
        .var("--bs-border-radius-lg", px_to_rem(f64::from(b.radius_lg)))
        .var("--bs-border-width", px(b.width))
        .var("--bs-border-style", b.style.as_str());

    let sh = &controls.shadows;
    root.var("--bs-box-shadow", sh.box_shadow.as_str())
        .var("--bs-box-shadow-hover", sh.box_shadow_hover.as_str())
        .var("--bs-text-shadow", sh.text_shadow.as_str())
        .var("--bs-glow-effect", sh.glow_effect.as_str());

    let a = &controls.animation;
    root.var("--bs-transition-duration", a.transition_duration.as_str())
        .var("--bs-transition-timing", a.transition_timing.as_str())
        .var("--bs-hover-scale", a.hover_scale.as_str())
        .var("--bs-animation-intensity", a.animation_intensity.as_str());

    let l = &controls.links;
    root.var("--bs-link-color", l.color.as_str())
        .var("--bs-link-hover-color", l.hover_color.as_str())
        .var("--bs-link-decoration", l.decoration.as_str())
        .var("--bs-focus-ring-color", l.focus_ring_color.as_str())
        .var("--bs-focus-ring-width", px(l.focus_ring_width))
        .var("--bs-focus-ring-opacity", l.focus_ring_opacity.to_string());

    let f = &controls.forms;
    root.var("--bs-input-bg", f.input_bg.as_str())
        .var("--bs-input-border-color", f.input_border_color.as_str())
        .var("--bs-input-focus-border-color", f.input_focus_border_color.as_str())
        .var("--bs-input-placeholder-color", f.input_placeholder_color.as_str())
        .var("--bs-input-disabled-bg", f.input_disabled_bg.as_str())
        .var("--bs-input-padding-y", px_to_rem(f64::from(f.input_padding_y)))
        .var("--bs-input-padding-x", px_to_rem(f64::from(f.input_padding_x)))
        .var("--bs-form-label-font-size", px_to_rem(f64::from(f.label_font_size)));

    let g = &controls.grid;
    root.var("--bs-grid-columns", g.columns.to_string())
        .var("--bs-grid-gutter-width", px(g.gutter_width))
        .var("--bs-container-max-width-sm", px(g.container_max_width_sm))
        .var("--bs-container-max-width-md", px(g.container_max_width_md))
        .var("--bs-container-max-width-lg", px(g.container_max_width_lg))
        .var("--bs-container-max-width-xl", px(g.container_max_width_xl));

    let (mut text, variables) = root.finish();
    text.push_str(OVERRIDES);
    (text, variables)
}
