//! Dynamic Framework flavor: `-rgb` companions, color scales, extended
//! spacing and nav tokens, with overrides going through `rgb(var(..))`.

use themegen_config::ThemeControls;

use super::root::RootBuilder;
use super::units::{em, px, px_to_rem};
use crate::scales::{color_scale_steps, extended_spacing, rgb_triplet, SOFT_STEP, SURFACE_STEP};
use crate::variables::VariableMap;

const HEADER: &str = "Dynamic Framework Theme Variables";

const NAV_TOKENS: [(&str, &str); 7] = [
    ("--bs-nav-tabs-nav-gap", "0"),
    ("--bs-nav-tabs-link-border-active-font-weight", "600"),
    ("--bs-nav-tabs-border-color", "rgba(0, 0, 0, 0.1)"),
    ("--bs-nav-link-padding-x", "1rem"),
    ("--bs-nav-link-padding-y", "0.75rem"),
    ("--bs-nav-link-hover-bg", "transparent"),
    ("--bs-nav-link-hover-color", "rgb(var(--bs-primary-rgb))"),
];

/// Palette tokens with utility classes (light and dark have none).
const UTILITY_TOKENS: [&str; 6] = ["primary", "secondary", "success", "danger", "warning", "info"];

/// Render the Dynamic flavor.
pub(crate) fn render(controls: &ThemeControls) -> (String, VariableMap) {
    let palette = controls.colors.entries();
    // grays follow the secondary color
    let gray = controls.colors.secondary.as_str();

    let mut root = RootBuilder::new(HEADER);

    root.section("Base Colors (Dynamic Framework compatible)");
    for (token, color) in palette {
        root.var(&format!("--bs-{token}-rgb"), rgb_triplet(color));
    }
    root.var("--bs-gray-rgb", rgb_triplet(gray));
    for (token, color) in palette {
        root.var(&format!("--bs-{token}"), color);
    }

    root.section("Dynamic Framework Color Scales");
    let scale_sources = palette
        .iter()
        .map(|(token, color)| (*token, *color))
        .chain(std::iter::once(("gray", gray)));
    for (name, color) in scale_sources {
        let steps = color_scale_steps(color);
        if steps.is_empty() {
            tracing::debug!(name, color, "no scale for unparseable color");
            continue;
        }
        root.section(&format!("{name} scales"));
        for step in &steps {
            root.var(&format!("--bs-{name}-{}-rgb", step.step), step.rgb.as_str());
        }
        root.var(
            &format!("--bs-surface-{name}-rgb"),
            format!("var(--bs-{name}-{SURFACE_STEP}-rgb)"),
        );
        root.var(
            &format!("--bs-{name}-soft-rgb"),
            format!("var(--bs-{name}-{SOFT_STEP}-rgb)"),
        );
    }

    root.section("Extended Spacing (Dynamic Framework)");
    for (name, value) in extended_spacing() {
        root.var(&name, value);
    }

    root.section("Dynamic Framework Nav Variables");
    for (name, value) in NAV_TOKENS {
        root.var(name, value);
    }

    let t = &controls.typography;
    root.section("Typography")
        .var("--bs-font-family", t.font_family.as_str())
        .var("--bs-heading-font-family", t.heading_font_family.as_str())
        .var("--bs-body-font-size", px_to_rem(t.font_size))
        .var("--bs-font-weight", t.font_weight.to_string())
        .var("--bs-heading-weight", t.heading_weight.to_string())
        .var("--bs-body-line-height", t.line_height.to_string())
        .var("--bs-letter-spacing", em(t.letter_spacing));

    let b = &controls.borders;
    root.section("Borders & Radius")
        .var("--bs-border-radius", px_to_rem(f64::from(b.radius)))
        .var("--bs-border-radius-sm", px_to_rem(f64::from(b.radius_sm)))
        .var("--bs-border-radius-lg", px_to_rem(f64::from(b.radius_lg)))
        .var("--bs-border-width", px(b.width))
        .var("--bs-border-style", b.style.as_str());

    let (mut text, variables) = root.finish();
    text.push_str(&overrides());
    (text, variables)
}

/// Utility rules; every color goes through its `-rgb` companion.
fn overrides() -> String {
    let mut css = String::from("/* Component Overrides */\n");
    for token in UTILITY_TOKENS {
        css.push_str(&format!(
            ".btn-{token} {{\n    background-color: rgb(var(--bs-{token}-rgb));\n    border-color: rgb(var(--bs-{token}-rgb));\n}}\n\n"
        ));
    }

    css.push_str("/* Text Colors */\n");
    for token in UTILITY_TOKENS {
        css.push_str(&format!(
            ".text-{token} {{ color: rgb(var(--bs-{token}-rgb)) !important; }}\n"
        ));
    }
    css.push('\n');

    css.push_str("/* Background Colors */\n");
    for token in UTILITY_TOKENS {
        css.push_str(&format!(
            ".bg-{token} {{ background-color: rgb(var(--bs-{token}-rgb)) !important; }}\n"
        ));
    }
    css.push('\n');

    css.push_str("/* Surface Colors (Dynamic Framework) */\n");
    for token in UTILITY_TOKENS {
        css.push_str(&format!(
            ".bg-surface-{token} {{ background-color: rgb(var(--bs-surface-{token}-rgb)) !important; }}\n"
        ));
    }
    css.push('\n');

    css.push_str("/* Soft Colors (Dynamic Framework) */\n");
    for token in UTILITY_TOKENS {
        css.push_str(&format!(
            ".bg-{token}-soft {{ background-color: rgb(var(--bs-{token}-soft-rgb)) !important; }}\n"
        ));
    }
    css
}
