//! Tests for control color parsing.

use super::*;

#[test]
fn parse_hex_6_digit() {
    let c = parse_color("#1e3a8a").unwrap();
    assert_eq!(c, Color::from_rgba(30, 58, 138, 255));
}

#[test]
fn parse_hex_8_digit() {
    let c = parse_color("#0d6efd80").unwrap();
    assert_eq!(c, Color::from_rgba(13, 110, 253, 128));
}

#[test]
fn parse_hex_3_digit() {
    let c = parse_color("#f00").unwrap();
    assert_eq!(c, Color::from_rgba(255, 0, 0, 255));
}

#[test]
fn parse_rgb_without_alpha_is_opaque() {
    let c = parse_color("rgb(13, 110, 253)").unwrap();
    assert_eq!(c, Color::from_rgba(13, 110, 253, 255));
}

#[test]
fn parse_rgba_float_alpha() {
    let c = parse_color("rgba(0,0,0,0.5)").unwrap();
    assert_eq!(c.a, 128);
}

#[test]
fn parse_rgba_with_spaces() {
    let c = parse_color("rgba( 100 , 180 , 255 , 0.9 )").unwrap();
    assert_eq!((c.r, c.g, c.b), (100, 180, 255));
    // 0.9 * 255 = 229.5 -> 230
    assert_eq!(c.a, 230);
}

#[test]
fn parse_color_invalid_format() {
    assert!(parse_color("not-a-color").is_err());
    assert!(parse_color("").is_err());
    assert!(parse_color("#xyz").is_err());
    assert!(parse_color("#12345").is_err());
    assert!(parse_color("rgba(300,0,0,1.0)").is_err());
    assert!(parse_color("rgba(0,0,0,1.5)").is_err());
}

#[test]
fn validate_color_rejects_non_literal_forms() {
    assert!(!validate_color("var(--bs-primary)"));
    assert!(!validate_color("transparent"));
    assert!(!validate_color("rgb(10,20)"));
}

#[test]
fn all_default_control_colors_parse() {
    let controls = crate::schema::ThemeControls::default();
    let mut colors: Vec<&str> = controls.colors.entries().iter().map(|(_, v)| *v).collect();
    colors.extend([
        controls.links.color.as_str(),
        controls.links.hover_color.as_str(),
        controls.links.focus_ring_color.as_str(),
        controls.forms.input_bg.as_str(),
        controls.forms.input_border_color.as_str(),
        controls.forms.input_focus_border_color.as_str(),
        controls.forms.input_placeholder_color.as_str(),
        controls.forms.input_disabled_bg.as_str(),
    ]);
    for c in &colors {
        assert!(parse_color(c).is_ok(), "failed to parse default color: {c}");
    }
}
