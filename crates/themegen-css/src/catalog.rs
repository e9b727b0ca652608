//! Recognised Bootstrap custom-property names.
//!
//! The catalog is the allow-list used by strict validation: any `--bs-`
//! name outside it is reported as `unknown`. It covers stock Bootstrap
//! tokens plus every name either generator flavor emits.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Names whose absence is a hard validation error.
pub const REQUIRED: [&str; 6] = [
    "--bs-primary",
    "--bs-secondary",
    "--bs-success",
    "--bs-danger",
    "--bs-warning",
    "--bs-info",
];

/// Stock Bootstrap 5 tokens.
const STANDARD: &[&str] = &[
    // core colors
    "--bs-primary",
    "--bs-primary-rgb",
    "--bs-secondary",
    "--bs-secondary-rgb",
    "--bs-success",
    "--bs-success-rgb",
    "--bs-danger",
    "--bs-danger-rgb",
    "--bs-warning",
    "--bs-warning-rgb",
    "--bs-info",
    "--bs-info-rgb",
    "--bs-light",
    "--bs-light-rgb",
    "--bs-dark",
    "--bs-dark-rgb",
    // typography
    "--bs-font-family",
    "--bs-heading-font-family",
    "--bs-body-font-size",
    "--bs-body-font-weight",
    "--bs-body-line-height",
    "--bs-letter-spacing",
    "--bs-h1-font-size",
    "--bs-h2-font-size",
    "--bs-h3-font-size",
    "--bs-h4-font-size",
    "--bs-h5-font-size",
    "--bs-h6-font-size",
    "--bs-heading-font-weight",
    "--bs-heading-line-height",
    // borders and shadows
    "--bs-border-radius",
    "--bs-border-radius-sm",
    "--bs-border-radius-lg",
    "--bs-border-width",
    "--bs-border-color",
    "--bs-box-shadow",
    "--bs-box-shadow-sm",
    "--bs-box-shadow-lg",
    // body
    "--bs-body-bg",
    "--bs-body-bg-rgb",
    "--bs-body-color",
    "--bs-body-color-rgb",
    "--bs-emphasis-color",
    "--bs-emphasis-color-rgb",
    // links
    "--bs-link-color",
    "--bs-link-color-rgb",
    "--bs-link-hover-color",
    "--bs-link-hover-color-rgb",
    "--bs-link-decoration",
    "--bs-link-hover-decoration",
    // components
    "--bs-card-bg",
    "--bs-card-border-color",
    "--bs-nav-link-color",
    "--bs-nav-link-hover-color",
    "--bs-nav-tabs-border-color",
    "--bs-nav-tabs-link-active-color",
    "--bs-navbar-color",
    "--bs-navbar-hover-color",
    "--bs-navbar-active-color",
    "--bs-navbar-brand-color",
];

/// Tokens introduced by the customizer controls.
const CUSTOMIZER: &[&str] = &[
    "--bs-font-weight",
    "--bs-heading-weight",
    "--bs-spacing-base",
    "--bs-container-padding",
    "--bs-component-padding",
    "--bs-border-style",
    "--bs-box-shadow-hover",
    "--bs-text-shadow",
    "--bs-glow-effect",
    "--bs-transition-duration",
    "--bs-transition-timing",
    "--bs-hover-scale",
    "--bs-animation-intensity",
    "--bs-focus-ring-color",
    "--bs-focus-ring-width",
    "--bs-focus-ring-opacity",
    "--bs-input-bg",
    "--bs-input-border-color",
    "--bs-input-focus-border-color",
    "--bs-input-placeholder-color",
    "--bs-input-disabled-bg",
    "--bs-input-padding-y",
    "--bs-input-padding-x",
    "--bs-form-label-font-size",
    "--bs-grid-columns",
    "--bs-grid-gutter-width",
    "--bs-container-max-width-sm",
    "--bs-container-max-width-md",
    "--bs-container-max-width-lg",
    "--bs-container-max-width-xl",
    // dynamic flavor
    "--bs-gray-rgb",
    "--bs-nav-tabs-nav-gap",
    "--bs-nav-tabs-link-border-active-font-weight",
    "--bs-nav-link-padding-x",
    "--bs-nav-link-padding-y",
    "--bs-nav-link-hover-bg",
];

/// Generated families: color scales, surface/soft aliases, extended spacers.
static FAMILY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^--bs-(?:(?:primary|secondary|success|danger|warning|info|light|dark|gray)-(?:25|50|[1-9]00|soft)-rgb|surface-(?:primary|secondary|success|danger|warning|info|light|dark|gray)-rgb|ref-spacer-\d+)$",
    )
    .unwrap()
});

static CATALOG: LazyLock<VariableCatalog> = LazyLock::new(|| VariableCatalog {
    names: STANDARD.iter().chain(CUSTOMIZER).copied().collect(),
});

/// The set of recognised variable names.
#[derive(Debug)]
pub struct VariableCatalog {
    names: HashSet<&'static str>,
}

impl VariableCatalog {
    /// The shared catalog instance.
    pub fn standard() -> &'static VariableCatalog {
        &CATALOG
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.names.contains(name) || FAMILY_RE.is_match(name)
    }

    pub fn required(&self) -> &'static [&'static str] {
        &REQUIRED
    }

    /// Number of explicitly listed names (generated families excluded).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Explicitly listed names, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.iter().copied()
    }
}
