//! CSS variable validation.
//!
//! Checks a parsed [`VariableMap`] for required names, value formats by
//! variable class, and (in strict mode) names outside the catalog.
//! Validation never fails: every finding is a [`ValidationIssue`].

mod classify;
mod issues;


pub use classify::{
    accepts, classify, is_css_function, is_valid_color, is_valid_rgb, VariableClass,
    COLOR_KEYWORDS, COLOR_TOKENS, FUNCTION_MARKERS, NON_COLOR_KEYWORDS,
};
pub use issues::{IssueKind, ValidationIssue, ValidationReport};

use crate::catalog::VariableCatalog;
use crate::parser::parse_root;
use crate::variables::VariableMap;
use tracing::debug;

/// Validates variable maps against the catalog and classification rules.
#[derive(Debug, Clone, Copy)]
pub struct ValueValidator {
    catalog: &'static VariableCatalog,
    strict: bool,
}

impl Default for ValueValidator {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ValueValidator {
    /// `strict` enables `unknown` warnings for uncatalogued `--bs-` names.
    pub fn new(strict: bool) -> Self {
        Self {
            catalog: VariableCatalog::standard(),
            strict,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Validate an already-parsed map.
    pub fn validate(&self, variables: &VariableMap) -> ValidationReport {
        let mut report = ValidationReport::default();

        if self.strict {
            for name in variables.names() {
                if name.starts_with("--bs-") && !self.catalog.is_known(name) {
                    report.warnings.push(ValidationIssue::unknown(name));
                }
            }
        }

        for name in self.catalog.required() {
            if !variables.contains(name) {
                report.errors.push(ValidationIssue::missing(name));
            }
        }

        for (name, value) in variables.iter() {
            let class = classify(name);
            if accepts(class, value) {
                continue;
            }
            debug!(name, value, ?class, "value rejected");
            report.errors.push(match class {
                VariableClass::RgbTriplet => ValidationIssue::invalid_rgb(name, value),
                _ => ValidationIssue::invalid_color(name, value),
            });
        }

        report
    }

    /// Parse and validate stylesheet text in one pass.
    ///
    /// A structure error short-circuits the other checks.
    pub fn validate_css(&self, css: &str) -> (VariableMap, ValidationReport) {
        let outcome = parse_root(css);
        if !outcome.errors.is_empty() {
            let report = ValidationReport {
                errors: outcome.errors,
                warnings: Vec::new(),
            };
            return (outcome.variables, report);
        }
        let report = self.validate(&outcome.variables);
        (outcome.variables, report)
    }
}
