//! Validation issue types.

use serde::Serialize;
use std::fmt;

use super::classify::is_css_function;

/// What went wrong with a stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    /// A required variable is absent.
    Missing,
    /// A value does not fit its variable's class.
    InvalidValue,
    /// A `--bs-` name outside the catalog (strict mode only).
    Unknown,
    /// No `:root` block.
    Structure,
}

impl IssueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueKind::Missing => "missing",
            IssueKind::InvalidValue => "invalid-value",
            IssueKind::Unknown => "unknown",
            IssueKind::Structure => "structure",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validation finding. Never an `Err`: issues are data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub kind: IssueKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub message: String,
}

impl ValidationIssue {
    pub fn structure() -> Self {
        Self {
            kind: IssueKind::Structure,
            variable_name: None,
            value: None,
            message: "No :root selector found. CSS variables must be defined within :root { }"
                .into(),
        }
    }

    pub fn missing(name: &str) -> Self {
        Self {
            kind: IssueKind::Missing,
            variable_name: Some(name.into()),
            value: None,
            message: format!("Missing required variable: {name}"),
        }
    }

    pub fn invalid_color(name: &str, value: &str) -> Self {
        Self {
            kind: IssueKind::InvalidValue,
            variable_name: Some(name.into()),
            value: Some(value.into()),
            message: format!("Invalid color value for {name}: \"{value}\""),
        }
    }

    pub fn invalid_rgb(name: &str, value: &str) -> Self {
        Self {
            kind: IssueKind::InvalidValue,
            variable_name: Some(name.into()),
            value: Some(value.into()),
            message: format!(
                "Invalid RGB value for {name}: \"{value}\". Expected format: \"r, g, b\" or CSS function"
            ),
        }
    }

    pub fn unknown(name: &str) -> Self {
        Self {
            kind: IssueKind::Unknown,
            variable_name: Some(name.into()),
            value: None,
            message: format!("\"{name}\" is not a standard Bootstrap variable"),
        }
    }

    /// True unless the offending value is a recognised CSS function.
    pub fn is_critical(&self) -> bool {
        !self.value.as_deref().is_some_and(is_css_function)
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

/// Errors and warnings from one validation pass, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Errors that block an apply.
    pub fn critical_errors(&self) -> Vec<ValidationIssue> {
        self.errors.iter().filter(|e| e.is_critical()).cloned().collect()
    }

    pub fn has_critical_errors(&self) -> bool {
        self.errors.iter().any(ValidationIssue::is_critical)
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}
