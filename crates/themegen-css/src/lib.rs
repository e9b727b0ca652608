//! Bootstrap CSS custom-property tooling.
//!
//! Parses `:root` blocks into ordered variable maps, validates them against
//! a catalog of Bootstrap names and per-class value rules, generates
//! stylesheets from theme controls, and runs the edit/apply session that
//! ties those together.

pub mod catalog;
pub mod categorize;
pub mod editor;
pub mod form_sync;
pub mod generator;
pub mod parser;
pub mod scales;
pub mod surprise;
pub mod validator;
pub mod variables;

pub use catalog::VariableCatalog;
pub use categorize::{categorize, Category, CategorizedVariables};
pub use editor::{ApplyOutcome, EditorSession, EditorState};
pub use form_sync::sync_controls_from_variables;
pub use generator::{render, GeneratedCss, InMemoryStyle, StyleSink, ThemeGenerator};
pub use parser::{extract_all, parse_root, ParseOutcome};
pub use surprise::surprise;
pub use validator::{IssueKind, ValidationIssue, ValidationReport, ValueValidator};
pub use variables::VariableMap;
