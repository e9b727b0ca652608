//! Edit/apply session for the generated stylesheet.
//!
//! The session owns the generator (and so the last generated text) and
//! the validator. Text enters through [`EditorSession::toggle_edit`],
//! leaves through [`EditorSession::apply`] or [`EditorSession::cancel`].

use std::time::Duration;

use themegen_common::ThemegenError;
use themegen_config::schema::EditorConfig;
use themegen_config::{CssFlavor, ThemeControls};
use tracing::{debug, info, warn};

use crate::generator::{apply_variables, GeneratedCss, StyleSink, ThemeGenerator};
use crate::parser::parse_root;
use crate::validator::{ValidationIssue, ValueValidator};
use crate::variables::VariableMap;

/// Default time apply warnings stay visible.
pub const DEFAULT_WARNING_DISPLAY: Duration = Duration::from_secs(5);

/// Where the session is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    /// Showing generated output read-only.
    #[default]
    Display,
    /// Text is editable; `snapshot` is what was shown on entry.
    Editing { snapshot: String },
}

/// Result of [`EditorSession::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    /// Variables were written to the sink and the session is back in
    /// display mode.
    Applied {
        variables: VariableMap,
        warnings: Vec<ValidationIssue>,
        warning_display: Duration,
    },
    /// Nothing was written; the session is still editing.
    Rejected {
        errors: Vec<ValidationIssue>,
        warnings: Vec<ValidationIssue>,
    },
}

impl ApplyOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ApplyOutcome::Applied { .. })
    }
}

/// Explicit edit/apply state machine.
#[derive(Debug, Clone)]
pub struct EditorSession {
    generator: ThemeGenerator,
    validator: ValueValidator,
    state: EditorState,
    warning_display: Duration,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(CssFlavor::default(), false)
    }
}

impl EditorSession {
    pub fn new(flavor: CssFlavor, strict: bool) -> Self {
        Self {
            generator: ThemeGenerator::new(flavor),
            validator: ValueValidator::new(strict),
            state: EditorState::Display,
            warning_display: DEFAULT_WARNING_DISPLAY,
        }
    }

    /// Build from the `[editor]` config section.
    pub fn from_config(flavor: CssFlavor, config: &EditorConfig) -> Self {
        let mut session = Self::new(flavor, config.strict);
        session.warning_display = Duration::from_secs(config.warning_display_secs);
        session
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditorState::Editing { .. })
    }

    pub fn generator(&self) -> &ThemeGenerator {
        &self.generator
    }

    pub fn warning_display(&self) -> Duration {
        self.warning_display
    }

    /// Regenerate from controls and push the result to `sink`.
    pub fn generate(&mut self, controls: &ThemeControls, sink: &mut dyn StyleSink) -> &GeneratedCss {
        self.generator.generate(controls, sink)
    }

    /// Display enters editing with `current_text` as the snapshot. Editing
    /// leaves without applying anything.
    pub fn toggle_edit(&mut self, current_text: &str) -> &EditorState {
        self.state = match self.state {
            EditorState::Display => {
                debug!(bytes = current_text.len(), "entering edit mode");
                EditorState::Editing {
                    snapshot: current_text.to_string(),
                }
            }
            EditorState::Editing { .. } => {
                debug!("leaving edit mode without applying");
                EditorState::Display
            }
        };
        &self.state
    }

    /// Validate `text` and, when nothing critical is found, write its
    /// `:root` variables to `sink`.
    ///
    /// Text identical to the last generated stylesheet skips validation.
    /// Errors only while editing.
    pub fn apply(&mut self, text: &str, sink: &mut dyn StyleSink) -> Result<ApplyOutcome, ThemegenError> {
        if !self.is_editing() {
            return Err(ThemegenError::Other("apply requires edit mode".into()));
        }

        let unchanged = self.generator.last_text() == Some(text);
        let (variables, warnings) = if unchanged {
            debug!("text matches generated output, skipping validation");
            (parse_root(text).variables, Vec::new())
        } else {
            let (variables, report) = self.validator.validate_css(text);
            let critical = report.critical_errors();
            if !critical.is_empty() {
                warn!(
                    errors = critical.len(),
                    warnings = report.warnings.len(),
                    "edited stylesheet rejected"
                );
                return Ok(ApplyOutcome::Rejected {
                    errors: critical,
                    warnings: report.warnings,
                });
            }
            if !report.errors.is_empty() {
                debug!(
                    ignored = report.errors.len(),
                    "non-critical errors on function values"
                );
            }
            (variables, report.warnings)
        };

        let written = apply_variables(&variables, sink);
        info!(written, warnings = warnings.len(), "edited stylesheet applied");
        self.state = EditorState::Display;

        Ok(ApplyOutcome::Applied {
            variables,
            warnings,
            warning_display: self.warning_display,
        })
    }

    /// Leave editing and return the snapshot to restore. `None` when not
    /// editing.
    pub fn cancel(&mut self) -> Option<String> {
        match std::mem::take(&mut self.state) {
            EditorState::Editing { snapshot } => {
                debug!("edit cancelled");
                Some(snapshot)
            }
            EditorState::Display => None,
        }
    }
}
