use std::path::Path;

use themegen_common::ThemegenError;
use themegen_css::{
    sync_controls_from_variables, ApplyOutcome, EditorSession, InMemoryStyle, ValueValidator,
};
use tracing::info;

use super::{print_issues, Context};

pub fn run_validate(ctx: &Context, file: &Path, strict: bool, json: bool) -> Result<(), ThemegenError> {
    let css = std::fs::read_to_string(file)?;
    let validator = ValueValidator::new(strict || ctx.config.editor.strict);
    let (variables, report) = validator.validate_css(&css);

    if json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| ThemegenError::Other(format!("failed to serialize report: {e}")))?;
        println!("{json}");
    } else {
        println!("{}: {} variables", file.display(), variables.len());
        print_issues("errors", &report.errors);
        print_issues("warnings", &report.warnings);
    }

    let critical = report.critical_errors();
    if critical.is_empty() {
        if !json {
            println!("ok");
        }
        Ok(())
    } else {
        Err(ThemegenError::Rejected(format!(
            "{} critical error(s) in {}",
            critical.len(),
            file.display()
        )))
    }
}

/// Run an edit session: the configured output is the snapshot, the file
/// is the edited text. On success the controls are synced and saved.
pub fn run_apply(ctx: &mut Context, file: &Path, strict: bool) -> Result<(), ThemegenError> {
    let edited = std::fs::read_to_string(file)?;

    let mut editor = ctx.config.editor.clone();
    editor.strict |= strict;
    let mut session = EditorSession::from_config(ctx.config.output.flavor, &editor);

    let mut sink = InMemoryStyle::new();
    let current = session.generate(&ctx.config.controls, &mut sink).text.clone();
    session.toggle_edit(&current);

    let mut applied = InMemoryStyle::new();
    match session.apply(&edited, &mut applied)? {
        ApplyOutcome::Applied {
            variables,
            warnings,
            warning_display,
        } => {
            print_issues("warnings", &warnings);
            let synced = sync_controls_from_variables(&mut ctx.config.controls, &variables);
            // synced controls replace whatever the preset supplied
            ctx.config.theme.preset = None;
            ctx.save()?;
            info!(
                applied = applied.write_count(),
                synced = synced.len(),
                warning_display_secs = warning_display.as_secs(),
                "apply complete"
            );
            println!(
                "applied {} variables, synced {} controls",
                variables.len(),
                synced.len()
            );
            Ok(())
        }
        ApplyOutcome::Rejected { errors, warnings } => {
            print_issues("errors", &errors);
            print_issues("warnings", &warnings);
            Err(ThemegenError::Rejected(format!(
                "{} critical error(s), nothing applied",
                errors.len()
            )))
        }
    }
}
