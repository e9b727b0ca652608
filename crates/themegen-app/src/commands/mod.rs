//! Subcommand implementations.

mod extract;
mod generate;
mod presets;
mod validate;
mod watch;

use std::path::{Path, PathBuf};

use themegen_common::ThemegenError;
use themegen_config::{config_to_json, save_config, save_config_to_path, ThemegenConfig};
use themegen_css::{GeneratedCss, ValidationIssue};
use tracing::info;

use crate::cli::Command;

/// Loaded config plus where it came from.
pub struct Context {
    pub config: ThemegenConfig,
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Persist `config` to the file it was loaded from.
    pub fn save(&self) -> Result<(), ThemegenError> {
        match &self.config_path {
            Some(path) => save_config_to_path(&self.config, path)?,
            None => save_config(&self.config)?,
        }
        Ok(())
    }
}

pub async fn run(command: Command, mut ctx: Context) -> Result<(), ThemegenError> {
    match command {
        Command::Generate {
            flavor,
            out,
            stdout,
            copy,
            preset,
        } => generate::run(&ctx, flavor.map(Into::into), out, stdout, copy, preset),
        Command::Validate { file, strict, json } => validate::run_validate(&ctx, &file, strict, json),
        Command::Apply { file, strict } => validate::run_apply(&mut ctx, &file, strict),
        Command::Presets => presets::run_list(),
        Command::Surprise { seed, out, save } => presets::run_surprise(&mut ctx, seed, out, save),
        Command::Extract { url, verbose } => extract::run(&ctx, url, verbose).await,
        Command::Watch => watch::run(ctx).await,
        Command::Config => {
            println!("{}", config_to_json(&ctx.config));
            Ok(())
        }
    }
}

/// Write `css` into `dir` under its flavor's file name.
pub fn write_stylesheet(dir: &Path, css: &GeneratedCss) -> Result<PathBuf, ThemegenError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(css.file_name());
    std::fs::write(&path, &css.text)?;
    info!(path = %path.display(), bytes = css.text.len(), "stylesheet written");
    Ok(path)
}

fn print_issues(label: &str, issues: &[ValidationIssue]) {
    if issues.is_empty() {
        return;
    }
    println!("{label} ({}):", issues.len());
    for issue in issues {
        println!("  {issue}");
    }
}
