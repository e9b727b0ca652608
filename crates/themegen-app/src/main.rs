mod cli;
mod clipboard;
mod commands;
mod fetch;

use std::process::ExitCode;

use themegen_config::toml_loader::{
    create_default_config, default_config_path, load_default, load_from_path,
};
use themegen_config::{apply_preset, load_config, load_preset, ThemegenConfig};
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};
use crate::commands::Context;

const DEFAULT_LOG_FILTER: &str = "themegen=info";

/// `[logging] filter` from the config file, read before the subscriber
/// exists.
fn configured_filter(args: &Args) -> Option<String> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => default_config_path().ok()?,
    };
    if !path.exists() {
        return None;
    }
    load_from_path(&path).ok().map(|config| config.logging.filter)
}

fn init_logging(args: &Args) {
    let directive = args
        .log_level
        .clone()
        .or_else(|| configured_filter(args))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| DEFAULT_LOG_FILTER.parse().unwrap()),
            ),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Load the config for a command.
///
/// Commands that write the config back need it to load cleanly. The rest
/// fall back to defaults.
fn load(args: &Args) -> Result<ThemegenConfig, themegen_common::ThemegenError> {
    if let Some(path) = &args.config {
        if !path.exists() {
            tracing::info!("creating config at {}", path.display());
            create_default_config(path)?;
        }
    }

    let writes_config = matches!(
        args.command,
        Command::Apply { .. } | Command::Surprise { save: true, .. }
    );
    match load_config(args.config.as_deref()) {
        Ok(config) => Ok(config),
        Err(e) if writes_config => Err(e.into()),
        Err(e) => {
            tracing::warn!("config load failed, using defaults: {e}");
            // keep whatever parsed, even if some ranges are off
            let parsed = match args.config.as_deref() {
                Some(path) => load_from_path(path).ok(),
                None => load_default().ok(),
            };
            let mut config = parsed.unwrap_or_default();
            if let Some(name) = config.theme.preset.clone() {
                if let Ok(preset) = load_preset(&name) {
                    apply_preset(&mut config.controls, &preset);
                }
            }
            Ok(config)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(&args);
    tracing::debug!("themegen v{} starting", env!("CARGO_PKG_VERSION"));

    let result = match load(&args) {
        Ok(config) => {
            let ctx = Context {
                config,
                config_path: args.config.clone(),
            };
            commands::run(args.command, ctx).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
