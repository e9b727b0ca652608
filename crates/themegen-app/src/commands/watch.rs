use std::path::{Path, PathBuf};

use themegen_common::ThemegenError;
use themegen_config::toml_loader::default_config_path;
use themegen_config::{load_config, FileWatcher};
use themegen_css::{InMemoryStyle, ThemeGenerator};
use tokio::sync::broadcast;
use tracing::{error, info, warn};

use super::{write_stylesheet, Context};

/// Regenerate into the configured output directory.
fn regenerate(ctx: &Context) -> Result<PathBuf, ThemegenError> {
    let mut generator = ThemeGenerator::new(ctx.config.output.flavor);
    let css = generator.generate(&ctx.config.controls, &mut InMemoryStyle::new());
    write_stylesheet(Path::new(&ctx.config.output.directory), css)
}

pub async fn run(mut ctx: Context) -> Result<(), ThemegenError> {
    let config_path = match &ctx.config_path {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };

    let path = regenerate(&ctx)?;
    println!("wrote {}, watching {}", path.display(), config_path.display());

    let watcher = FileWatcher::new(vec![config_path.clone()])?;
    let (tx, mut rx) = broadcast::channel::<PathBuf>(16);
    let watch_task = tokio::spawn(async move {
        if let Err(e) = watcher.watch(tx).await {
            error!("config watcher stopped: {e}");
        }
    });

    loop {
        tokio::select! {
            changed = rx.recv() => match changed {
                Ok(_) => match load_config(Some(&config_path)) {
                    Ok(config) => {
                        ctx.config = config;
                        match regenerate(&ctx) {
                            Ok(path) => println!("regenerated {}", path.display()),
                            Err(e) => warn!("regeneration failed: {e}"),
                        }
                    }
                    Err(e) => warn!("config reload failed, keeping previous: {e}"),
                },
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "change notifications lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted, stopping watch");
                break;
            }
        }
    }

    watch_task.abort();
    Ok(())
}
