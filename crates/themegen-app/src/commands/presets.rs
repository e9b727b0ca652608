use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;
use themegen_common::ThemegenError;
use themegen_config::presets::{built_in_presets, list_user_presets, load_preset_from_path, presets_dir};
use themegen_css::{surprise, InMemoryStyle, ThemeGenerator};
use tracing::warn;

use super::{write_stylesheet, Context};

pub fn run_list() -> Result<(), ThemegenError> {
    println!("built-in:");
    for preset in built_in_presets() {
        println!(
            "  {:<18} {}",
            preset.name,
            preset.description.as_deref().unwrap_or_default()
        );
    }

    let dir = presets_dir()?;
    let files = list_user_presets(&dir);
    if files.is_empty() {
        println!("no user presets in {}", dir.display());
        return Ok(());
    }
    println!("user ({}):", dir.display());
    for file in files {
        match load_preset_from_path(&file) {
            Ok(preset) => println!(
                "  {:<18} {}",
                preset.name,
                preset.description.as_deref().unwrap_or_default()
            ),
            Err(e) => warn!(file = %file.display(), "skipping unreadable preset: {e}"),
        }
    }
    Ok(())
}

pub fn run_surprise(
    ctx: &mut Context,
    seed: Option<u64>,
    out: Option<PathBuf>,
    save: bool,
) -> Result<(), ThemegenError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let palette = surprise(&mut ctx.config.controls, &mut rng);
    println!("surprise theme based on {palette}");

    let mut generator = ThemeGenerator::new(ctx.config.output.flavor);
    let css = generator.generate(&ctx.config.controls, &mut InMemoryStyle::new());
    let dir = out.unwrap_or_else(|| PathBuf::from(&ctx.config.output.directory));
    let path = write_stylesheet(&dir, css)?;
    println!("wrote {}", path.display());

    if save {
        ctx.config.theme.preset = None;
        ctx.save()?;
        println!("controls saved");
    }
    Ok(())
}
