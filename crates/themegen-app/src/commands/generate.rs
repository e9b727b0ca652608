use std::path::PathBuf;

use themegen_common::ThemegenError;
use themegen_config::{apply_preset, load_preset, CssFlavor};
use themegen_css::{InMemoryStyle, ThemeGenerator};
use tracing::info;

use super::{write_stylesheet, Context};
use crate::clipboard::Clipboard;

pub fn run(
    ctx: &Context,
    flavor: Option<CssFlavor>,
    out: Option<PathBuf>,
    stdout: bool,
    copy: bool,
    preset: Option<String>,
) -> Result<(), ThemegenError> {
    let mut controls = ctx.config.controls.clone();
    if let Some(name) = preset {
        let preset = load_preset(&name)?;
        info!(preset = %preset.name, "applying preset");
        apply_preset(&mut controls, &preset);
    }

    let mut generator = ThemeGenerator::new(flavor.unwrap_or(ctx.config.output.flavor));
    let mut sink = InMemoryStyle::new();
    let css = generator.generate(&controls, &mut sink);

    if stdout {
        print!("{}", css.text);
    } else {
        let dir = out.unwrap_or_else(|| PathBuf::from(&ctx.config.output.directory));
        let path = write_stylesheet(&dir, css)?;
        println!("wrote {} ({} variables)", path.display(), css.variables.len());
    }

    if copy {
        Clipboard::new()?.set_text(&css.text)?;
        println!("copied to clipboard");
    }
    Ok(())
}
