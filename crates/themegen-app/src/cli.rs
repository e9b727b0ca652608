use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use themegen_config::CssFlavor;

/// themegen: Bootstrap theme generator and CSS variable validator.
#[derive(Parser, Debug)]
#[command(name = "themegen", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `debug`, `themegen=trace`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a stylesheet from the configured controls.
    Generate {
        #[arg(long, value_enum)]
        flavor: Option<FlavorArg>,
        /// Output directory (defaults to `[output] directory`).
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print the stylesheet instead of writing a file.
        #[arg(long)]
        stdout: bool,
        /// Also copy the stylesheet to the clipboard.
        #[arg(long)]
        copy: bool,
        /// Preset name or YAML path applied over the controls.
        #[arg(long)]
        preset: Option<String>,
    },
    /// Validate the `:root` variables of a stylesheet.
    Validate {
        file: PathBuf,
        /// Warn about unknown `--bs-` names.
        #[arg(long)]
        strict: bool,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Apply an edited stylesheet: validate it against the current output
    /// and save the synced controls.
    Apply {
        file: PathBuf,
        #[arg(long)]
        strict: bool,
    },
    /// List built-in and user presets.
    Presets,
    /// Randomise the theme from a built-in palette.
    Surprise {
        /// Seed for a reproducible theme.
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        out: Option<PathBuf>,
        /// Save the randomised controls to the config file.
        #[arg(long)]
        save: bool,
    },
    /// Fetch a reference stylesheet and list its variables by category.
    Extract {
        /// Stylesheet URL (defaults to `[extractor] url`).
        #[arg(long)]
        url: Option<String>,
        /// Print every variable, not just the counts.
        #[arg(long)]
        verbose: bool,
    },
    /// Regenerate the stylesheet whenever the config file changes.
    Watch,
    /// Print the effective config as JSON.
    Config,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlavorArg {
    Bootstrap,
    Dynamic,
}

impl From<FlavorArg> for CssFlavor {
    fn from(arg: FlavorArg) -> Self {
        match arg {
            FlavorArg::Bootstrap => CssFlavor::Bootstrap,
            FlavorArg::Dynamic => CssFlavor::Dynamic,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_generate_with_flavor() {
        let args = Args::parse_from(["themegen", "generate", "--flavor", "dynamic", "--copy"]);
        match args.command {
            Command::Generate { flavor, copy, .. } => {
                assert_eq!(flavor, Some(FlavorArg::Dynamic));
                assert!(copy);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_options_follow_subcommand() {
        let args = Args::parse_from([
            "themegen",
            "validate",
            "theme.css",
            "--strict",
            "--config",
            "/tmp/t.toml",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/t.toml")));
        assert!(matches!(args.command, Command::Validate { strict: true, .. }));
    }

    #[test]
    fn surprise_seed() {
        let args = Args::parse_from(["themegen", "surprise", "--seed", "42"]);
        assert!(matches!(args.command, Command::Surprise { seed: Some(42), .. }));
    }
}
