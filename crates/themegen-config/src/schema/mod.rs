//! Configuration schema types for themegen.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with stock Bootstrap 5 values.

mod colors;
mod effects;
mod forms;
mod layout;
mod system;
mod typography;

pub use colors::*;
pub use effects::*;
pub use forms::*;
pub use layout::*;
pub use system::*;
pub use typography::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Preset selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSelection {
    /// Built-in preset name, user preset name, or path to a preset YAML.
    /// Applied on top of `[controls]` when the config is loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
}

/// Every value a theme control can hold.
///
/// This is the generator's input; it is grouped the way the customizer
/// panels are grouped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeControls {
    pub colors: ColorControls,
    pub typography: TypographyControls,
    pub spacing: SpacingControls,
    pub borders: BorderControls,
    pub shadows: ShadowControls,
    pub animation: AnimationControls,
    pub links: LinkControls,
    pub forms: FormControls,
    pub grid: GridControls,
}

/// Root configuration for themegen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ThemegenConfig {
    pub theme: ThemeSelection,
    pub controls: ThemeControls,
    pub output: OutputConfig,
    pub editor: EditorConfig,
    pub extractor: ExtractorConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
