//! Full configuration validation.
//!
//! Validates numeric control ranges, control color formats and the text
//! written into `:root` declarations. Each group has its own submodule;
//! this orchestrator calls them all and collects errors into a single
//! `ConfigError`.

mod colors;
mod declarations;
mod helpers;
mod layout;
mod system;
mod typography;

#[cfg(test)]
mod tests;

use crate::schema::ThemegenConfig;
use themegen_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ThemegenConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    colors::validate_colors(&mut errors, &config.controls);
    declarations::validate_declaration_values(&mut errors, &config.controls);
    typography::validate_typography(&mut errors, &config.controls);
    layout::validate_borders(&mut errors, &config.controls);
    layout::validate_forms(&mut errors, &config.controls);
    layout::validate_grid(&mut errors, &config.controls);
    system::validate_editor(&mut errors, config);
    system::validate_extractor(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
