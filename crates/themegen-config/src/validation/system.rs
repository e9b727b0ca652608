//! Editor and extractor settings validation.

use crate::schema::ThemegenConfig;

use super::helpers::validate_range_u64;

pub(crate) fn validate_editor(errors: &mut Vec<String>, config: &ThemegenConfig) {
    validate_range_u64(
        errors,
        "editor.warning_display_secs",
        config.editor.warning_display_secs,
        1,
        60,
    );
}

pub(crate) fn validate_extractor(errors: &mut Vec<String>, config: &ThemegenConfig) {
    let e = &config.extractor;
    validate_range_u64(errors, "extractor.timeout_secs", e.timeout_secs, 1, 120);
    if !e.prefix.starts_with("--") {
        errors.push(format!("extractor.prefix = '{}' must start with '--'", e.prefix));
    }
    if !(e.url.starts_with("http://") || e.url.starts_with("https://")) {
        errors.push(format!("extractor.url = '{}' must be an http(s) URL", e.url));
    }
}
