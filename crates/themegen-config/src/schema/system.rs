//! Non-theme settings: output, editor session, extractor and logging.

use serde::{Deserialize, Serialize};

/// Which stylesheet layout the generator produces.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum CssFlavor {
    /// Plain Bootstrap custom properties.
    #[default]
    Bootstrap,
    /// Bootstrap plus `-rgb` companions, color scales and extended spacing.
    Dynamic,
}

impl CssFlavor {
    /// Download file name for this flavor.
    pub fn file_name(self) -> &'static str {
        match self {
            CssFlavor::Bootstrap => "bootstrap-custom.css",
            CssFlavor::Dynamic => "bootstrap-custom-variables.css",
        }
    }

    /// MIME type of the generated file.
    pub fn mime_type(self) -> &'static str {
        "text/css"
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub flavor: CssFlavor,
    /// Directory the stylesheet is written to.
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            flavor: CssFlavor::Bootstrap,
            directory: ".".into(),
        }
    }
}

/// Edit/apply session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Warn about `--bs-` names outside the known catalog.
    pub strict: bool,
    /// How long apply warnings stay visible, in seconds (valid range: 1-60).
    pub warning_display_secs: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            strict: false,
            warning_display_secs: 5,
        }
    }
}

/// Reference stylesheet used for variable discovery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    pub url: String,
    /// Only declarations with this prefix are collected outside `:root`.
    pub prefix: String,
    /// Request timeout in seconds (valid range: 1-120).
    pub timeout_secs: u64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            url: "https://cdn.dynamicframework.dev/assets/1.36.2/ui-react/css/dynamic-ui-root.css"
                .into(),
            prefix: "--bs-".into(),
            timeout_secs: 15,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "themegen=info".into(),
        }
    }
}
