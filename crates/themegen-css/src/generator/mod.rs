//! Stylesheet generation from theme controls.
//!
//! Rendering is pure and deterministic: identical controls and flavor give
//! byte-identical text. [`ThemeGenerator`] adds the side effects: it pushes
//! every `:root` entry to a [`StyleSink`] and keeps the last text for
//! copy/download.

mod bootstrap;
mod dynamic;
mod root;
mod sink;
mod units;

#[cfg(test)]
mod tests;

pub use sink::{apply_variables, InMemoryStyle, StyleSink};
pub use units::{em, length_to_px, px, px_to_rem, ROOT_FONT_PX};

use themegen_config::{CssFlavor, ThemeControls};
use tracing::{debug, info};

use crate::variables::VariableMap;

/// A rendered stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCss {
    pub flavor: CssFlavor,
    pub text: String,
    /// The `:root` entries, in emission order.
    pub variables: VariableMap,
}

impl GeneratedCss {
    /// Download file name.
    pub fn file_name(&self) -> &'static str {
        self.flavor.file_name()
    }

    pub fn mime_type(&self) -> &'static str {
        self.flavor.mime_type()
    }
}

/// Render controls as a stylesheet without side effects.
pub fn render(controls: &ThemeControls, flavor: CssFlavor) -> GeneratedCss {
    let (text, variables) = match flavor {
        CssFlavor::Bootstrap => bootstrap::render(controls),
        CssFlavor::Dynamic => dynamic::render(controls),
    };
    GeneratedCss {
        flavor,
        text,
        variables,
    }
}

/// Generates stylesheets and remembers the most recent one.
#[derive(Debug, Clone, Default)]
pub struct ThemeGenerator {
    flavor: CssFlavor,
    last: Option<GeneratedCss>,
}

impl ThemeGenerator {
    pub fn new(flavor: CssFlavor) -> Self {
        Self { flavor, last: None }
    }

    pub fn flavor(&self) -> CssFlavor {
        self.flavor
    }

    /// Switch flavor. The retained text is kept until the next generate.
    pub fn set_flavor(&mut self, flavor: CssFlavor) {
        self.flavor = flavor;
    }

    /// Render, write every `:root` entry to `sink`, and retain the result.
    pub fn generate(&mut self, controls: &ThemeControls, sink: &mut dyn StyleSink) -> &GeneratedCss {
        let generated = render(controls, self.flavor);
        let written = apply_variables(&generated.variables, sink);
        debug!(written, "generated variables pushed to style sink");
        info!(
            flavor = ?self.flavor,
            variables = generated.variables.len(),
            bytes = generated.text.len(),
            "stylesheet generated"
        );
        self.last.insert(generated)
    }

    pub fn last_generated(&self) -> Option<&GeneratedCss> {
        self.last.as_ref()
    }

    /// Raw text of the last generated stylesheet.
    pub fn last_text(&self) -> Option<&str> {
        self.last.as_ref().map(|g| g.text.as_str())
    }
}
