//! `:root` block assembly.

use crate::variables::VariableMap;

const INDENT: &str = "    ";

/// Builds a `:root` block's text and its variable map side by side, so
/// the map always matches what a parser would read back.
#[derive(Debug)]
pub(crate) struct RootBuilder {
    text: String,
    variables: VariableMap,
}

impl RootBuilder {
    /// Start a block preceded by a header comment.
    pub(crate) fn new(header: &str) -> Self {
        Self {
            text: format!("/* {header} */\n:root {{\n"),
            variables: VariableMap::new(),
        }
    }

    /// A comment line inside the block, preceded by a blank line unless it
    /// opens the block.
    pub(crate) fn section(&mut self, title: &str) -> &mut Self {
        if !self.text.ends_with("{\n") {
            self.text.push('\n');
        }
        self.text.push_str(&format!("{INDENT}/* {title} */\n"));
        self
    }

    pub(crate) fn var(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        self.text.push_str(&format!("{INDENT}{name}: {value};\n"));
        self.variables.insert(name, value);
        self
    }

    /// Close the block; returns the text (ending in a blank line) and map.
    pub(crate) fn finish(mut self) -> (String, VariableMap) {
        self.text.push_str("}\n\n");
        (self.text, self.variables)
    }
}
