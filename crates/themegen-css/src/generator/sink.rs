//! Style property sinks.

use themegen_common::ThemegenError;

use crate::variables::VariableMap;

/// Destination for custom-property writes (the live document style).
pub trait StyleSink {
    fn set_property(&mut self, name: &str, value: &str) -> Result<(), ThemegenError>;
}

/// Sink that records properties in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryStyle {
    properties: VariableMap,
    writes: usize,
}

impl InMemoryStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name)
    }

    pub fn properties(&self) -> &VariableMap {
        &self.properties
    }

    /// Total `set_property` calls, including overwrites.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl StyleSink for InMemoryStyle {
    fn set_property(&mut self, name: &str, value: &str) -> Result<(), ThemegenError> {
        self.properties.insert(name, value);
        self.writes += 1;
        Ok(())
    }
}

/// Write every variable to `sink`. Failed writes are logged and skipped.
///
/// Returns the number of properties written.
pub fn apply_variables(variables: &VariableMap, sink: &mut dyn StyleSink) -> usize {
    let mut written = 0;
    for (name, value) in variables.iter() {
        match sink.set_property(name, value) {
            Ok(()) => written += 1,
            Err(e) => tracing::warn!(name, value, error = %e, "style property rejected by sink"),
        }
    }
    written
}
