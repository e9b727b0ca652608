use themegen_common::PlatformError;

/// System clipboard handle backed by `arboard`.
pub struct Clipboard {
    inner: arboard::Clipboard,
}

impl Clipboard {
    pub fn new() -> Result<Self, PlatformError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| PlatformError::ClipboardError(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Replace the clipboard contents with `text`.
    pub fn set_text(&mut self, text: &str) -> Result<(), PlatformError> {
        self.inner
            .set_text(text.to_owned())
            .map_err(|e| PlatformError::ClipboardError(e.to_string()))
    }
}
