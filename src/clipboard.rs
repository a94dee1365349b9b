//! Clipboard access for the share-link fallback.

use arboard::Clipboard;

use crate::share::{ClipboardSink, ShareError};

/// Handler for clipboard operations.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    /// Create a new clipboard handler.
    pub fn new() -> Result<Self, arboard::Error> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }
}

impl ClipboardSink for ClipboardHandler {
    fn set_text(&mut self, text: &str) -> Result<(), ShareError> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(|e| ShareError::Clipboard(e.to_string()))
    }
}
