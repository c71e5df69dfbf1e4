use crate::error::CredsError;
use arboard::Clipboard;
use tracing::debug;

pub trait ClipboardSource {
    fn read_text(&mut self) -> Result<String, CredsError>;
}

pub struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, CredsError> {
        let clipboard =
            Clipboard::new().map_err(|e| CredsError::ClipboardUnavailable(e.to_string()))?;

        Ok(Self { clipboard })
    }
}

impl ClipboardSource for SystemClipboard {
    fn read_text(&mut self) -> Result<String, CredsError> {
        text_or_empty(self.clipboard.get_text())
    }
}

/// Non-text clipboard content reads as empty, any other failure is reported.
fn text_or_empty(result: Result<String, arboard::Error>) -> Result<String, CredsError> {
    match result {
        Ok(text) => {
            debug!("Read {} chars from the clipboard", text.len());
            Ok(text)
        }
        Err(arboard::Error::ContentNotAvailable) => {
            debug!("No text on the clipboard");
            Ok(String::new())
        }
        Err(e) => Err(CredsError::ClipboardUnavailable(e.to_string())),
    }
}
