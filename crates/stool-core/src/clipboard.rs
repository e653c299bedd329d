//! Clipboard access.
//!
//! Tools only talk to the clipboard through [`ClipboardSink`], so they can be
//! exercised without a desktop session.

use arboard::Clipboard;

use crate::error::ClipboardError;

pub trait ClipboardSink {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The operating system clipboard.
///
/// On Linux the selection is served by the process that set it, so
/// `copy_text` blocks until another program (usually a clipboard manager)
/// takes the text over. Elsewhere it returns as soon as the text is set.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Whether `copy_text` blocks until the clipboard contents are replaced.
    pub fn holds_selection() -> bool {
        cfg!(target_os = "linux")
    }
}

impl ClipboardSink for SystemClipboard {
    #[cfg(target_os = "linux")]
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        use arboard::SetExtLinux;

        let mut clipboard =
            Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set()
            .wait()
            .text(text.to_string())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }

    #[cfg(not(target_os = "linux"))]
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

/// In-process clipboard, used by tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    fail: bool,
}

impl MemoryClipboard {
    /// A clipboard that rejects every write.
    pub fn failing() -> Self {
        Self {
            contents: None,
            fail: true,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::WriteFailed("clipboard is read-only".to_string()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Copy `text`, logging instead of propagating a failure.
pub fn copy_to_clipboard(sink: &mut dyn ClipboardSink, text: &str) -> bool {
    match sink.copy_text(text) {
        Ok(()) => {
            log::debug!("copied {} bytes to clipboard", text.len());
            true
        }
        Err(e) => {
            log::warn!("Failed to copy text: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_roundtrip() {
        let mut clipboard = MemoryClipboard::default();
        assert!(copy_to_clipboard(&mut clipboard, "hello"));
        assert_eq!(clipboard.contents(), Some("hello"));
        assert!(copy_to_clipboard(&mut clipboard, "again"));
        assert_eq!(clipboard.contents(), Some("again"));
    }

    #[test]
    fn test_system_clipboard_holds_selection_on_linux() {
        assert_eq!(SystemClipboard::holds_selection(), cfg!(target_os = "linux"));
    }

    #[test]
    fn test_failing_clipboard() {
        let mut clipboard = MemoryClipboard::failing();
        assert!(clipboard.copy_text("hello").is_err());
        assert!(!copy_to_clipboard(&mut clipboard, "hello"));
    }
}
