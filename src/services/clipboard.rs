//! Clipboard sinks.
//!
//! `SystemClipboard` writes through `arboard` (feature `clipboard`).
//! `MemoryClipboard` records writes and is used headless and in tests.

use std::sync::{Arc, Mutex};

use zeroize::Zeroizing;

use crate::types::errors::ClipboardError;

/// Trait defining the clipboard write interface.
pub trait ClipboardSink {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The operating system clipboard.
#[cfg(feature = "clipboard")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[cfg(feature = "clipboard")]
impl ClipboardSink for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        // A fresh handle per write keeps the sink `Send` on every platform.
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

/// In-memory clipboard. Clones share the same history.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    writes: Arc<Mutex<Vec<Zeroizing<String>>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent text written, if any.
    pub fn contents(&self) -> Option<String> {
        self.writes
            .lock()
            .ok()
            .and_then(|writes| writes.last().map(|text| text.to_string()))
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().map(|writes| writes.len()).unwrap_or(0)
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut writes = self
            .writes
            .lock()
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        writes.push(Zeroizing::new(text.to_string()));
        Ok(())
    }
}

/// Clipboard used by the binaries: the system clipboard when available.
pub fn default_sink() -> Box<dyn ClipboardSink + Send> {
    #[cfg(feature = "clipboard")]
    {
        Box::new(SystemClipboard)
    }
    #[cfg(not(feature = "clipboard"))]
    {
        Box::new(MemoryClipboard::new())
    }
}
