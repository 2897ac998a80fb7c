//! Clipboard collaborator.
//!
//! The platform clipboard is a humble object: it moves plain text in and out
//! and holds no logic. All decisions (what to copy, when to paste) stay in the
//! control.

/// Plain-text clipboard service.
pub trait Clipboard {
    /// Returns the clipboard contents, or `""` when it holds no text.
    fn get_text(&mut self) -> String;

    /// Replaces the clipboard contents with `text`.
    fn set_text(&mut self, text: &str);
}

/// An in-process clipboard for tests and headless hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    text: String,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clipboard already holding `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Current contents without going through the trait.
    pub fn contents(&self) -> &str {
        &self.text
    }
}

impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }
}
