//! Construction-time configuration for a text control.
//!
//! Configuration is plain data with serde defaults, so a host can keep it in
//! a JSON file next to its other UI settings and only spell out the fields it
//! changes:
//!
//! ```json
//! { "multiline": false, "alignment": "right" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use textkit_buffer::SeparatorClass;
use thiserror::Error;

use crate::align::Alignment;

/// Errors from loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings fixed when a `TextEdit` is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextEditConfig {
    /// Multi-line control (true) or single-line field (false).
    pub multiline: bool,
    /// Read-only controls allow navigation, selection and copy only.
    pub read_only: bool,
    pub alignment: Alignment,
    /// Caret width in pixels, used for scroll-into-view.
    pub caret_width: f32,
    /// Characters that delimit words. `None` uses the built-in class.
    pub word_separators: Option<String>,
}

impl Default for TextEditConfig {
    fn default() -> Self {
        Self {
            multiline: true,
            read_only: false,
            alignment: Alignment::Left,
            caret_width: 1.0,
            word_separators: None,
        }
    }
}

impl TextEditConfig {
    /// Configuration for a single-line input field.
    pub fn single_line() -> Self {
        Self {
            multiline: false,
            ..Self::default()
        }
    }

    /// Parses configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: TextEditConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Reads and parses a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Replaces values the control cannot work with by their defaults.
    pub fn sanitized(mut self) -> Self {
        if !self.caret_width.is_finite() || self.caret_width <= 0.0 {
            tracing::warn!(
                caret_width = self.caret_width,
                "caret width must be positive; using 1.0"
            );
            self.caret_width = 1.0;
        }
        self
    }

    pub fn separator_class(&self) -> SeparatorClass {
        match &self.word_separators {
            Some(chars) => SeparatorClass::new(chars),
            None => SeparatorClass::default(),
        }
    }
}
