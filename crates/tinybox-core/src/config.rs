//! Widget configuration.
//!
//! The `<tiny-box>` tag takes no attributes, so these are build-time
//! defaults. Embedders driving the widget from Rust or JS can override them.

use serde::{Deserialize, Serialize};

use crate::buffer::BufferKind;
use crate::error::{Result, TinyBoxError};
use crate::font::FontFace;

/// Host width (in CSS px) at and above which editor and preview sit side by side.
pub const DEFAULT_LAYOUT_THRESHOLD: f64 = 900.0;

/// Text inserted when Tab is pressed in a buffer.
pub const DEFAULT_INDENT: &str = "  ";

pub const DEFAULT_DOCUMENT_TITLE: &str = "TinyBox Output";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TinyBoxConfig {
    pub layout_threshold: f64,
    pub indent: String,
    /// `<title>` of the preview document.
    pub document_title: String,
    pub font: FontFace,
    pub placeholders: Placeholders,
}

impl Default for TinyBoxConfig {
    fn default() -> Self {
        Self {
            layout_threshold: DEFAULT_LAYOUT_THRESHOLD,
            indent: DEFAULT_INDENT.to_string(),
            document_title: DEFAULT_DOCUMENT_TITLE.to_string(),
            font: FontFace::default(),
            placeholders: Placeholders::default(),
        }
    }
}

impl TinyBoxConfig {
    /// Reject values the widget cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !self.layout_threshold.is_finite() || self.layout_threshold < 0.0 {
            return Err(TinyBoxError::Config(format!(
                "layout threshold must be a non-negative number, got {}",
                self.layout_threshold
            )));
        }
        if self.indent.is_empty() {
            return Err(TinyBoxError::Config("indent must not be empty".into()));
        }
        if self.font.marker.is_empty() {
            return Err(TinyBoxError::Config("font marker must not be empty".into()));
        }
        // The marker ends up inside an attribute selector.
        if self.font.marker.contains(['"', '\\']) {
            return Err(TinyBoxError::Config(format!(
                "font marker must not contain quotes or backslashes, got {:?}",
                self.font.marker
            )));
        }
        Ok(())
    }
}

/// Placeholder text shown in empty buffers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholders {
    pub markup: String,
    pub style: String,
    pub script: String,
}

impl Placeholders {
    pub fn get(&self, kind: BufferKind) -> &str {
        match kind {
            BufferKind::Markup => &self.markup,
            BufferKind::Style => &self.style,
            BufferKind::Script => &self.script,
        }
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            markup: "Enter HTML here...".to_string(),
            style: "Enter CSS here...".to_string(),
            script: "Enter JavaScript here...".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = TinyBoxConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.layout_threshold, 900.0);
        assert_eq!(config.indent, "  ");
    }

    #[test]
    fn test_invalid_threshold() {
        let config = TinyBoxConfig {
            layout_threshold: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(TinyBoxError::Config(_))));
    }

    #[test]
    fn test_empty_indent_rejected() {
        let config = TinyBoxConfig {
            indent: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_quoted_marker_rejected() {
        let mut config = TinyBoxConfig::default();
        config.font.marker = "a\"]".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_placeholder_lookup() {
        let placeholders = Placeholders::default();
        assert_eq!(placeholders.get(BufferKind::Style), "Enter CSS here...");
    }
}
