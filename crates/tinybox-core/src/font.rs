//! Editor font registration.
//!
//! The buffers use a monospaced display font declared once per hosting
//! document. Registration is keyed by a marker so every widget instance can
//! ask for it and only the first one does any work.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Value of the `data-description` attribute marking the injected style.
pub const FONT_MARKER: &str = "tinybox-font-face";

/// A `@font-face` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontFace {
    pub family: String,
    pub src: String,
    pub format: String,
    pub weight: String,
    pub style: String,
    /// Registry key; registering twice under one marker is a no-op.
    pub marker: String,
}

impl Default for FontFace {
    fn default() -> Self {
        Self {
            family: "FontWithASyntaxHighlighter".to_string(),
            src: "./FontWithASyntaxHighlighter-Regular.woff2".to_string(),
            format: "woff2".to_string(),
            weight: "normal".to_string(),
            style: "normal".to_string(),
            marker: FONT_MARKER.to_string(),
        }
    }
}

impl FontFace {
    pub fn css(&self) -> String {
        format!(
            "@font-face {{\n  font-family: '{}';\n  src: url('{}') format('{}');\n  font-weight: {};\n  font-style: {};\n}}",
            self.family, self.src, self.format, self.weight, self.style
        )
    }

    /// `font-family` value for the editing buffers, with a generic fallback.
    pub fn family_stack(&self) -> String {
        format!("'{}', monospace", self.family)
    }
}

/// A place font declarations can be registered once.
pub trait FontRegistry {
    fn is_registered(&self, marker: &str) -> bool;

    fn insert(&mut self, marker: &str, css: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Registered,
    AlreadyPresent,
}

/// Register `face` unless something already holds its marker.
pub fn register_once<R: FontRegistry + ?Sized>(
    registry: &mut R,
    face: &FontFace,
) -> Result<Registration> {
    if registry.is_registered(&face.marker) {
        tracing::trace!(marker = %face.marker, "font face already registered");
        return Ok(Registration::AlreadyPresent);
    }
    registry.insert(&face.marker, &face.css())?;
    tracing::debug!(marker = %face.marker, family = %face.family, "registered font face");
    Ok(Registration::Registered)
}

/// In-memory registry, for hosts without a document.
#[derive(Debug, Default)]
pub struct MarkerSet {
    entries: HashSet<String>,
    css: Vec<String>,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declarations in registration order.
    pub fn declarations(&self) -> &[String] {
        &self.css
    }
}

impl FontRegistry for MarkerSet {
    fn is_registered(&self, marker: &str) -> bool {
        self.entries.contains(marker)
    }

    fn insert(&mut self, marker: &str, css: &str) -> Result<()> {
        self.entries.insert(marker.to_string());
        self.css.push(css.to_string());
        Ok(())
    }
}
