//! Font registration in the hosting document's `<head>`.
//!
//! The shadow tree can use a font family but cannot declare it, so the
//! `@font-face` goes into the outer document, once for all instances.

use tinybox_core::{FontRegistry, Result, TinyBoxError};
use web_sys::Document;

use crate::dom::js_message;

pub const MARKER_ATTRIBUTE: &str = "data-description";

/// [`FontRegistry`] backed by `<style data-description="...">` elements.
pub struct DocumentFonts {
    document: Document,
}

impl DocumentFonts {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Registry for the global document.
    pub fn current() -> Option<Self> {
        crate::dom::document().map(Self::new)
    }

    fn selector(marker: &str) -> String {
        format!("style[{MARKER_ATTRIBUTE}=\"{marker}\"]")
    }
}

fn font_error(err: wasm_bindgen::JsValue) -> TinyBoxError {
    TinyBoxError::FontRegistration(js_message(err))
}

impl FontRegistry for DocumentFonts {
    /// A failed lookup counts as registered: inserting blind could duplicate.
    fn is_registered(&self, marker: &str) -> bool {
        match self.document.query_selector(&Self::selector(marker)) {
            Ok(found) => found.is_some(),
            Err(err) => {
                tracing::warn!(marker, error = %js_message(err), "font marker lookup failed");
                true
            }
        }
    }

    fn insert(&mut self, marker: &str, css: &str) -> Result<()> {
        let head = self
            .document
            .head()
            .ok_or_else(|| TinyBoxError::FontRegistration("document has no <head>".into()))?;
        let style = self.document.create_element("style").map_err(font_error)?;
        style
            .set_attribute(MARKER_ATTRIBUTE, marker)
            .map_err(font_error)?;
        style.set_text_content(Some(css));
        head.append_child(&style).map_err(font_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector() {
        assert_eq!(
            DocumentFonts::selector("tinybox-font-face"),
            r#"style[data-description="tinybox-font-face"]"#
        );
    }
}
