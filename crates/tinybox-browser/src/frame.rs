//! The preview iframe as a [`RenderTarget`].

use tinybox_core::{RenderTarget, Result, TinyBoxError};
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, HtmlIFrameElement};

use crate::dom::js_message;

/// Streams a document into an iframe with `open`/`write`/`close`, replacing
/// whatever it showed before.
pub struct FrameTarget<'a> {
    frame: &'a HtmlIFrameElement,
    document: Option<HtmlDocument>,
}

impl<'a> FrameTarget<'a> {
    pub fn new(frame: &'a HtmlIFrameElement) -> Self {
        Self {
            frame,
            document: None,
        }
    }

    fn content_document(&self) -> Option<HtmlDocument> {
        self.frame.content_document()?.dyn_into::<HtmlDocument>().ok()
    }
}

impl RenderTarget for FrameTarget<'_> {
    fn open(&mut self) -> Result<()> {
        // Detached iframes have no content document.
        let document = self.content_document().ok_or_else(|| {
            TinyBoxError::TargetUnavailable("iframe has no content document".into())
        })?;
        document
            .open()
            .map_err(|err| TinyBoxError::TargetUnavailable(js_message(err)))?;
        self.document = Some(document);
        Ok(())
    }

    fn write(&mut self, html: &str) -> Result<()> {
        let document = self
            .document
            .as_ref()
            .ok_or_else(|| TinyBoxError::RenderWrite("document is not open".into()))?;
        document
            .write_1(html)
            .map_err(|err| TinyBoxError::RenderWrite(js_message(err)))
    }

    fn close(&mut self) -> Result<()> {
        let document = self
            .document
            .take()
            .ok_or_else(|| TinyBoxError::RenderClose("document is not open".into()))?;
        document
            .close()
            .map_err(|err| TinyBoxError::RenderClose(js_message(err)))
    }
}
