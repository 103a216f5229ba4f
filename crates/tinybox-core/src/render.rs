//! Preview document rendering.
//!
//! Every render builds one complete HTML document from a [`RenderSnapshot`]
//! and replaces whatever the preview surface showed before. There is no
//! diffing: the previous document, its timers and its listeners go away with
//! it.

use crate::buffer::RenderSnapshot;
use crate::config::DEFAULT_DOCUMENT_TITLE;
use crate::error::Result;

/// A surface a preview document can be streamed into.
///
/// Mirrors the `open` / `write` / `close` protocol of a browsing context's
/// document. `open` must discard the previous document; `close` finishes
/// parsing and runs injected script.
pub trait RenderTarget {
    fn open(&mut self) -> Result<()>;

    fn write(&mut self, html: &str) -> Result<()>;

    fn close(&mut self) -> Result<()>;
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn open(&mut self) -> Result<()> {
        (**self).open()
    }

    fn write(&mut self, html: &str) -> Result<()> {
        (**self).write(html)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

/// How a render call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The whole document was written and the stream closed.
    Rendered,
    /// The target could not be opened; nothing changed.
    Skipped,
    /// Writing failed after opening; the stream was closed on an empty
    /// document.
    Aborted,
}

/// Build the preview document for `snapshot`.
///
/// Markup and script are inserted verbatim.
pub fn render_document(snapshot: &RenderSnapshot<'_>, title: &str) -> String {
    let mut html = String::with_capacity(
        160 + title.len() + snapshot.markup.len() + snapshot.style.len() + snapshot.script.len(),
    );
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<title>");
    html.push_str(title);
    html.push_str("</title>\n<style>");
    html.push_str(snapshot.style);
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str(snapshot.markup);
    html.push_str("\n<script>");
    html.push_str(snapshot.script);
    html.push_str("</script>\n</body>\n</html>\n");
    html
}

/// Drives a full open/write/close cycle per render.
#[derive(Debug, Clone)]
pub struct RenderEngine {
    title: String,
}

impl Default for RenderEngine {
    fn default() -> Self {
        Self::new(DEFAULT_DOCUMENT_TITLE)
    }
}

impl RenderEngine {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the target's document with one built from `snapshot`.
    ///
    /// Never fails: an unavailable target turns the call into a no-op and a
    /// failed write leaves an empty document rather than a partial one.
    pub fn render<T: RenderTarget + ?Sized>(
        &self,
        snapshot: &RenderSnapshot<'_>,
        target: &mut T,
    ) -> RenderOutcome {
        let html = render_document(snapshot, &self.title);

        if let Err(err) = target.open() {
            tracing::debug!(%err, "preview target unavailable, skipping render");
            return RenderOutcome::Skipped;
        }

        let outcome = match target.write(&html) {
            Ok(()) => RenderOutcome::Rendered,
            Err(err) => {
                tracing::warn!(%err, "failed to write preview document");
                RenderOutcome::Aborted
            }
        };

        if let Err(err) = target.close() {
            tracing::warn!(%err, "failed to close preview document");
            return RenderOutcome::Aborted;
        }

        tracing::trace!(bytes = html.len(), ?outcome, "rendered preview");
        outcome
    }
}

/// A render target that keeps the last document in memory.
///
/// Useful for hosts without a browsing context and for observing renders.
#[derive(Debug, Default, Clone)]
pub struct MemoryTarget {
    pending: Option<String>,
    document: String,
    renders: usize,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document as of the last completed render.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Number of completed open/close cycles.
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl RenderTarget for MemoryTarget {
    fn open(&mut self) -> Result<()> {
        self.pending = Some(String::new());
        Ok(())
    }

    fn write(&mut self, html: &str) -> Result<()> {
        match self.pending.as_mut() {
            Some(buf) => {
                buf.push_str(html);
                Ok(())
            }
            None => Err(crate::TinyBoxError::RenderWrite(
                "write before open".to_string(),
            )),
        }
    }

    fn close(&mut self) -> Result<()> {
        let Some(doc) = self.pending.take() else {
            return Err(crate::TinyBoxError::RenderClose(
                "close before open".to_string(),
            ));
        };
        self.document = doc;
        self.renders += 1;
        Ok(())
    }
}
