//! Edit-to-preview state for one widget instance.

use crate::buffer::{BufferKind, Buffers, RenderSnapshot};
use crate::config::TinyBoxConfig;
use crate::render::{RenderEngine, RenderOutcome, RenderTarget};
use crate::source::{SourceDocument, extract};

/// Buffers plus the engine that renders them.
#[derive(Debug, Clone)]
pub struct Playground {
    buffers: Buffers,
    engine: RenderEngine,
    loaded: bool,
}

impl Default for Playground {
    fn default() -> Self {
        Self::new(&TinyBoxConfig::default())
    }
}

impl Playground {
    pub fn new(config: &TinyBoxConfig) -> Self {
        Self {
            buffers: Buffers::new(),
            engine: RenderEngine::new(config.document_title.clone()),
            loaded: false,
        }
    }

    /// Fill the buffers from the declarative template, once.
    ///
    /// `None` means the author gave no template: the buffers stay empty.
    /// Returns whether this call initialized the buffers; later calls leave
    /// edited content alone.
    pub fn load(&mut self, source: Option<SourceDocument>) -> bool {
        if self.loaded {
            return false;
        }
        self.loaded = true;

        let Some(mut doc) = source else {
            tracing::info!("no template found inside tiny-box, starting empty");
            return true;
        };

        let raw = extract(&mut doc);
        self.buffers = Buffers::from_raw(&raw);
        true
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn buffer(&self, kind: BufferKind) -> &str {
        self.buffers.get(kind)
    }

    pub fn buffers(&self) -> &Buffers {
        &self.buffers
    }

    /// Record a user edit.
    pub fn edit(&mut self, kind: BufferKind, text: impl Into<String>) {
        self.buffers.set(kind, text);
    }

    pub fn snapshot(&self) -> RenderSnapshot<'_> {
        self.buffers.snapshot()
    }

    /// Render the current buffers into `target`.
    pub fn render<T: RenderTarget + ?Sized>(&self, target: &mut T) -> RenderOutcome {
        self.engine.render(&self.snapshot(), target)
    }

    /// Record an edit and render straight away.
    pub fn edit_and_render<T: RenderTarget + ?Sized>(
        &mut self,
        kind: BufferKind,
        text: impl Into<String>,
        target: &mut T,
    ) -> RenderOutcome {
        self.edit(kind, text);
        self.render(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MemoryTarget;
    use crate::source::{SourceElement, SourceNode};

    fn template() -> SourceDocument {
        SourceDocument::new(vec![
            SourceNode::text("\n      "),
            SourceElement::new("style")
                .with_text("\n        p { color: red; }\n      ")
                .into(),
            SourceNode::text("\n      "),
            SourceElement::new("p").with_text("Hello").into(),
            SourceNode::text("\n      "),
            SourceElement::new("script")
                .with_text("\n        console.log(1);\n      ")
                .into(),
            SourceNode::text("\n    "),
        ])
    }

    #[test]
    fn test_load_from_template() {
        let mut playground = Playground::default();
        assert!(playground.load(Some(template())));
        assert_eq!(playground.buffer(BufferKind::Style), "p { color: red; }");
        assert_eq!(playground.buffer(BufferKind::Markup), "<p>Hello</p>");
        assert_eq!(playground.buffer(BufferKind::Script), "console.log(1);");
    }

    #[test]
    fn test_missing_template_leaves_buffers_empty() {
        let mut playground = Playground::default();
        assert!(playground.load(None));
        assert!(playground.is_loaded());
        assert_eq!(playground.buffers(), &Buffers::new());
    }

    #[test]
    fn test_load_only_once() {
        let mut playground = Playground::default();
        playground.load(Some(template()));
        playground.edit(BufferKind::Markup, "<p>edited</p>");

        assert!(!playground.load(Some(template())));
        assert_eq!(playground.buffer(BufferKind::Markup), "<p>edited</p>");
    }

    #[test]
    fn test_last_edit_wins() {
        let mut playground = Playground::default();
        let mut target = MemoryTarget::new();

        for text in ["<p>a</p>", "<p>ab</p>", "<p>abc</p>"] {
            playground.edit(BufferKind::Markup, text);
        }
        playground.render(&mut target);

        assert!(target.document().contains("<p>abc</p>"));
        assert!(!target.document().contains("<p>ab</p>"));
        assert_eq!(target.renders(), 1);
    }

    #[test]
    fn test_every_edit_renders() {
        let mut playground = Playground::default();
        let mut target = MemoryTarget::new();

        playground.edit_and_render(BufferKind::Style, "a{}", &mut target);
        playground.edit_and_render(BufferKind::Script, "go()", &mut target);

        assert_eq!(target.renders(), 2);
        assert!(target.document().contains("<style>a{}</style>"));
        assert!(target.document().contains("<script>go()</script>"));
    }

    #[test]
    fn test_custom_title() {
        let config = TinyBoxConfig {
            document_title: "Demo".into(),
            ..Default::default()
        };
        let playground = Playground::new(&config);
        let mut target = MemoryTarget::new();
        playground.render(&mut target);
        assert!(target.document().contains("<title>Demo</title>"));
    }
}
