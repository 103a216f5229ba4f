//! Declarative source content and its extraction into raw buffers.
//!
//! A page author writes the initial snippet inside a `<template>`. The
//! browser layer converts the template's content into a [`SourceDocument`],
//! and [`extract`] splits it into markup, style and script text.

use smol_str::SmolStr;

/// Elements that never have an end tag when serialized.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose text children serialize without escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "style",
    "script",
    "xmp",
    "iframe",
    "noembed",
    "noframes",
    "plaintext",
];

/// Template contents live in a separate fragment: selector matching and
/// text content do not look inside them.
const TEMPLATE: &str = "template";

/// One node of declarative source content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceNode {
    Element(SourceElement),
    Text(String),
    Comment(String),
}

impl SourceNode {
    pub fn text(text: impl Into<String>) -> Self {
        SourceNode::Text(text.into())
    }

    pub fn comment(data: impl Into<String>) -> Self {
        SourceNode::Comment(data.into())
    }

    /// Append this node's markup, escaping text as its parent requires.
    fn serialize_into(&self, out: &mut String, raw_text_parent: bool) {
        match self {
            SourceNode::Element(element) => element.serialize_into(out),
            SourceNode::Text(text) if raw_text_parent => out.push_str(text),
            SourceNode::Text(text) => escape_text(out, text),
            SourceNode::Comment(data) => {
                out.push_str("<!--");
                out.push_str(data);
                out.push_str("-->");
            }
        }
    }
}

impl From<SourceElement> for SourceNode {
    fn from(element: SourceElement) -> Self {
        SourceNode::Element(element)
    }
}

/// An element with its attributes (in source order) and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceElement {
    pub name: SmolStr,
    pub attributes: Vec<(SmolStr, String)>,
    pub children: Vec<SourceNode>,
}

impl SourceElement {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: impl Into<SourceNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(SourceNode::Text(text.into()))
    }

    fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if self.is(TEMPLATE) {
            return;
        }
        for child in &self.children {
            match child {
                SourceNode::Text(text) => out.push_str(text),
                SourceNode::Element(element) => element.collect_text(out),
                SourceNode::Comment(_) => {}
            }
        }
    }

    /// The element's outer markup.
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        self.serialize_into(&mut out);
        out
    }

    fn serialize_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_attribute(out, value);
            out.push('"');
        }
        out.push('>');

        if VOID_ELEMENTS.iter().any(|void| self.is(void)) {
            return;
        }

        let raw = RAW_TEXT_ELEMENTS.iter().any(|raw| self.is(raw));
        for child in &self.children {
            child.serialize_into(out, raw);
        }

        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }

    /// Detach the first descendant named `name`, in document order.
    fn take_first(&mut self, name: &str) -> Option<SourceElement> {
        if self.is(TEMPLATE) {
            return None;
        }
        take_first_in(&mut self.children, name)
    }
}

/// Pre-order search over `nodes`, removing and returning the first match.
fn take_first_in(nodes: &mut Vec<SourceNode>, name: &str) -> Option<SourceElement> {
    for idx in 0..nodes.len() {
        let SourceNode::Element(element) = &mut nodes[idx] else {
            continue;
        };
        if element.is(name) {
            return match nodes.remove(idx) {
                SourceNode::Element(found) => Some(found),
                _ => None,
            };
        }
        if let Some(found) = element.take_first(name) {
            return Some(found);
        }
    }
    None
}

fn escape_text(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{00A0}' => out.push_str("&nbsp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}

fn escape_attribute(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{00A0}' => out.push_str("&nbsp;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}

/// The content of a declarative template: top-level nodes in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceDocument {
    pub nodes: Vec<SourceNode>,
}

impl SourceDocument {
    pub fn new(nodes: Vec<SourceNode>) -> Self {
        Self { nodes }
    }

    /// Detach the first element named `name`, in document order.
    pub fn take_first(&mut self, name: &str) -> Option<SourceElement> {
        take_first_in(&mut self.nodes, name)
    }

    /// Markup of the top-level nodes: elements serialize, text and comments
    /// contribute their text.
    pub fn markup(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            match node {
                SourceNode::Element(element) => element.serialize_into(&mut out),
                SourceNode::Text(text) | SourceNode::Comment(text) => out.push_str(text),
            }
        }
        out
    }
}

/// The three unnormalized texts pulled out of a [`SourceDocument`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSources {
    pub markup: String,
    pub style: String,
    pub script: String,
}

/// Split a source document into markup, style and script.
///
/// The first `<style>` and first `<script>` are detached from `doc` before
/// the markup is computed, so `doc` is consumed in the process.
pub fn extract(doc: &mut SourceDocument) -> RawSources {
    let style = doc
        .take_first("style")
        .map(|el| el.text_content())
        .unwrap_or_default();
    let script = doc
        .take_first("script")
        .map(|el| el.text_content())
        .unwrap_or_default();
    let markup = doc.markup();

    tracing::debug!(
        markup_len = markup.len(),
        style_len = style.len(),
        script_len = script.len(),
        "extracted template content"
    );

    RawSources {
        markup,
        style,
        script,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(name: &str) -> SourceElement {
        SourceElement::new(name)
    }

    #[test]
    fn test_extract_style_markup_script() {
        let mut doc = SourceDocument::new(vec![
            el("style").with_text(".a{color:red}").into(),
            el("p").with_text("Hi").into(),
            el("script").with_text("let x=1;").into(),
        ]);

        let raw = extract(&mut doc);
        assert_eq!(raw.style, ".a{color:red}");
        assert_eq!(raw.markup, "<p>Hi</p>");
        assert_eq!(raw.script, "let x=1;");
        // Extraction detaches the style and script nodes.
        assert_eq!(doc.nodes.len(), 1);
    }

    #[test]
    fn test_extract_without_style_or_script() {
        let mut doc = SourceDocument::new(vec![
            SourceNode::text("\n  "),
            el("h1").with_text("Title").into(),
            SourceNode::text("\n"),
        ]);

        let raw = extract(&mut doc);
        assert_eq!(raw.style, "");
        assert_eq!(raw.script, "");
        assert_eq!(raw.markup, "\n  <h1>Title</h1>\n");
    }

    #[test]
    fn test_only_first_style_is_extracted() {
        let mut doc = SourceDocument::new(vec![
            el("style").with_text("a{}").into(),
            el("style").with_text("b{}").into(),
        ]);

        let raw = extract(&mut doc);
        assert_eq!(raw.style, "a{}");
        assert_eq!(raw.markup, "<style>b{}</style>");
    }

    #[test]
    fn test_nested_style_is_found_and_detached() {
        let mut doc = SourceDocument::new(vec![
            el("div")
                .with_child(el("style").with_text("p{}"))
                .with_child(el("p").with_text("x"))
                .into(),
        ]);

        let raw = extract(&mut doc);
        assert_eq!(raw.style, "p{}");
        assert_eq!(raw.markup, "<div><p>x</p></div>");
    }

    #[test]
    fn test_template_content_is_not_searched() {
        let mut doc = SourceDocument::new(vec![
            el("template")
                .with_child(el("script").with_text("inner()"))
                .into(),
        ]);

        let raw = extract(&mut doc);
        assert_eq!(raw.script, "");
        assert_eq!(raw.markup, "<template><script>inner()</script></template>");
    }

    #[test]
    fn test_top_level_comment_contributes_its_text() {
        let mut doc = SourceDocument::new(vec![
            SourceNode::comment(" note "),
            el("div").with_child(SourceNode::comment("kept")).into(),
        ]);

        let raw = extract(&mut doc);
        assert_eq!(raw.markup, " note <div><!--kept--></div>");
    }

    #[test]
    fn test_style_text_content_skips_comments() {
        let style = el("style")
            .with_text("a{}")
            .with_child(SourceNode::comment("x"))
            .with_text("b{}");
        assert_eq!(style.text_content(), "a{}b{}");
    }

    #[test]
    fn test_serialization_escaping() {
        let element = el("a")
            .with_attribute("href", "/?a=1&b=\"2\"")
            .with_attribute("title", "x<y")
            .with_text("1 < 2 & 3 > 2\u{00A0}");
        insta::assert_snapshot!(
            element.outer_html(),
            @r#"<a href="/?a=1&amp;b=&quot;2&quot;" title="x<y">1 &lt; 2 &amp; 3 &gt; 2&nbsp;</a>"#
        );
    }

    #[test]
    fn test_serialization_raw_text_and_void() {
        let element = el("div")
            .with_child(el("br"))
            .with_child(el("img").with_attribute("src", "a.png"))
            .with_child(el("xmp").with_text("<b>&</b>"));
        insta::assert_snapshot!(
            element.outer_html(),
            @r#"<div><br><img src="a.png"><xmp><b>&</b></xmp></div>"#
        );
    }

    #[test]
    fn test_empty_document() {
        let mut doc = SourceDocument::default();
        assert_eq!(extract(&mut doc), RawSources::default());
    }
}
