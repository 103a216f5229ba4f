//! The widget's shadow tree: stylesheet, editor pane and preview pane.

use tinybox_core::{BufferKind, TinyBoxConfig, TinyBoxError};
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlElement, HtmlIFrameElement, HtmlTextAreaElement, ShadowRoot, ShadowRootInit,
    ShadowRootMode,
};

use crate::dom::{cast, dom_error};

pub const CONTAINER_ID: &str = "container";
pub const EDITOR_ID: &str = "editor";
pub const OUTPUT_ID: &str = "output";
pub const FRAME_ID: &str = "outputFrame";

/// Stylesheet for the shadow tree.
///
/// The host is an inline-size container; below the threshold the panes stack
/// and the editor resizes vertically instead of horizontally.
pub fn shadow_style(config: &TinyBoxConfig) -> String {
    let family = config.font.family_stack();
    let threshold = config.layout_threshold;
    format!(
        r#":host {{
  display: flex;
  width: 100%;
  height: 100%;
  container-type: inline-size;
}}
#container {{
  display: flex;
  width: 100%;
  height: 100%;
}}
#editor {{
  display: flex;
  flex-direction: column;
  width: 50%;
  height: 100%;
  background: #1d1d1d;
  resize: horizontal;
  overflow: auto;
}}
#output {{
  display: flex;
  background: white;
  flex-grow: 1;
  overflow: auto;
}}
.input-container {{
  display: flex;
  height: calc(100% / 3);
  position: relative;
  padding: 8px;
  resize: vertical;
  overflow: auto;
}}
textarea {{
  width: 100%;
  height: 100%;
  box-sizing: border-box;
  margin: 0;
  padding: 4px;
  background-color: black;
  border-radius: 4px;
  color: #f1f1f1;
  font-family: {family};
  line-height: 1.4;
  resize: none;
  overflow: auto;
  white-space: pre;
}}
iframe {{
  border: none;
  flex: 1;
}}
@container (width < {threshold}px) {{
  #container {{
    flex-direction: column;
  }}
  #editor {{
    width: 100%;
    height: 50%;
    resize: vertical;
  }}
}}
"#
    )
}

/// Markup for the shadow tree. Placeholders are set afterwards as properties.
pub fn shadow_markup(config: &TinyBoxConfig) -> String {
    let mut inputs = String::new();
    for kind in BufferKind::ALL {
        inputs.push_str(&format!(
            "    <div class=\"input-container\">\n      <textarea id=\"{}\" spellcheck=\"false\"></textarea>\n    </div>\n",
            kind.input_id()
        ));
    }
    format!(
        "<style>\n{style}</style>\n<div id=\"{CONTAINER_ID}\">\n  <div id=\"{EDITOR_ID}\">\n{inputs}  </div>\n  <div id=\"{OUTPUT_ID}\">\n    <iframe id=\"{FRAME_ID}\"></iframe>\n  </div>\n</div>\n",
        style = shadow_style(config),
    )
}

/// Handles to the interesting elements of the shadow tree.
#[derive(Debug, Clone)]
pub struct ShadowParts {
    pub root: ShadowRoot,
    pub container: HtmlElement,
    pub editor: HtmlElement,
    pub frame: HtmlIFrameElement,
    pub markup: HtmlTextAreaElement,
    pub style: HtmlTextAreaElement,
    pub script: HtmlTextAreaElement,
}

impl ShadowParts {
    /// Attach an open shadow root to `host` and fill it.
    ///
    /// Fails if `host` already has a shadow root.
    pub fn build(host: &HtmlElement, config: &TinyBoxConfig) -> Result<Self, TinyBoxError> {
        let root = host
            .attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))
            .map_err(dom_error)?;
        root.set_inner_html(&shadow_markup(config));

        let parts = Self::find(root)?;
        for kind in BufferKind::ALL {
            parts.input(kind).set_placeholder(config.placeholders.get(kind));
        }
        Ok(parts)
    }

    /// Look the parts up in an already populated shadow root.
    pub fn find(root: ShadowRoot) -> Result<Self, TinyBoxError> {
        Ok(Self {
            container: by_id(&root, CONTAINER_ID)?,
            editor: by_id(&root, EDITOR_ID)?,
            frame: by_id(&root, FRAME_ID)?,
            markup: by_id(&root, BufferKind::Markup.input_id())?,
            style: by_id(&root, BufferKind::Style.input_id())?,
            script: by_id(&root, BufferKind::Script.input_id())?,
            root,
        })
    }

    pub fn input(&self, kind: BufferKind) -> &HtmlTextAreaElement {
        match kind {
            BufferKind::Markup => &self.markup,
            BufferKind::Style => &self.style,
            BufferKind::Script => &self.script,
        }
    }
}

fn by_id<T: JsCast>(root: &ShadowRoot, id: &'static str) -> Result<T, TinyBoxError> {
    let element = root
        .get_element_by_id(id)
        .ok_or(TinyBoxError::MissingElement(id))?;
    cast(element, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_has_every_part() {
        let markup = shadow_markup(&TinyBoxConfig::default());
        for id in [
            CONTAINER_ID,
            EDITOR_ID,
            OUTPUT_ID,
            FRAME_ID,
            "htmlInput",
            "cssInput",
            "jsInput",
        ] {
            assert!(markup.contains(&format!("id=\"{id}\"")), "missing {id}");
        }
    }

    #[test]
    fn test_style_follows_config() {
        let mut config = TinyBoxConfig::default();
        config.layout_threshold = 720.0;
        config.font.family = "Mono".into();

        let style = shadow_style(&config);
        assert!(style.contains("@container (width < 720px)"));
        assert!(style.contains("font-family: 'Mono', monospace;"));
    }
}
