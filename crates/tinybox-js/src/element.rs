//! JsTinyBox - one playground widget, driven by the custom element shim.

use tinybox_browser::{BufferKind, TinyBoxConfig, TinyBoxElement};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

/// A playground widget mounted on a host element.
///
/// Construction builds the shadow tree; `connected` / `disconnected` follow
/// the custom element lifecycle callbacks.
#[wasm_bindgen]
pub struct JsTinyBox {
    inner: TinyBoxElement,
}

#[wasm_bindgen]
impl JsTinyBox {
    /// Mount on `host` with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(host: HtmlElement) -> Result<JsTinyBox, JsError> {
        Ok(Self {
            inner: TinyBoxElement::new(host, TinyBoxConfig::default())?,
        })
    }

    /// Mount on `host` with a partial configuration object.
    ///
    /// Missing fields take their defaults.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(host: HtmlElement, config: JsValue) -> Result<JsTinyBox, JsError> {
        let config: TinyBoxConfig = if config.is_undefined() || config.is_null() {
            TinyBoxConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))?
        };
        Ok(Self {
            inner: TinyBoxElement::new(host, config)?,
        })
    }

    pub fn connected(&mut self) {
        self.inner.connect();
    }

    pub fn disconnected(&mut self) {
        self.inner.disconnect();
    }

    #[wasm_bindgen(getter, js_name = isConnected)]
    pub fn is_connected(&self) -> bool {
        self.inner.is_connected()
    }

    /// Current content of the `"markup"`, `"style"` or `"script"` buffer.
    #[wasm_bindgen(js_name = getBuffer)]
    pub fn get_buffer(&self, kind: JsValue) -> Result<String, JsError> {
        let kind = parse_kind(kind)?;
        self.inner
            .buffer(kind)
            .ok_or_else(|| JsError::new("widget is busy"))
    }

    /// Replace a buffer and re-render.
    #[wasm_bindgen(js_name = setBuffer)]
    pub fn set_buffer(&self, kind: JsValue, text: &str) -> Result<(), JsError> {
        let kind = parse_kind(kind)?;
        self.inner.set_buffer(kind, text);
        Ok(())
    }

    /// The effective configuration.
    pub fn config(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.inner.config())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }
}

fn parse_kind(kind: JsValue) -> Result<BufferKind, JsError> {
    serde_wasm_bindgen::from_value(kind).map_err(|e| JsError::new(&format!("Invalid buffer: {}", e)))
}
