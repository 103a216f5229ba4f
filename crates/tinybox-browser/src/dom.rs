//! Small helpers shared by the DOM modules.

use gloo_utils::errors::JsError;
use tinybox_core::TinyBoxError;
use wasm_bindgen::{JsCast, JsValue};

/// Readable message for a thrown JS value.
pub fn js_message(value: JsValue) -> String {
    match JsError::try_from(value) {
        Ok(err) => err.to_string(),
        Err(not_error) => not_error.to_string(),
    }
}

pub(crate) fn dom_error(value: JsValue) -> TinyBoxError {
    TinyBoxError::Dom(js_message(value))
}

/// The global `document`, if there is one.
pub fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// Cast `value` to `T`, naming `what` in the error.
pub(crate) fn cast<T: JsCast>(value: impl JsCast, what: &'static str) -> Result<T, TinyBoxError> {
    value
        .dyn_into::<T>()
        .map_err(|_| TinyBoxError::MissingElement(what))
}
