//! Tab indentation in the buffer textareas.

use tinybox_core::{KeydownResult, Key, Selection, TinyBoxError, apply_insert, handle_keydown};
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, HtmlTextAreaElement, KeyboardEvent};

use crate::dom::{dom_error, js_message};

/// How an intercepted key was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not ours; the browser handles it.
    PassThrough,
    /// Inserted through the editing command. The browser fires `input`.
    Native,
    /// Written to the value directly. Nothing fires `input`, the caller has
    /// to render.
    Direct,
}

/// Handle a keydown in `textarea`, inserting `indent` on Tab.
pub fn handle_key(
    event: &KeyboardEvent,
    textarea: &HtmlTextAreaElement,
    indent: &str,
) -> Result<KeyOutcome, TinyBoxError> {
    let key = Key::from_key_str(&event.key());
    let KeydownResult::InsertText(text) = handle_keydown(&key, indent) else {
        return Ok(KeyOutcome::PassThrough);
    };
    event.prevent_default();

    if insert_text_command(&text) {
        return Ok(KeyOutcome::Native);
    }
    insert_directly(textarea, &text)?;
    Ok(KeyOutcome::Direct)
}

/// Run `insertText` on the focused element, keeping native undo.
fn insert_text_command(text: &str) -> bool {
    let Some(document) = crate::dom::document() else {
        return false;
    };
    let Ok(document) = document.dyn_into::<HtmlDocument>() else {
        return false;
    };
    match document.exec_command_with_show_ui_and_value("insertText", false, text) {
        Ok(accepted) => accepted,
        Err(err) => {
            tracing::debug!(error = %js_message(err), "insertText command unavailable");
            false
        }
    }
}

/// Replace the selection in `textarea` with `text` and collapse the caret
/// after it.
pub fn insert_directly(textarea: &HtmlTextAreaElement, text: &str) -> Result<(), TinyBoxError> {
    let value = textarea.value();
    let start = textarea.selection_start().map_err(dom_error)?.unwrap_or(0);
    let end = textarea.selection_end().map_err(dom_error)?.unwrap_or(start);

    let edit = apply_insert(&value, Selection::new(start, end), text);
    textarea.set_value(&edit.text);
    textarea
        .set_selection_range(edit.caret, edit.caret)
        .map_err(dom_error)
}
