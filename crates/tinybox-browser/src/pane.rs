//! Inline size overrides on a DOM element.

use tinybox_core::{Dimension, PaneStyle};
use web_sys::HtmlElement;

use crate::dom::js_message;

/// [`PaneStyle`] over an element's inline `style`.
///
/// A CSS `resize` drag writes the new size there.
pub struct DomPane<'a> {
    element: &'a HtmlElement,
}

impl<'a> DomPane<'a> {
    pub fn new(element: &'a HtmlElement) -> Self {
        Self { element }
    }
}

impl PaneStyle for DomPane<'_> {
    fn has_override(&self, dimension: Dimension) -> bool {
        self.element
            .style()
            .get_property_value(dimension.property())
            .is_ok_and(|value| !value.is_empty())
    }

    fn clear_override(&mut self, dimension: Dimension) {
        if let Err(err) = self.element.style().remove_property(dimension.property()) {
            tracing::warn!(%dimension, error = %js_message(err), "failed to clear pane override");
        }
    }
}
