//! Conversion of the host's declarative `<template>` into a [`SourceDocument`].

use tinybox_core::{SourceDocument, SourceElement, SourceNode};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlTemplateElement, Node};

use crate::dom::js_message;

/// The first `<template>` among the host's light-DOM descendants, as a
/// source tree. The template itself is left untouched.
pub fn source_from_host(host: &Element) -> Option<SourceDocument> {
    let template = match host.query_selector("template") {
        Ok(Some(element)) => element,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!(error = %js_message(err), "template lookup failed");
            return None;
        }
    };
    let template = template.dyn_into::<HtmlTemplateElement>().ok()?;
    Some(SourceDocument::new(convert_children(&template.content())))
}

fn convert_children(parent: &Node) -> Vec<SourceNode> {
    let children = parent.child_nodes();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|node| convert_node(&node))
        .collect()
}

fn convert_node(node: &Node) -> Option<SourceNode> {
    match node.node_type() {
        Node::ELEMENT_NODE => {
            let element = node.dyn_ref::<Element>()?;
            Some(SourceNode::Element(convert_element(element)))
        }
        Node::TEXT_NODE | Node::CDATA_SECTION_NODE => {
            Some(SourceNode::Text(node.node_value().unwrap_or_default()))
        }
        Node::COMMENT_NODE => Some(SourceNode::Comment(node.node_value().unwrap_or_default())),
        _ => None,
    }
}

fn convert_element(element: &Element) -> SourceElement {
    let mut out = SourceElement::new(element.local_name());

    for name in element.get_attribute_names().iter() {
        let Some(name) = name.as_string() else {
            continue;
        };
        let value = element.get_attribute(&name).unwrap_or_default();
        out = out.with_attribute(name, value);
    }

    // Nested templates keep their children in a separate fragment.
    out.children = match element.dyn_ref::<HtmlTemplateElement>() {
        Some(nested) => convert_children(&nested.content()),
        None => convert_children(element),
    };
    out
}
