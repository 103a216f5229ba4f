//! Browser DOM layer for the tinybox playground widget.
//!
//! Wires `tinybox-core` to a real document. It assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `shadow`: shadow tree markup, stylesheet and part lookup
//! - `template`: light-DOM `<template>` to source tree conversion
//! - `frame`: the preview iframe as a render target
//! - `pane`: inline size overrides on the editor pane
//! - `font`: `@font-face` registration in the document head
//! - `keys`: Tab indentation
//! - `widget`: `TinyBoxElement` and its listener lifecycle
//!
//! # Re-exports
//!
//! This crate re-exports `tinybox-core` for convenience, so consumers
//! only need to depend on `tinybox-browser`.

// Re-export core crate
pub use tinybox_core;
pub use tinybox_core::*;

pub mod dom;
pub mod font;
pub mod frame;
pub mod keys;
pub mod pane;
pub mod shadow;
pub mod template;
pub mod widget;

pub use font::DocumentFonts;
pub use frame::FrameTarget;
pub use keys::KeyOutcome;
pub use pane::DomPane;
pub use shadow::ShadowParts;
pub use template::source_from_host;
pub use widget::TinyBoxElement;
