//! tinybox-core: the live playground's logic without any browser dependency.
//!
//! This crate provides:
//! - `SourceDocument` and `extract` - splitting a declarative template into
//!   markup, style and script
//! - `normalize` - entity decoding and dedenting of extracted text
//! - `Playground` / `RenderEngine` - rendering the buffers into a preview
//!   document through any `RenderTarget`
//! - `LayoutReconciler` - clearing stale drag-resize overrides when the
//!   layout switches between stacked and side by side
//! - font registration and Tab indentation helpers

pub mod buffer;
pub mod config;
pub mod entities;
pub mod error;
pub mod font;
pub mod indent;
pub mod layout;
pub mod normalize;
pub mod playground;
pub mod render;
pub mod source;

pub use buffer::{BufferKind, Buffers, RenderSnapshot};
pub use config::{DEFAULT_LAYOUT_THRESHOLD, Placeholders, TinyBoxConfig};
pub use entities::decode_entities;
pub use error::{Result, TinyBoxError};
pub use font::{FONT_MARKER, FontFace, FontRegistry, MarkerSet, Registration, register_once};
pub use indent::{IndentEdit, Key, KeydownResult, Selection, apply_insert, handle_keydown};
pub use layout::{
    Dimension, LayoutMode, LayoutReconciler, PaneOverrides, PaneStyle, Reconciled,
};
pub use normalize::normalize;
pub use playground::Playground;
pub use render::{MemoryTarget, RenderEngine, RenderOutcome, RenderTarget, render_document};
pub use smol_str::SmolStr;
pub use source::{RawSources, SourceDocument, SourceElement, SourceNode, extract};
