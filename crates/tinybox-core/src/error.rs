//! Error types for the playground.
//!
//! None of these reach the page author: the update path absorbs them and
//! logs. They exist so the layers below can report *why* something was
//! skipped.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
pub enum TinyBoxError {
    #[error("render target unavailable: {0}")]
    #[diagnostic(code(tinybox::render::target_unavailable))]
    TargetUnavailable(String),

    #[error("failed to write preview document: {0}")]
    #[diagnostic(code(tinybox::render::write_failed))]
    RenderWrite(String),

    #[error("failed to close preview document: {0}")]
    #[diagnostic(code(tinybox::render::close_failed))]
    RenderClose(String),

    #[error("shadow tree is missing #{0}")]
    #[diagnostic(
        code(tinybox::dom::missing_element),
        help("the shadow template and the element ids looked up must agree")
    )]
    MissingElement(&'static str),

    #[error("dom operation failed: {0}")]
    #[diagnostic(code(tinybox::dom::operation))]
    Dom(String),

    #[error("font registration failed: {0}")]
    #[diagnostic(code(tinybox::font::registration))]
    FontRegistration(String),

    #[error("invalid configuration: {0}")]
    #[diagnostic(code(tinybox::config::invalid))]
    Config(String),
}

pub type Result<T, E = TinyBoxError> = std::result::Result<T, E>;
