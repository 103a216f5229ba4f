//! The three editable source buffers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;
use crate::source::RawSources;

/// Which of the three sources a buffer holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BufferKind {
    Markup,
    Style,
    Script,
}

impl BufferKind {
    pub const ALL: [BufferKind; 3] = [BufferKind::Markup, BufferKind::Style, BufferKind::Script];

    /// Id of the textarea editing this buffer in the shadow tree.
    pub fn input_id(self) -> &'static str {
        match self {
            BufferKind::Markup => "htmlInput",
            BufferKind::Style => "cssInput",
            BufferKind::Script => "jsInput",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BufferKind::Markup => "markup",
            BufferKind::Style => "style",
            BufferKind::Script => "script",
        }
    }
}

impl fmt::Display for BufferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owned text of all three buffers.
///
/// Starts empty; filled once from the template, then changed only by edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffers {
    markup: String,
    style: String,
    script: String,
}

impl Buffers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize each raw source independently.
    pub fn from_raw(raw: &RawSources) -> Self {
        Self {
            markup: normalize(&raw.markup),
            style: normalize(&raw.style),
            script: normalize(&raw.script),
        }
    }

    pub fn get(&self, kind: BufferKind) -> &str {
        match kind {
            BufferKind::Markup => &self.markup,
            BufferKind::Style => &self.style,
            BufferKind::Script => &self.script,
        }
    }

    pub fn set(&mut self, kind: BufferKind, text: impl Into<String>) {
        let slot = match kind {
            BufferKind::Markup => &mut self.markup,
            BufferKind::Style => &mut self.style,
            BufferKind::Script => &mut self.script,
        };
        *slot = text.into();
    }

    /// Read all three buffers at once for a render.
    pub fn snapshot(&self) -> RenderSnapshot<'_> {
        RenderSnapshot {
            markup: &self.markup,
            style: &self.style,
            script: &self.script,
        }
    }
}

/// The buffer contents a single render works from.
///
/// Borrowed, so it cannot outlive or drift from the buffers it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSnapshot<'a> {
    pub markup: &'a str,
    pub style: &'a str,
    pub script: &'a str,
}
