//! Tab key handling for the editing buffers.
//!
//! Textareas move focus on Tab. Inside the playground Tab inserts the indent
//! unit instead, replacing whatever is selected.

use smol_str::SmolStr;

/// Key values the buffers care about.
///
/// Platform code converts from native key events to this.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Tab,
    Character(SmolStr),
    Other(SmolStr),
}

impl Key {
    /// Parse a `KeyboardEvent.key` value.
    pub fn from_key_str(key: &str) -> Self {
        match key {
            "Tab" => Key::Tab,
            s if s.chars().count() == 1 => Key::Character(SmolStr::new(s)),
            s => Key::Other(SmolStr::new(s)),
        }
    }
}

/// Result of handling a keydown event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeydownResult {
    /// Insert this text at the selection and prevent default.
    InsertText(SmolStr),
    /// Let the platform handle the key.
    PassThrough,
}

/// Decide what a keydown in a buffer does.
pub fn handle_keydown(key: &Key, indent: &str) -> KeydownResult {
    match key {
        Key::Tab => KeydownResult::InsertText(SmolStr::new(indent)),
        _ => KeydownResult::PassThrough,
    }
}

/// A textarea selection in UTF-16 code units, as the DOM reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: u32,
    pub end: u32,
}

impl Selection {
    pub fn new(start: u32, end: u32) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    pub fn caret(offset: u32) -> Self {
        Self::new(offset, offset)
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

/// Text and caret after inserting at a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentEdit {
    pub text: String,
    /// Collapsed caret just after the inserted text, in UTF-16 units.
    pub caret: u32,
}

/// Byte index for a UTF-16 offset, clamped to the end of `text`.
///
/// An offset in the middle of a surrogate pair rounds up to the next char.
fn utf16_to_byte(text: &str, offset: u32) -> usize {
    let mut units = 0u32;
    for (idx, c) in text.char_indices() {
        if units >= offset {
            return idx;
        }
        units += c.len_utf16() as u32;
    }
    text.len()
}

fn utf16_len(text: &str) -> u32 {
    text.chars().map(|c| c.len_utf16() as u32).sum()
}

/// Replace `selection` in `text` with `insert`.
///
/// Used when the platform's own editing command is unavailable.
pub fn apply_insert(text: &str, selection: Selection, insert: &str) -> IndentEdit {
    let start = utf16_to_byte(text, selection.start);
    let end = utf16_to_byte(text, selection.end).max(start);

    let mut out = String::with_capacity(text.len() - (end - start) + insert.len());
    out.push_str(&text[..start]);
    out.push_str(insert);
    out.push_str(&text[end..]);

    IndentEdit {
        caret: utf16_len(&text[..start]) + utf16_len(insert),
        text: out,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys() {
        assert_eq!(Key::from_key_str("Tab"), Key::Tab);
        assert_eq!(Key::from_key_str("a"), Key::Character("a".into()));
        assert_eq!(Key::from_key_str("Enter"), Key::Other("Enter".into()));
    }

    #[test]
    fn test_only_tab_is_handled() {
        assert_eq!(
            handle_keydown(&Key::Tab, "  "),
            KeydownResult::InsertText("  ".into())
        );
        assert_eq!(
            handle_keydown(&Key::Character("x".into()), "  "),
            KeydownResult::PassThrough
        );
    }

    #[test]
    fn test_insert_at_caret() {
        let edit = apply_insert("ab", Selection::caret(1), "  ");
        assert_eq!(edit.text, "a  b");
        assert_eq!(edit.caret, 3);
    }

    #[test]
    fn test_insert_replaces_selection() {
        let edit = apply_insert("hello world", Selection::new(5, 11), "  ");
        assert_eq!(edit.text, "hello  ");
        assert_eq!(edit.caret, 7);
    }

    #[test]
    fn test_backwards_selection_is_ordered() {
        assert_eq!(Selection::new(4, 2), Selection::new(2, 4));
    }

    #[test]
    fn test_utf16_offsets() {
        // The emoji is two UTF-16 units.
        let edit = apply_insert("😀x", Selection::caret(2), "  ");
        assert_eq!(edit.text, "😀  x");
        assert_eq!(edit.caret, 4);
    }

    #[test]
    fn test_offsets_past_end_clamp() {
        let edit = apply_insert("ab", Selection::new(10, 20), "  ");
        assert_eq!(edit.text, "ab  ");
        assert_eq!(edit.caret, 4);
    }
}
