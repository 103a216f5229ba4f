//! Load-time cleanup of extracted source text.
//!
//! Template content is usually indented to match the surrounding page and
//! may carry escaped characters. Each buffer is decoded and dedented once,
//! independently, before it becomes editable.

use crate::entities::decode_entities;

/// Whitespace as matched by `\s` in browser regular expressions.
///
/// Differs from [`char::is_whitespace`] only in U+0085 (not included) and
/// U+FEFF (included).
pub fn is_space(c: char) -> bool {
    c == '\u{FEFF}' || (c != '\u{0085}' && c.is_whitespace())
}

/// Number of leading whitespace chars on a line.
fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| is_space(*c)).count()
}

fn is_blank(line: &str) -> bool {
    line.chars().all(is_space)
}

/// Smallest indentation over the lines that have content.
///
/// Zero when every line is blank, so degenerate input strips nothing.
pub fn min_indent<'a>(lines: impl IntoIterator<Item = &'a str>) -> usize {
    lines
        .into_iter()
        .filter(|line| !is_blank(line))
        .map(indent_width)
        .min()
        .unwrap_or(0)
}

/// Drop up to `count` chars from the front of `line`.
fn strip_prefix_chars(line: &str, count: usize) -> &str {
    match line.char_indices().nth(count) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}

/// Remove the leading run of blank lines.
///
/// Everything up to and including the last newline inside the leading
/// whitespace goes; indentation on the first real line is kept.
fn strip_leading_blank_lines(text: &str) -> &str {
    let ws_len = text
        .char_indices()
        .find(|(_, c)| !is_space(*c))
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());

    match text[..ws_len].rfind('\n') {
        Some(newline) => &text[newline + 1..],
        None => text,
    }
}

/// Decode, dedent and trim one raw buffer.
pub fn normalize(raw: &str) -> String {
    let decoded = decode_entities(raw);
    let lines: Vec<&str> = decoded.split('\n').collect();
    let indent = min_indent(lines.iter().copied());

    let dedented = lines
        .iter()
        .map(|line| strip_prefix_chars(line, indent))
        .collect::<Vec<_>>()
        .join("\n");

    strip_leading_blank_lines(&dedented)
        .trim_end_matches(is_space)
        .to_string()
}
