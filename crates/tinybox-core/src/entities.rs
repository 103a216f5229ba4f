//! Character reference decoding.
//!
//! Mirrors what a browser does when markup is assigned to an RCDATA element
//! and read back as text: named and numeric references become characters,
//! anything unrecognised is left exactly as written.
//!
//! Names come from the HTML named character reference table shipped with
//! `markup5ever`, legacy forms without a trailing `;` included.

use markup5ever::data::{C1_REPLACEMENTS, NAMED_ENTITIES};

/// Decode character references in `text`.
///
/// Best effort: anything that does not form a known reference is copied
/// through unchanged, so this never fails.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];

        match decode_reference(after, &mut out) {
            Some(consumed) => rest = &after[consumed..],
            None => {
                out.push('&');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Decode the reference starting right after an `&` into `out`.
///
/// Returns how many bytes of `input` it consumed.
fn decode_reference(input: &str, out: &mut String) -> Option<usize> {
    if let Some(numeric) = input.strip_prefix('#') {
        let (ch, consumed) = decode_numeric(numeric)?;
        out.push(ch);
        return Some(consumed + 1);
    }
    decode_named(input, out)
}

fn decode_numeric(input: &str) -> Option<(char, usize)> {
    let (radix, digits_start) = match input.as_bytes().first() {
        Some(b'x') | Some(b'X') => (16, 1),
        _ => (10, 0),
    };

    let digits: &str = {
        let tail = &input[digits_start..];
        let len = tail
            .bytes()
            .take_while(|b| (*b as char).is_digit(radix))
            .count();
        &tail[..len]
    };
    if digits.is_empty() {
        return None;
    }

    let mut consumed = digits_start + digits.len();
    if input[consumed..].starts_with(';') {
        consumed += 1;
    }

    // Overlong digit runs saturate, which lands in the out-of-range branch.
    let value = u32::from_str_radix(digits, radix).unwrap_or(u32::MAX);
    Some((numeric_char(value), consumed))
}

fn numeric_char(value: u32) -> char {
    match value {
        0 => char::REPLACEMENT_CHARACTER,
        // windows-1252 reinterpretation of C1 controls.
        0x80..=0x9F => C1_REPLACEMENTS[(value - 0x80) as usize]
            .or_else(|| char::from_u32(value))
            .unwrap_or(char::REPLACEMENT_CHARACTER),
        // Surrogates and values past U+10FFFF are rejected by from_u32.
        _ => char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER),
    }
}

/// Longest named reference at the start of `input`.
///
/// The table also holds every prefix of every name, mapped to `(0, 0)`, so
/// the scan stops as soon as no name can match any more.
fn decode_named(input: &str, out: &mut String) -> Option<usize> {
    let mut best = None;
    for (idx, c) in input.char_indices() {
        let end = idx + c.len_utf8();
        match NAMED_ENTITIES.get(&input[..end]) {
            None => break,
            Some(&(0, _)) => {}
            Some(&(first, second)) => best = Some((first, second, end)),
        }
        if c == ';' {
            break;
        }
    }

    let (first, second, consumed) = best?;
    out.push(char::from_u32(first)?);
    if second != 0 {
        out.push(char::from_u32(second)?);
    }
    Some(consumed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_named() {
        assert_eq!(decode_entities("&lt;p&gt;Hi&lt;/p&gt;"), "<p>Hi</p>");
        assert_eq!(decode_entities("a &amp;&amp; b"), "a && b");
        assert_eq!(decode_entities("&quot;x&quot; &apos;y&apos;"), "\"x\" 'y'");
        assert_eq!(decode_entities("&nbsp;"), "\u{00A0}");
    }

    #[test]
    fn test_full_name_table() {
        assert_eq!(decode_entities("&hearts;"), "\u{2665}");
        assert_eq!(decode_entities("a &minus; b"), "a \u{2212} b");
        assert_eq!(decode_entities("&rsaquo;"), "\u{203A}");
        assert_eq!(decode_entities("&NotEqualTilde;"), "\u{2242}\u{0338}");
    }

    #[test]
    fn test_numeric() {
        assert_eq!(decode_entities("&#60;&#x3E;&#X3e;"), "<>>");
        assert_eq!(decode_entities("&#128512;"), "😀");
        assert_eq!(decode_entities("&#65"), "A");
    }

    #[test]
    fn test_numeric_invalid_values() {
        assert_eq!(decode_entities("&#0;"), "\u{FFFD}");
        assert_eq!(decode_entities("&#xD800;"), "\u{FFFD}");
        assert_eq!(decode_entities("&#x110000;"), "\u{FFFD}");
        assert_eq!(decode_entities("&#99999999999999;"), "\u{FFFD}");
        assert_eq!(decode_entities("&#x80;"), "\u{20AC}");
        assert_eq!(decode_entities("&#x81;"), "\u{0081}");
    }

    #[test]
    fn test_unknown_passes_through() {
        assert_eq!(decode_entities("&bogus;"), "&bogus;");
        assert_eq!(decode_entities("&zz;"), "&zz;");
        assert_eq!(decode_entities("a & b"), "a & b");
        assert_eq!(decode_entities("&#;"), "&#;");
        assert_eq!(decode_entities("&#x;"), "&#x;");
        assert_eq!(decode_entities("&;"), "&;");
        assert_eq!(decode_entities("trailing &"), "trailing &");
        assert_eq!(decode_entities("&&lt;"), "&<");
    }

    #[test]
    fn test_legacy_without_semicolon() {
        assert_eq!(decode_entities("&lt b"), "< b");
        assert_eq!(decode_entities("&amp"), "&");
        assert_eq!(decode_entities("&eacute"), "\u{00E9}");
        assert_eq!(decode_entities("&copy2024"), "\u{00A9}2024");
        // Not a legacy name, so it needs its semicolon.
        assert_eq!(decode_entities("&hellip"), "&hellip");
    }

    #[test]
    fn test_longest_legacy_prefix_wins() {
        assert_eq!(decode_entities("&notit;"), "\u{00AC}it;");
        assert_eq!(decode_entities("&notin;"), "\u{2209}");
        assert_eq!(decode_entities("&ampfoo;"), "&foo;");
    }

    #[test]
    fn test_no_double_decode() {
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
    }
}
