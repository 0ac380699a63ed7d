//! Glyph insertion over a trigger token.

use std::ops::Range;

/// Replaces `range` in `text` with `glyph` followed by a single space.
///
/// Everything outside `range` is preserved verbatim. A range that is reversed, out of bounds
/// or not on char boundaries leaves `text` unchanged.
pub fn insert(text: &str, range: Range<usize>, glyph: &str) -> String {
    insert_with_cursor(text, range, glyph).0
}

/// Like [`insert`], also returning the cursor positioned after the inserted space.
pub fn insert_with_cursor(text: &str, range: Range<usize>, glyph: &str) -> (String, usize) {
    let (Some(head), Some(tail)) = (text.get(..range.start), text.get(range.end..)) else {
        tracing::warn!(
            start = range.start,
            end = range.end,
            len = text.len(),
            "emoji insertion range does not fit the text; leaving it unchanged"
        );
        return (text.to_string(), text.len());
    };
    if range.start > range.end {
        tracing::warn!(
            start = range.start,
            end = range.end,
            "emoji insertion range is reversed; leaving text unchanged"
        );
        return (text.to_string(), text.len());
    }

    let mut out = String::with_capacity(head.len() + glyph.len() + 1 + tail.len());
    out.push_str(head);
    out.push_str(glyph);
    out.push(' ');
    let cursor = out.len();
    out.push_str(tail);
    (out, cursor)
}

#[cfg(test)]
mod tests {
    use super::{insert, insert_with_cursor};

    #[test]
    fn replaces_token_with_glyph_and_space() {
        assert_eq!(insert("hello :sm", 6..9, "😄"), "hello 😄 ");
    }

    #[test]
    fn keeps_text_after_the_token() {
        let (text, cursor) = insert_with_cursor("hi :sm there", 3..6, "😄");
        assert_eq!(text, "hi 😄  there");
        assert_eq!(cursor, 3 + "😄".len() + 1);
    }

    #[test]
    fn length_accounts_for_glyph_and_space() {
        let original = "a :thumbs b";
        let range = 2..9;
        let glyph = "👍";
        let out = insert(original, range.clone(), glyph);
        assert_eq!(
            out.len(),
            original.len() - (range.end - range.start) + glyph.len() + 1
        );
    }

    #[test]
    fn invalid_ranges_leave_text_alone() {
        assert_eq!(insert("abc", 2..9, "😄"), "abc");
        assert_eq!(insert("abc", 2..1, "😄"), "abc");
        assert_eq!(insert("é", 1..2, "😄"), "é");
    }
}
