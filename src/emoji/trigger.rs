//! Trigger token extraction.
//!
//! A trigger is the text after the last `:` before the cursor, up to the cursor, as long as no
//! whitespace sits in between and the cursor is not touching an emoji.

use std::ops::Range;

use crate::core::text::is_cursor_next_to_emoji;

pub const TRIGGER_CHAR: char = ':';
pub const ESCAPE_CHAR: char = '\\';

/// The `:query` token under the cursor.
///
/// `start` is the byte offset of the `:`; `end` is the cursor. Replacing `start..end` removes
/// the whole token including the colon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerToken {
    pub query: String,
    pub start: usize,
    pub end: usize,
}

impl TriggerToken {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Returns the trigger token ending at `cursor`, or `None` when the cursor is not inside one.
///
/// `cursor` is a byte offset; one that is out of bounds or splits a code point yields `None`.
pub fn extract_trigger(text: &str, cursor: usize) -> Option<TriggerToken> {
    let before = text.get(..cursor)?;

    if is_cursor_next_to_emoji(text, cursor) {
        return None;
    }

    let colon = before.rfind(TRIGGER_CHAR)?;
    if is_escaped(&before[..colon]) {
        return None;
    }

    let query = &before[colon + TRIGGER_CHAR.len_utf8()..];
    if query.chars().any(char::is_whitespace) {
        return None;
    }

    Some(TriggerToken {
        query: query.to_string(),
        start: colon,
        end: cursor,
    })
}

/// An odd run of backslashes escapes whatever follows; an even run is escaped backslashes.
fn is_escaped(prefix: &str) -> bool {
    let run = prefix.chars().rev().take_while(|c| *c == ESCAPE_CHAR).count();
    run % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::{extract_trigger, TriggerToken};

    fn token(query: &str, start: usize, end: usize) -> TriggerToken {
        TriggerToken {
            query: query.to_string(),
            start,
            end,
        }
    }

    #[test]
    fn query_runs_from_last_colon_to_cursor() {
        assert_eq!(extract_trigger("hello :sm", 9), Some(token("sm", 6, 9)));
        assert_eq!(extract_trigger("a:b :smile", 10), Some(token("smile", 4, 10)));
    }

    #[test]
    fn cursor_mid_text_ignores_the_tail() {
        let text = "hi :sm there";
        assert_eq!(extract_trigger(text, 6), Some(token("sm", 3, 6)));
    }

    #[test]
    fn bare_colon_is_an_empty_query() {
        assert_eq!(extract_trigger("look :", 6), Some(token("", 5, 6)));
    }

    #[test]
    fn whitespace_after_colon_cancels() {
        assert_eq!(extract_trigger("note: done", 10), None);
        assert_eq!(extract_trigger(":sm\tx", 5), None);
    }

    #[test]
    fn no_colon_before_cursor() {
        assert_eq!(extract_trigger("smile", 5), None);
        assert_eq!(extract_trigger("sm :ile", 2), None);
    }

    #[test]
    fn escaped_colon_does_not_trigger() {
        assert_eq!(extract_trigger(r"C\:path", 7), None);
        assert_eq!(extract_trigger(r"\\\:sm", 6), None);
    }

    #[test]
    fn colon_after_escaped_backslash_triggers() {
        assert_eq!(extract_trigger(r"\\:sm", 5), Some(token("sm", 2, 5)));
        assert_eq!(extract_trigger(r"a \\\\:x", 8), Some(token("x", 6, 8)));
    }

    #[test]
    fn emoji_next_to_cursor_suppresses() {
        let text = ":sm😄";
        assert_eq!(extract_trigger(text, 3), None);

        let text = ":😄";
        assert_eq!(extract_trigger(text, text.len()), None);

        let text = "x:👨‍👩‍👧";
        assert_eq!(extract_trigger(text, 2), None);
    }

    #[test]
    fn invalid_cursor_is_no_match() {
        assert_eq!(extract_trigger(":sm", 4), None);
        assert_eq!(extract_trigger(":é", 2), None);
    }

    #[test]
    fn multibyte_queries_keep_byte_offsets() {
        let text = "ça :café";
        let token = extract_trigger(text, text.len()).expect("token");
        assert_eq!(token.query, "café");
        assert_eq!(token.start, 4);
        assert_eq!(token.end, text.len());
        assert_eq!(&text[token.range()], ":café");
    }
}
