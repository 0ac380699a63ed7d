//! Grapheme helpers around a byte cursor.

use emojis::get as emoji_get;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Joiners and presentation marks that only occur inside emoji sequences.
const EMOJI_COMPONENTS: [char; 3] = ['\u{200d}', '\u{fe0f}', '\u{20e3}'];

static EMOJI_CODE_POINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{Emoji}$").expect("emoji property regex is valid"));

/// The grapheme cluster ending exactly at `cursor`, if any.
pub fn grapheme_before(text: &str, cursor: usize) -> Option<&str> {
    text.get(..cursor)?.graphemes(true).next_back()
}

/// The grapheme cluster starting exactly at `cursor`, if any.
pub fn grapheme_after(text: &str, cursor: usize) -> Option<&str> {
    text.get(cursor..)?.graphemes(true).next()
}

/// Heuristic emoji test for a single grapheme.
///
/// ASCII code points carry the `Emoji` property too (`0-9`, `#`, `*`) but only form emoji as
/// keycap sequences, so bare ASCII never counts.
pub fn is_emoji_grapheme(grapheme: &str) -> bool {
    if grapheme.is_ascii() {
        return false;
    }
    if emoji_get(grapheme).is_some() {
        return true;
    }
    grapheme.chars().any(is_emoji_code_point)
}

pub fn is_emoji_code_point(ch: char) -> bool {
    if ch.is_ascii() {
        return false;
    }
    if EMOJI_COMPONENTS.contains(&ch) {
        return true;
    }
    let mut buf = [0u8; 4];
    EMOJI_CODE_POINT.is_match(ch.encode_utf8(&mut buf))
}

/// Whether the cursor touches an emoji on either side.
pub fn is_cursor_next_to_emoji(text: &str, cursor: usize) -> bool {
    grapheme_before(text, cursor).is_some_and(is_emoji_grapheme)
        || grapheme_after(text, cursor).is_some_and(is_emoji_grapheme)
}
