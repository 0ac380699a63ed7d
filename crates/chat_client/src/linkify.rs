//! Link and image-URL detection in message text.

use once_cell::sync::Lazy;
use regex::Regex;

static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:https?|ftp|file)://[-A-Z0-9+&@#/%?=~_|!:,.;]*[-A-Z0-9+&@#/%=~_|]")
        .expect("url regex is valid")
});

/// Extensions a message must end with (before any query) to render as an inline image.
static IMAGE_MESSAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\.(?:gif|jpe?g|tiff?|png|webp|bmp)$").expect("image regex is valid")
});

/// Links with these extensions stay plain text instead of becoming anchors.
static IMAGE_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\.(?:jpeg|jpg|gif|png|svg)$").expect("image link regex is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSegment {
    Text(String),
    Link(String),
}

/// Whether a whole message is an image URL.
pub fn is_image_url(url: &str) -> bool {
    let without_query = url.split('?').next().unwrap_or(url);
    IMAGE_MESSAGE.is_match(without_query)
}

/// Splits `text` into plain runs and clickable links. Adjacent plain runs are merged.
pub fn linkify(text: &str) -> Vec<TextSegment> {
    let mut segments: Vec<TextSegment> = Vec::new();
    let mut plain = String::new();
    let mut last = 0;

    for found in URL.find_iter(text) {
        plain.push_str(&text[last..found.start()]);
        let url = found.as_str();
        if IMAGE_LINK.is_match(url) {
            plain.push_str(url);
        } else {
            if !plain.is_empty() {
                segments.push(TextSegment::Text(std::mem::take(&mut plain)));
            }
            segments.push(TextSegment::Link(url.to_string()));
        }
        last = found.end();
    }
    plain.push_str(&text[last..]);
    if !plain.is_empty() {
        segments.push(TextSegment::Text(plain));
    }
    segments
}

/// HTML for a linkified message. Text and URLs are escaped.
pub fn render_html(segments: &[TextSegment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            TextSegment::Text(text) => out.push_str(&escape_html(text)),
            TextSegment::Link(url) => {
                let url = escape_html(url);
                out.push_str(&format!(
                    r#"<a href="{url}" target="_blank" class="linkified">{url}</a>"#
                ));
            }
        }
    }
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
