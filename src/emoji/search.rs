//! Emoji search seam and stale-result protection.
//!
//! Searches may complete out of order. Every query change issues a [`SearchTicket`]; only the
//! most recently issued ticket may apply its results.

use std::sync::Arc;

use crate::core::fuzzy::fuzzy_match;

pub const DEFAULT_MAX_RESULTS: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiCandidate {
    pub glyph: String,
    pub name: String,
    pub shortcode: Option<String>,
}

impl EmojiCandidate {
    pub fn new(glyph: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            name: name.into(),
            shortcode: None,
        }
    }

    pub fn with_shortcode(mut self, shortcode: impl Into<String>) -> Self {
        self.shortcode = Some(shortcode.into());
        self
    }
}

/// Upstream search: query in, ordered candidates out.
pub trait EmojiSearch {
    fn search(&self, query: &str) -> Vec<EmojiCandidate>;
}

impl<F> EmojiSearch for F
where
    F: Fn(&str) -> Vec<EmojiCandidate>,
{
    fn search(&self, query: &str) -> Vec<EmojiCandidate> {
        self(query)
    }
}

#[derive(Debug, Clone)]
struct IndexEntry {
    candidate: EmojiCandidate,
    keywords: Vec<String>,
}

/// Search over the bundled `emojis` catalogue, default skin tone only.
#[derive(Debug, Clone)]
pub struct EmojiIndex {
    entries: Arc<[IndexEntry]>,
    max_results: usize,
}

impl Default for EmojiIndex {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESULTS)
    }
}

impl EmojiIndex {
    pub fn new(max_results: usize) -> Self {
        let entries: Vec<IndexEntry> = emojis::iter()
            .map(|emoji| {
                let mut keywords: Vec<String> =
                    emoji.shortcodes().map(str::to_lowercase).collect();
                keywords.push(emoji.name().to_lowercase());
                let mut candidate = EmojiCandidate::new(emoji.as_str(), emoji.name());
                candidate.shortcode = emoji.shortcode().map(str::to_string);
                IndexEntry {
                    candidate,
                    keywords,
                }
            })
            .collect();

        Self {
            entries: entries.into(),
            max_results: max_results.max(1),
        }
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ranks one entry: exact keyword, then keyword prefix, then fuzzy subsequence.
    fn rank(entry: &IndexEntry, query: &str) -> Option<(u8, f64)> {
        let mut best: Option<(u8, f64)> = None;
        for keyword in &entry.keywords {
            let rank = if keyword == query {
                (0, 0.0)
            } else if keyword.starts_with(query) {
                (1, keyword.len() as f64)
            } else {
                let hit = fuzzy_match(query, keyword);
                if !hit.matches {
                    continue;
                }
                (2, hit.score)
            };
            best = match best {
                Some(current) if (current.0, current.1) <= (rank.0, rank.1) => Some(current),
                _ => Some(rank),
            };
        }
        best
    }
}

impl EmojiSearch for EmojiIndex {
    fn search(&self, query: &str) -> Vec<EmojiCandidate> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut ranked: Vec<(u8, f64, usize)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(pos, entry)| {
                Self::rank(entry, &query).map(|(tier, score)| (tier, score, pos))
            })
            .collect();

        ranked.sort_by(|a, b| {
            a.0.cmp(&b.0)
                .then(a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
                .then(a.2.cmp(&b.2))
        });

        ranked
            .into_iter()
            .take(self.max_results)
            .map(|(_, _, pos)| self.entries[pos].candidate.clone())
            .collect()
    }
}

/// Identifies one issued search. Tickets increase monotonically per [`SearchGeneration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A search the host should run, possibly asynchronously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub ticket: SearchTicket,
    pub query: String,
}

/// Latest-query-wins guard.
#[derive(Debug, Default, Clone)]
pub struct SearchGeneration {
    current: u64,
}

impl SearchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket for a new query, invalidating every earlier ticket.
    pub fn issue(&mut self) -> SearchTicket {
        self.current += 1;
        SearchTicket(self.current)
    }

    /// Invalidates outstanding tickets without issuing a new one.
    pub fn invalidate(&mut self) {
        self.current += 1;
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.current
    }
}
