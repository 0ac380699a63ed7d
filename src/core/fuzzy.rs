//! Fuzzy subsequence matching for emoji keywords.
//!
//! Lower scores are better. A query matches when all of its characters appear in order in the
//! keyword; consecutive runs and hits on word boundaries pull the score down, gaps push it up.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatch {
    pub matches: bool,
    pub score: f64,
}

impl FuzzyMatch {
    const MISS: FuzzyMatch = FuzzyMatch {
        matches: false,
        score: 0.0,
    };
}

/// Separators inside shortcodes and names (`thumbs_up`, `man-bowing`, `flag: France`).
fn is_keyword_boundary(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '_' | '-' | ':' | '.' | '&')
}

fn score_subsequence(query: &[char], keyword: &[char]) -> FuzzyMatch {
    if query.is_empty() {
        return FuzzyMatch {
            matches: true,
            score: 0.0,
        };
    }
    if query.len() > keyword.len() {
        return FuzzyMatch::MISS;
    }

    let mut next = 0usize;
    let mut score = 0.0f64;
    let mut previous_hit: Option<usize> = None;
    let mut run = 0i32;

    for (pos, ch) in keyword.iter().enumerate() {
        if next == query.len() {
            break;
        }
        if *ch != query[next] {
            continue;
        }

        match previous_hit {
            Some(prev) if prev + 1 == pos => {
                run += 1;
                score -= f64::from(run) * 5.0;
            }
            Some(prev) => {
                run = 0;
                score += ((pos - prev - 1) as f64) * 2.0;
            }
            None => run = 0,
        }

        if pos == 0 || is_keyword_boundary(keyword[pos - 1]) {
            score -= 10.0;
        }
        score += (pos as f64) * 0.1;

        previous_hit = Some(pos);
        next += 1;
    }

    if next < query.len() {
        return FuzzyMatch::MISS;
    }

    FuzzyMatch {
        matches: true,
        score,
    }
}

/// Scores `query` against `keyword`, ignoring case.
///
/// Queries like `100a`/`a100` fall back to the swapped order (`a100`/`100a`) with a small
/// penalty when the literal order does not match.
pub fn fuzzy_match(query: &str, keyword: &str) -> FuzzyMatch {
    let query = query.to_lowercase();
    let keyword: Vec<char> = keyword.to_lowercase().chars().collect();

    let query_chars: Vec<char> = query.chars().collect();
    let direct = score_subsequence(&query_chars, &keyword);
    if direct.matches {
        return direct;
    }

    let Some(swapped) = swap_letter_digit_halves(&query) else {
        return direct;
    };
    let swapped_chars: Vec<char> = swapped.chars().collect();
    let swapped = score_subsequence(&swapped_chars, &keyword);
    if swapped.matches {
        FuzzyMatch {
            matches: true,
            score: swapped.score + 5.0,
        }
    } else {
        direct
    }
}

/// Keeps the items matching every whitespace-separated token of `query`, best score first.
///
/// Ties keep their input order.
pub fn fuzzy_filter<T, F, S>(items: &[T], query: &str, keyword_of: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> S,
    S: AsRef<str>,
{
    let tokens: Vec<&str> = query.split_whitespace().collect();
    if tokens.is_empty() {
        return items.to_vec();
    }

    let mut scored: Vec<(T, f64)> = items
        .iter()
        .filter_map(|item| {
            let keyword = keyword_of(item);
            let mut total = 0.0f64;
            for token in &tokens {
                let hit = fuzzy_match(token, keyword.as_ref());
                if !hit.matches {
                    return None;
                }
                total += hit.score;
            }
            Some((item.clone(), total))
        })
        .collect();

    scored.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().map(|(item, _)| item).collect()
}

/// `abc123` → `123abc`, `123abc` → `abc123`; anything else has no swapped form.
fn swap_letter_digit_halves(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let split = bytes
        .iter()
        .position(|b| b.is_ascii_lowercase() != bytes[0].is_ascii_lowercase())?;
    let (head, tail) = input.split_at(split);

    let all = |s: &str, pred: fn(&u8) -> bool| !s.is_empty() && s.as_bytes().iter().all(pred);
    let letters_then_digits =
        all(head, u8::is_ascii_lowercase) && all(tail, u8::is_ascii_digit);
    let digits_then_letters =
        all(head, u8::is_ascii_digit) && all(tail, u8::is_ascii_lowercase);

    if letters_then_digits || digits_then_letters {
        Some(format!("{tail}{head}"))
    } else {
        None
    }
}
