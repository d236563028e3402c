//! Text normalization shared by every scorer.

/// Words too generic to count as goal overlap
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "to", "for", "at", "in", "of", "with", "on", "new", "high",
    "level",
];

/// Trim and lowercase for exact comparisons
#[inline]
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

#[inline]
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Split normalized text into overlap tokens
///
/// Everything outside `[a-z0-9+]` becomes a separator. Single-character
/// tokens and stop words are dropped. Duplicates are kept; callers that need
/// set semantics collect into a set.
pub fn tokenize(value: &str) -> Vec<String> {
    let cleaned: String = normalize(value)
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '+' {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| token.len() > 1 && !is_stop_word(token))
        .map(str::to_string)
        .collect()
}
