use crate::core::normalize::normalize;

/// Topic bucketing rules, evaluated top to bottom; first match wins
///
/// Matching is plain substring search on the normalized topic, so "ai"
/// also claims words such as "blockchain" and "retail". Reordering these
/// rules changes which bucket a topic lands in.
const TOPIC_RULES: &[(&[&str], &str)] = &[
    (&["ai", "ml", "machine learning"], "ai"),
    (&["start"], "startups"),
    (&["design", "ux"], "design"),
    (&["fin"], "finance"),
    (&["market"], "marketing"),
    (&["data"], "data"),
    (&["security"], "security"),
    (&["saas"], "saas"),
    (&["leader"], "leadership"),
];

/// Map a free-text topic to its canonical bucket, or to its normalized
/// text when no rule applies
pub fn topic_canonical(topic: &str) -> String {
    let text = normalize(topic);
    TOPIC_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| text.contains(needle)))
        .map(|(_, bucket)| (*bucket).to_string())
        .unwrap_or(text)
}

/// Reduce a conversation style to lowercase letters only
pub fn style_canonical(style: &str) -> String {
    normalize(style)
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}
