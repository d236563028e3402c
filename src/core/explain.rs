use crate::models::{Attendee, Dimension, MatchScoreBreakdown};

/// Most reasons shown per match
pub const MAX_REASONS: usize = 4;

/// Most shared topics named in a reason
const MAX_LISTED_TOPICS: usize = 3;

/// One-line summary naming the two strongest dimensions
///
/// Ties keep declaration order (primary goal first, LinkedIn last).
pub fn build_summary(breakdown: &MatchScoreBreakdown) -> String {
    let mut ranked = Dimension::ALL.to_vec();
    ranked.sort_by(|a, b| {
        breakdown
            .get(*b)
            .partial_cmp(&breakdown.get(*a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    format!("Strong fit on {} and {}.", ranked[0].label(), ranked[1].label())
}

/// Human-readable reasons, in fixed order, at most [`MAX_REASONS`]
pub fn build_reasons(
    candidate: &Attendee,
    breakdown: &MatchScoreBreakdown,
    shared_topics: &[String],
    matching_traits: usize,
) -> Vec<String> {
    let answers = &candidate.onboarding_answers;
    let mut reasons = Vec::with_capacity(MAX_REASONS + 1);

    if breakdown.primary_goal > 0.0 {
        reasons.push(format!("Primary goal alignment with \"{}\".", answers.primary_goal));
    }
    if !shared_topics.is_empty() {
        let listed: Vec<&str> = shared_topics
            .iter()
            .take(MAX_LISTED_TOPICS)
            .map(String::as_str)
            .collect();
        reasons.push(format!("Shared topics: {}.", listed.join(", ")));
    }
    if matching_traits > 0 {
        reasons.push(format!("{}/5 personality traits align.", matching_traits));
    }
    if breakdown.conversation_style > 0.0 {
        reasons.push(format!("Both prefer \"{}\".", answers.conversation_style));
    }
    if breakdown.linked_in > 0.0 {
        reasons.push("LinkedIn background overlap (industry, company, school, or skills).".to_string());
    }

    reasons.truncate(MAX_REASONS);
    reasons
}
