use crate::core::{
    explain::{build_reasons, build_summary},
    scoring::{calculate_match_score, collect_user_profile_text, ranking_score},
};
use crate::models::{Attendee, MatchResult, UserNetworkingProfile};

/// Rank a roster of attendees against the current user
///
/// # Pipeline Stages
/// 1. Build the user's professional text blob once
/// 2. Score every attendee on the five dimensions
/// 3. Explain each score (summary + reasons)
/// 4. Sort by integer score, descending
///
/// The sort is stable, so attendees with equal scores keep their roster
/// order. An empty roster yields an empty list.
pub fn rank_attendees(user: &UserNetworkingProfile, attendees: &[Attendee]) -> Vec<MatchResult> {
    let user_text = collect_user_profile_text(user);

    let mut results: Vec<MatchResult> = attendees
        .iter()
        .map(|attendee| score_attendee(user, &user_text, attendee))
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::debug!(
        "Ranked {} attendees (top score: {:?})",
        results.len(),
        results.first().map(|m| m.score)
    );

    results
}

/// Score and explain a single attendee
pub fn score_attendee(user: &UserNetworkingProfile, user_text: &str, attendee: &Attendee) -> MatchResult {
    let scores = calculate_match_score(user, user_text, attendee);
    let breakdown = scores.breakdown;

    MatchResult {
        attendee: attendee.clone(),
        score: ranking_score(breakdown.total),
        summary: build_summary(&breakdown),
        reasons: build_reasons(attendee, &breakdown, &scores.shared_topics, scores.matching_traits),
        breakdown,
    }
}

/// The attendee handed to opener generation: the highest ranked one
#[inline]
pub fn top_match(results: &[MatchResult]) -> Option<&MatchResult> {
    results.first()
}
