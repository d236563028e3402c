use std::collections::HashSet;

use serde_json::Value;

use crate::core::{
    canonical::{style_canonical, topic_canonical},
    intent::classify_intent,
    normalize::{normalize, tokenize},
};
use crate::models::{
    Attendee, MatchScoreBreakdown, NetworkingIntent, ScoringWeights, UserNetworkingProfile,
};

/// Number of positional personality questions
pub const PERSONALITY_QUESTIONS: usize = 5;

/// Points per matching personality answer
const POINTS_PER_TRAIT: f64 = 4.0;

/// Intent pairs that count as a full primary-goal match, in both directions
const COMPLEMENTARY_INTENTS: &[(NetworkingIntent, NetworkingIntent)] = &[
    (NetworkingIntent::SeekingInvestor, NetworkingIntent::ActiveInvestor),
    (NetworkingIntent::ActiveInvestor, NetworkingIntent::SeekingInvestor),
    (NetworkingIntent::SeekingTechnicalCofounder, NetworkingIntent::TechnicalBuilder),
    (NetworkingIntent::TechnicalBuilder, NetworkingIntent::SeekingTechnicalCofounder),
    (NetworkingIntent::JobSeeker, NetworkingIntent::HiringManager),
    (NetworkingIntent::HiringManager, NetworkingIntent::JobSeeker),
];

/// Topic score plus the shared canonical topics, in the user's order
#[derive(Debug, Clone, PartialEq)]
pub struct TopicScore {
    pub score: f64,
    pub overlap: Vec<String>,
}

/// Personality score plus the number of aligned positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonalityScore {
    pub score: f64,
    pub matches: usize,
}

/// Everything the explainer needs about one scored attendee
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionScores {
    pub breakdown: MatchScoreBreakdown,
    pub shared_topics: Vec<String>,
    pub matching_traits: usize,
}

/// Round to two decimal places
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Share of distinct tokens two strings have in common
///
/// `|A ∩ B| / max(|A|, |B|)`, or 0 when either side has no tokens.
pub fn keyword_overlap_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: HashSet<String> = tokenize(a).into_iter().collect();
    let tokens_b: HashSet<String> = tokenize(b).into_iter().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let overlap = tokens_a.intersection(&tokens_b).count();
    overlap as f64 / tokens_a.len().max(tokens_b.len()) as f64
}

/// Multiplier in [0, 1] for how well two goals line up
pub fn goal_multiplier(user_goal: &str, candidate_goal: &str, candidate_headline: &str) -> f64 {
    let user_intent = classify_intent(user_goal, "");
    let candidate_intent = classify_intent(candidate_goal, candidate_headline);

    let user_normalized = normalize(user_goal);
    if !user_normalized.is_empty() && user_normalized == normalize(candidate_goal) {
        return 1.0;
    }

    if COMPLEMENTARY_INTENTS.contains(&(user_intent, candidate_intent)) {
        return 1.0;
    }

    if user_intent == candidate_intent && user_intent != NetworkingIntent::Other {
        return 0.75;
    }

    if user_intent == NetworkingIntent::CasualNetworker
        || candidate_intent == NetworkingIntent::CasualNetworker
    {
        return 0.4;
    }

    0.1 + keyword_overlap_ratio(user_goal, candidate_goal) * 0.4
}

/// Primary-goal dimension, capped at 35
pub fn score_primary_goal(user_goal: &str, candidate_goal: &str, candidate_headline: &str) -> f64 {
    let weight = ScoringWeights::default().primary_goal;
    let multiplier = goal_multiplier(user_goal, candidate_goal, candidate_headline);
    round2(weight * multiplier.min(1.0))
}

/// Canonicalize and de-duplicate, keeping first-seen order
fn canonical_topic_set(topics: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    topics
        .iter()
        .map(|topic| topic_canonical(topic))
        .filter(|topic| seen.insert(topic.clone()))
        .collect()
}

/// Topic dimension, capped at 25
///
/// The denominator is the larger of the two canonical sets, not their union.
pub fn score_topics(user_topics: &[String], candidate_topics: &[String]) -> TopicScore {
    let user_set = canonical_topic_set(user_topics);
    let candidate_set: HashSet<String> = canonical_topic_set(candidate_topics).into_iter().collect();

    let overlap: Vec<String> = user_set
        .iter()
        .filter(|topic| candidate_set.contains(*topic))
        .cloned()
        .collect();

    let denominator = user_set.len().max(candidate_set.len()).max(1);
    let ratio = overlap.len() as f64 / denominator as f64;

    TopicScore {
        score: round2(ScoringWeights::default().topics * ratio),
        overlap,
    }
}

/// Personality dimension: 4 points per aligned position, 20 at most
///
/// Positions beyond either list's length never match.
pub fn score_personality_traits(user_traits: &[String], candidate_traits: &[String]) -> PersonalityScore {
    let matches = (0..PERSONALITY_QUESTIONS)
        .filter(|&i| {
            let user = user_traits.get(i).map(|t| normalize(t)).unwrap_or_default();
            let candidate = candidate_traits.get(i).map(|t| normalize(t)).unwrap_or_default();
            !user.is_empty() && user == candidate
        })
        .count();

    PersonalityScore {
        score: round2(matches as f64 * POINTS_PER_TRAIT),
        matches,
    }
}

/// Conversation-style dimension: all 15 points or nothing
///
/// Emptiness is judged on the raw answers. Two non-empty styles that both
/// reduce to no letters (`"!!"` and `"??"`) still count as equal.
pub fn score_conversation_style(user_style: &str, candidate_style: &str) -> f64 {
    if user_style.is_empty() || candidate_style.is_empty() {
        return 0.0;
    }
    if style_canonical(user_style) == style_canonical(candidate_style) {
        ScoringWeights::default().conversation_style
    } else {
        0.0
    }
}

/// JavaScript-style truthiness for raw profile payloads
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Lowercase text blob of everything the profile store knows about the
/// user's professional background. Empty when nothing is on file.
pub fn collect_user_profile_text(user: &UserNetworkingProfile) -> String {
    let mut chunks: Vec<String> = Vec::new();

    if let Some(name) = user.profile_name.as_deref().filter(|name| !name.is_empty()) {
        chunks.push(name.to_string());
    }
    if let Some(linkedin) = user.linkedin.as_ref().filter(|v| is_truthy(v)) {
        chunks.push(linkedin.to_string());
    }
    if let Some(response) = user.linkedin_profile_data_response.as_ref().filter(|v| is_truthy(v)) {
        chunks.push(response.to_string());
    }

    normalize(&chunks.join(" "))
}

/// External-profile dimension, capped at 5
///
/// `user_text` is the output of [`collect_user_profile_text`].
pub fn score_external_profile(user_text: &str, candidate: &Attendee) -> f64 {
    if user_text.is_empty() {
        return 0.0;
    }

    let profile = &candidate.linked_in;
    let appears = |value: &String| {
        let needle = normalize(value);
        !needle.is_empty() && user_text.contains(&needle)
    };

    let mut score: f64 = 0.0;

    if std::iter::once(&profile.company)
        .chain(profile.past_companies.iter())
        .any(|company| appears(company))
    {
        score += 2.0;
    }

    if profile.universities.iter().any(|school| appears(school)) {
        score += 1.5;
    }

    let matching_skills = profile
        .skills
        .iter()
        .filter(|skill| {
            let token = normalize(skill);
            token.chars().count() > 1 && user_text.contains(&token)
        })
        .count();
    if matching_skills > 0 {
        let ratio = matching_skills as f64 / profile.skills.len().max(1) as f64;
        score += (ratio * 1.5).min(1.5);
    }

    round2(score.min(ScoringWeights::default().linked_in))
}

/// Sum the five dimensions into a breakdown with a two-decimal total
pub fn aggregate(
    primary_goal: f64,
    topics: f64,
    personality_traits: f64,
    conversation_style: f64,
    linked_in: f64,
) -> MatchScoreBreakdown {
    MatchScoreBreakdown {
        primary_goal,
        topics,
        personality_traits,
        conversation_style,
        linked_in,
        total: round2(primary_goal + topics + personality_traits + conversation_style + linked_in),
    }
}

/// Integer ranking score for a breakdown total
#[inline]
pub fn ranking_score(total: f64) -> u8 {
    total.round().clamp(0.0, 100.0) as u8
}

/// Score one attendee against the user on all five dimensions
///
/// `user_text` is the user's professional blob, built once per ranking call.
pub fn calculate_match_score(
    user: &UserNetworkingProfile,
    user_text: &str,
    candidate: &Attendee,
) -> DimensionScores {
    let user_answers = &user.onboarding_answers;
    let candidate_answers = &candidate.onboarding_answers;

    let primary_goal = score_primary_goal(
        &user_answers.primary_goal,
        &candidate_answers.primary_goal,
        &candidate.linked_in.headline,
    );
    let topics = score_topics(&user_answers.favorite_topics, &candidate_answers.favorite_topics);
    let personality = score_personality_traits(
        &user_answers.personality_traits,
        &candidate_answers.personality_traits,
    );
    let conversation_style = score_conversation_style(
        &user_answers.conversation_style,
        &candidate_answers.conversation_style,
    );
    let linked_in = score_external_profile(user_text, candidate);

    DimensionScores {
        breakdown: aggregate(primary_goal, topics.score, personality.score, conversation_style, linked_in),
        shared_topics: topics.overlap,
        matching_traits: personality.matches,
    }
}
