use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Onboarding questionnaire answers, held by the user and every attendee
///
/// `personality_traits` is positional: entry `i` answers question `i` of the
/// fixed questionnaire, so it is only ever compared index-by-index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingAnswers {
    #[serde(rename = "personalityTraits", default, deserialize_with = "lenient_string_list")]
    pub personality_traits: Vec<String>,
    #[serde(rename = "primaryGoal", default, deserialize_with = "lenient_string")]
    pub primary_goal: String,
    #[serde(rename = "conversationStyle", default, deserialize_with = "lenient_string")]
    pub conversation_style: String,
    #[serde(rename = "favoriteTopics", default, deserialize_with = "lenient_string_list")]
    pub favorite_topics: Vec<String>,
}

/// Professional-network snapshot attached to an attendee
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalProfile {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub headline: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub summary: String,
    #[serde(rename = "pastCompanies", default, deserialize_with = "lenient_string_list")]
    pub past_companies: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub universities: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub skills: Vec<String>,
}

/// A person on an event roster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attendee {
    pub id: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "linkedIn", default)]
    pub linked_in: ExternalProfile,
    #[serde(rename = "onboardingAnswers", default)]
    pub onboarding_answers: OnboardingAnswers,
}

impl Attendee {
    /// Display name from the external profile, falling back to the id
    pub fn display_name(&self) -> &str {
        if self.linked_in.name.trim().is_empty() {
            &self.id
        } else {
            &self.linked_in.name
        }
    }
}

/// The current user's profile as held by the profile store
///
/// Every field may be missing. The professional-network payloads are kept as
/// raw JSON because only their serialized text is ever inspected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserNetworkingProfile {
    #[serde(rename = "onboardingAnswers", default, deserialize_with = "lenient_answers")]
    pub onboarding_answers: OnboardingAnswers,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<Value>,
    #[serde(
        rename = "linkedinProfileDataResponse",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub linkedin_profile_data_response: Option<Value>,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub profile_name: Option<String>,
}

/// Networking intent inferred from a goal and an optional headline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NetworkingIntent {
    ActiveInvestor,
    SeekingInvestor,
    SeekingTechnicalCofounder,
    TechnicalBuilder,
    JobSeeker,
    HiringManager,
    CasualNetworker,
    Other,
}

impl NetworkingIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkingIntent::ActiveInvestor => "active-investor",
            NetworkingIntent::SeekingInvestor => "seeking-investor",
            NetworkingIntent::SeekingTechnicalCofounder => "seeking-technical-cofounder",
            NetworkingIntent::TechnicalBuilder => "technical-builder",
            NetworkingIntent::JobSeeker => "job-seeker",
            NetworkingIntent::HiringManager => "hiring-manager",
            NetworkingIntent::CasualNetworker => "casual-networker",
            NetworkingIntent::Other => "other",
        }
    }
}

impl fmt::Display for NetworkingIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five compatibility dimensions, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    PrimaryGoal,
    Topics,
    PersonalityTraits,
    ConversationStyle,
    LinkedIn,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::PrimaryGoal,
        Dimension::Topics,
        Dimension::PersonalityTraits,
        Dimension::ConversationStyle,
        Dimension::LinkedIn,
    ];

    /// Human label used in summaries
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::PrimaryGoal => "primary-goal alignment",
            Dimension::Topics => "topic overlap",
            Dimension::PersonalityTraits => "personality fit",
            Dimension::ConversationStyle => "conversation style",
            Dimension::LinkedIn => "LinkedIn overlap",
        }
    }

    /// Upper bound of this dimension's score
    pub fn cap(&self) -> f64 {
        let weights = ScoringWeights::default();
        match self {
            Dimension::PrimaryGoal => weights.primary_goal,
            Dimension::Topics => weights.topics,
            Dimension::PersonalityTraits => weights.personality_traits,
            Dimension::ConversationStyle => weights.conversation_style,
            Dimension::LinkedIn => weights.linked_in,
        }
    }
}

/// Per-dimension caps. They sum to 100 and are not configurable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub primary_goal: f64,
    pub topics: f64,
    pub personality_traits: f64,
    pub conversation_style: f64,
    pub linked_in: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            primary_goal: 35.0,
            topics: 25.0,
            personality_traits: 20.0,
            conversation_style: 15.0,
            linked_in: 5.0,
        }
    }
}

/// Five-dimension score decomposition backing a match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchScoreBreakdown {
    #[serde(rename = "primaryGoal")]
    pub primary_goal: f64,
    pub topics: f64,
    #[serde(rename = "personalityTraits")]
    pub personality_traits: f64,
    #[serde(rename = "conversationStyle")]
    pub conversation_style: f64,
    #[serde(rename = "linkedIn")]
    pub linked_in: f64,
    pub total: f64,
}

impl MatchScoreBreakdown {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::PrimaryGoal => self.primary_goal,
            Dimension::Topics => self.topics,
            Dimension::PersonalityTraits => self.personality_traits,
            Dimension::ConversationStyle => self.conversation_style,
            Dimension::LinkedIn => self.linked_in,
        }
    }
}

/// A scored attendee, ready for presentation and opener generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub attendee: Attendee,
    pub score: u8,
    pub summary: String,
    pub reasons: Vec<String>,
    pub breakdown: MatchScoreBreakdown,
}

// Profile documents come from an upstream store with no schema guarantees.
// A field of the wrong JSON type reads as empty instead of failing the whole
// document.

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_answers<'de, D>(deserializer: D) -> Result<OnboardingAnswers, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => {
            OnboardingAnswers::deserialize(value).map_err(serde::de::Error::custom)
        }
        _ => Ok(OnboardingAnswers::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_profile_tolerates_missing_answers() {
        let profile: UserNetworkingProfile = serde_json::from_value(json!({})).unwrap();
        assert_eq!(profile.onboarding_answers, OnboardingAnswers::default());
        assert!(profile.linkedin.is_none());
        assert!(profile.profile_name.is_none());
    }

    #[test]
    fn test_user_profile_tolerates_malformed_fields() {
        let profile: UserNetworkingProfile = serde_json::from_value(json!({
            "onboardingAnswers": {
                "primaryGoal": 42,
                "favoriteTopics": "AI",
                "personalityTraits": ["Extrovert", null, 7, "Agreeable"],
                "conversationStyle": "Deep dives"
            },
            "profile_name": false
        }))
        .unwrap();

        let answers = &profile.onboarding_answers;
        assert_eq!(answers.primary_goal, "");
        assert!(answers.favorite_topics.is_empty());
        assert_eq!(answers.personality_traits, vec!["Extrovert", "Agreeable"]);
        assert_eq!(answers.conversation_style, "Deep dives");
        assert!(profile.profile_name.is_none());
    }

    #[test]
    fn test_answers_of_wrong_type_read_as_empty() {
        let profile: UserNetworkingProfile =
            serde_json::from_value(json!({ "onboardingAnswers": "not an object" })).unwrap();
        assert_eq!(profile.onboarding_answers, OnboardingAnswers::default());
    }

    #[test]
    fn test_breakdown_serializes_camel_case() {
        let breakdown = MatchScoreBreakdown {
            primary_goal: 35.0,
            linked_in: 2.0,
            total: 37.0,
            ..Default::default()
        };
        let value = serde_json::to_value(breakdown).unwrap();
        assert_eq!(value["primaryGoal"], json!(35.0));
        assert_eq!(value["linkedIn"], json!(2.0));
        assert_eq!(value["personalityTraits"], json!(0.0));
    }

    #[test]
    fn test_dimension_caps_sum_to_one_hundred() {
        let sum: f64 = Dimension::ALL.iter().map(|d| d.cap()).sum();
        assert_eq!(sum, 100.0);
    }

    #[test]
    fn test_intent_labels() {
        assert_eq!(NetworkingIntent::SeekingTechnicalCofounder.to_string(), "seeking-technical-cofounder");
        let parsed: NetworkingIntent = serde_json::from_value(json!("hiring-manager")).unwrap();
        assert_eq!(parsed, NetworkingIntent::HiringManager);
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let attendee = Attendee {
            id: "a-1".to_string(),
            ..Default::default()
        };
        assert_eq!(attendee.display_name(), "a-1");
    }
}
