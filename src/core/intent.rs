use crate::core::normalize::normalize;
use crate::models::NetworkingIntent;

/// One ordered classification rule
///
/// Fires when the text contains any of `any_of` and none of `none_of`.
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub any_of: &'static [&'static str],
    pub none_of: &'static [&'static str],
    pub intent: NetworkingIntent,
}

impl IntentRule {
    pub fn matches(&self, text: &str) -> bool {
        self.any_of.iter().any(|needle| text.contains(needle))
            && !self.none_of.iter().any(|needle| text.contains(needle))
    }
}

/// Classification rules in precedence order; first match wins
///
/// The vocabularies overlap ("investor" appears in both investor rules,
/// "co-founder" in both co-founder rules), so order is significant.
pub const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        any_of: &["active investor", "vc partner", "investor"],
        none_of: &["finding potential investors"],
        intent: NetworkingIntent::ActiveInvestor,
    },
    IntentRule {
        any_of: &["finding potential investors", "fundraising", "raise capital"],
        none_of: &[],
        intent: NetworkingIntent::SeekingInvestor,
    },
    IntentRule {
        any_of: &["meeting technical co founders", "technical co founders", "co-founder"],
        none_of: &[],
        intent: NetworkingIntent::SeekingTechnicalCofounder,
    },
    IntentRule {
        any_of: &["technical co-founder", "cto", "engineer"],
        none_of: &[],
        intent: NetworkingIntent::TechnicalBuilder,
    },
    IntentRule {
        any_of: &["exploring new job opportunities", "open to work", "job"],
        none_of: &[],
        intent: NetworkingIntent::JobSeeker,
    },
    IntentRule {
        any_of: &["hiring", "recruiting", "build team"],
        none_of: &[],
        intent: NetworkingIntent::HiringManager,
    },
    IntentRule {
        any_of: &["networking casually"],
        none_of: &[],
        intent: NetworkingIntent::CasualNetworker,
    },
];

/// Infer a networking intent from a goal plus optional supplementary text
/// (an attendee's headline). Always resolves to exactly one intent.
pub fn classify_intent(goal: &str, supplementary: &str) -> NetworkingIntent {
    let text = format!("{} {}", normalize(goal), normalize(supplementary));
    INTENT_RULES
        .iter()
        .find(|rule| rule.matches(&text))
        .map(|rule| rule.intent)
        .unwrap_or(NetworkingIntent::Other)
}
