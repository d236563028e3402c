// Core algorithm exports
pub mod canonical;
pub mod explain;
pub mod intent;
pub mod matcher;
pub mod normalize;
pub mod scoring;

pub use canonical::{style_canonical, topic_canonical};
pub use explain::{build_reasons, build_summary};
pub use intent::{classify_intent, IntentRule, INTENT_RULES};
pub use matcher::{rank_attendees, score_attendee, top_match};
pub use normalize::{normalize, tokenize};
pub use scoring::calculate_match_score;
