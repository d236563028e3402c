// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Attendee, Dimension, ExternalProfile, MatchResult, MatchScoreBreakdown, NetworkingIntent,
    OnboardingAnswers, ScoringWeights, UserNetworkingProfile,
};
pub use requests::{EventMatchesRequest, RankMatchesRequest};
pub use responses::{
    DimensionInfo, ErrorResponse, HealthResponse, RankMatchesResponse, RosterResponse,
};
