use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Attendee, UserNetworkingProfile};

/// Request to rank an inline roster against a user profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankMatchesRequest {
    #[serde(alias = "user_profile", rename = "userProfile", default)]
    pub user_profile: UserNetworkingProfile,
    #[serde(default)]
    pub attendees: Vec<Attendee>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to rank a stored event roster against a user profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EventMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[serde(alias = "profile_version", rename = "profileVersion", default)]
    pub profile_version: Option<String>,
    #[serde(alias = "user_profile", rename = "userProfile", default)]
    pub user_profile: UserNetworkingProfile,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}
