use serde::{Deserialize, Serialize};
use crate::models::domain::{Attendee, Dimension, MatchResult};

/// Response for the ranking endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankMatchesResponse {
    pub matches: Vec<MatchResult>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "topMatchId")]
    pub top_match_id: Option<String>,
    /// Breakdown legend, in declaration order
    pub dimensions: Vec<DimensionInfo>,
}

/// Label and cap for one breakdown field, so clients can render "value / cap"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionInfo {
    pub dimension: Dimension,
    pub label: String,
    pub cap: f64,
}

impl From<Dimension> for DimensionInfo {
    fn from(dimension: Dimension) -> Self {
        Self {
            dimension,
            label: dimension.label().to_string(),
            cap: dimension.cap(),
        }
    }
}

/// Stored roster for an event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterResponse {
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(rename = "rosterVersion")]
    pub roster_version: String,
    pub attendees: Vec<Attendee>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "eventsLoaded")]
    pub events_loaded: usize,
    #[serde(rename = "cacheEntries")]
    pub cache_entries: Option<u64>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
