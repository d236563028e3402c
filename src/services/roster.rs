use crate::models::Attendee;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or reading rosters
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to read roster file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid roster file: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Attendee {attendee_id} not found in event {event_id}")]
    AttendeeNotFound { event_id: String, attendee_id: String },
}

/// Per-event attendee rosters
///
/// Loaded from a JSON object mapping event ids to attendee arrays. Every
/// load gets a fresh version string so cached rankings built on an older
/// roster are never served again.
#[derive(Debug, Clone)]
pub struct RosterStore {
    events: HashMap<String, Vec<Attendee>>,
    version: String,
}

impl RosterStore {
    /// Build a store from already-loaded rosters
    pub fn new(events: HashMap<String, Vec<Attendee>>) -> Self {
        Self {
            events,
            version: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// A store with no events
    pub fn empty() -> Self {
        Self::new(HashMap::new())
    }

    /// Load rosters from a JSON file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, RosterError> {
        let raw = tokio::fs::read_to_string(path.as_ref()).await?;
        let store = Self::from_json(&raw)?;

        tracing::info!(
            "Loaded rosters for {} events ({} attendees) from {}",
            store.event_count(),
            store.events.values().map(Vec::len).sum::<usize>(),
            path.as_ref().display()
        );

        Ok(store)
    }

    /// Parse rosters from a JSON document
    pub fn from_json(raw: &str) -> Result<Self, RosterError> {
        let events: HashMap<String, Vec<Attendee>> = serde_json::from_str(raw)?;
        Ok(Self::new(events))
    }

    /// Roster for an event, in stored order
    pub fn roster(&self, event_id: &str) -> Result<&[Attendee], RosterError> {
        self.events
            .get(event_id)
            .map(Vec::as_slice)
            .ok_or_else(|| RosterError::EventNotFound(event_id.to_string()))
    }

    /// Find one attendee of an event by id
    pub fn attendee(&self, event_id: &str, attendee_id: &str) -> Result<&Attendee, RosterError> {
        self.roster(event_id)?
            .iter()
            .find(|a| a.id == attendee_id)
            .ok_or_else(|| RosterError::AttendeeNotFound {
                event_id: event_id.to_string(),
                attendee_id: attendee_id.to_string(),
            })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}
