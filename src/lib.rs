//! Attendee Match - compatibility ranking for event networking
//!
//! This library ranks the attendees of an event against the current user on
//! five weighted dimensions (primary goal, topics, personality, conversation
//! style and professional background) and explains every score. The ranking
//! itself is a pure function; the HTTP layer and services around it only
//! supply rosters and cache results.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{rank_attendees, top_match};
pub use models::{Attendee, MatchResult, MatchScoreBreakdown, UserNetworkingProfile};
