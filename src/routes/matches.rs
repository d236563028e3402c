use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::{rank_attendees, top_match};
use crate::models::{
    Dimension, DimensionInfo, ErrorResponse, EventMatchesRequest, HealthResponse, MatchResult,
    RankMatchesRequest, RankMatchesResponse, RosterResponse,
};
use crate::services::{CacheKey, RankingCache, RosterError, RosterStore};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<RosterStore>,
    pub cache: Option<Arc<RankingCache>>,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/rank", web::post().to(rank_matches))
        .route("/events/{event_id}/matches", web::post().to(event_matches))
        .route("/events/{event_id}/roster", web::get().to(get_roster))
        .route("/events/{event_id}/attendees/{attendee_id}", web::get().to(get_attendee));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        events_loaded: state.roster.event_count(),
        cache_entries: state.cache.as_ref().map(|c| c.stats().entries),
    })
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn roster_error(err: RosterError) -> HttpResponse {
    match err {
        RosterError::EventNotFound(_) | RosterError::AttendeeNotFound { .. } => {
            HttpResponse::NotFound().json(ErrorResponse {
                error: "Not found".to_string(),
                message: err.to_string(),
                status_code: 404,
            })
        }
        _ => {
            tracing::error!("Roster error: {}", err);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Roster unavailable".to_string(),
                message: err.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Package a full ranking, truncated to `limit` after the top match is taken
fn build_response(mut matches: Vec<MatchResult>, limit: Option<usize>) -> RankMatchesResponse {
    let total_candidates = matches.len();
    let top_match_id = top_match(&matches).map(|top| {
        tracing::debug!("Top match: {} ({})", top.attendee.display_name(), top.score);
        top.attendee.id.clone()
    });

    if let Some(limit) = limit {
        matches.truncate(limit);
    }

    RankMatchesResponse {
        matches,
        total_candidates,
        top_match_id,
        dimensions: Dimension::ALL.into_iter().map(DimensionInfo::from).collect(),
    }
}

/// Rank an inline roster
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "userProfile": { "onboardingAnswers": { ... }, "linkedin": { ... } },
///   "attendees": [ ... ],
///   "limit": 20
/// }
/// ```
async fn rank_matches(
    state: web::Data<AppState>,
    req: web::Json<RankMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let req = req.into_inner();
    tracing::info!("Ranking inline roster of {} attendees", req.attendees.len());

    let ranked = rank_attendees(&req.user_profile, &req.attendees);
    let limit = state.matching.effective_limit(req.limit);

    HttpResponse::Ok().json(build_response(ranked, limit))
}

/// Rank a stored event roster
///
/// POST /api/v1/events/{eventId}/matches
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "profileVersion": "string",
///   "userProfile": { ... },
///   "limit": 20
/// }
/// ```
///
/// Rankings are cached only when `profileVersion` is supplied.
async fn event_matches(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<EventMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let event_id = path.into_inner();
    let req = req.into_inner();
    let limit = state.matching.effective_limit(req.limit);

    let roster = match state.roster.roster(&event_id) {
        Ok(roster) => roster,
        Err(e) => return roster_error(e),
    };

    let cache_key = req.profile_version.as_deref().map(|profile_version| {
        CacheKey::ranking(&event_id, state.roster.version(), &req.user_id, profile_version)
    });

    if let (Some(cache), Some(key)) = (&state.cache, &cache_key) {
        match cache.get::<Vec<MatchResult>>(key).await {
            Ok(ranked) => {
                tracing::debug!("Serving cached ranking for {} in event {}", req.user_id, event_id);
                return HttpResponse::Ok().json(build_response(ranked, limit));
            }
            Err(e) => tracing::trace!("Ranking cache lookup failed: {}", e),
        }
    }

    tracing::info!(
        "Ranking {} attendees of event {} for user {}",
        roster.len(),
        event_id,
        req.user_id
    );

    let ranked = rank_attendees(&req.user_profile, roster);

    if let (Some(cache), Some(key)) = (&state.cache, &cache_key) {
        if let Err(e) = cache.set(key, &ranked).await {
            tracing::warn!("Failed to cache ranking: {}", e);
        }
    }

    HttpResponse::Ok().json(build_response(ranked, limit))
}

/// Stored roster for an event
///
/// GET /api/v1/events/{eventId}/roster
async fn get_roster(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let event_id = path.into_inner();
    match state.roster.roster(&event_id) {
        Ok(attendees) => HttpResponse::Ok().json(RosterResponse {
            event_id,
            roster_version: state.roster.version().to_string(),
            attendees: attendees.to_vec(),
        }),
        Err(e) => roster_error(e),
    }
}

/// One stored attendee, as looked up for opener generation
///
/// GET /api/v1/events/{eventId}/attendees/{attendeeId}
async fn get_attendee(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (event_id, attendee_id) = path.into_inner();
    match state.roster.attendee(&event_id, &attendee_id) {
        Ok(attendee) => HttpResponse::Ok().json(attendee),
        Err(e) => roster_error(e),
    }
}
