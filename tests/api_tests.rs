// HTTP tests for Attendee Match

use actix_web::{http::StatusCode, test, web, App};
use attendee_match::config::MatchingSettings;
use attendee_match::routes::{self, matches::AppState};
use attendee_match::services::{RankingCache, RosterStore};
use serde_json::{json, Value};
use std::sync::Arc;

const ROSTERS: &str = r#"{
    "disrupt": [
        {
            "id": "casual",
            "linkedIn": { "name": "Riley" },
            "onboardingAnswers": { "primaryGoal": "Networking casually" }
        },
        {
            "id": "vc",
            "linkedIn": { "name": "Avery", "headline": "VC Partner at Sequoia" },
            "onboardingAnswers": { "primaryGoal": "Meeting founders", "favoriteTopics": ["AI"] }
        }
    ]
}"#;

fn app_state(with_cache: bool) -> AppState {
    AppState {
        roster: Arc::new(RosterStore::from_json(ROSTERS).unwrap()),
        cache: with_cache.then(|| Arc::new(RankingCache::new(100, 60))),
        matching: MatchingSettings {
            default_limit: None,
            max_limit: Some(50),
        },
    }
}

fn user_profile() -> Value {
    json!({
        "onboardingAnswers": {
            "primaryGoal": "Finding potential investors",
            "favoriteTopics": ["AI & ML"]
        }
    })
}

#[actix_web::test]
async fn test_health() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(true)))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["eventsLoaded"], 1);
}

#[actix_web::test]
async fn test_rank_inline_roster() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(false)))
            .configure(routes::configure_routes),
    )
    .await;

    let roster: Value = serde_json::from_str(ROSTERS).unwrap();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(json!({
            "userProfile": user_profile(),
            "attendees": roster["disrupt"],
            "limit": 1
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalCandidates"], 2);
    assert_eq!(body["topMatchId"], "vc");
    assert_eq!(body["matches"].as_array().unwrap().len(), 1);
    assert_eq!(body["matches"][0]["score"], 60);
    assert_eq!(body["matches"][0]["breakdown"]["primaryGoal"], 35.0);
    assert_eq!(body["matches"][0]["breakdown"]["topics"], 25.0);

    assert_eq!(body["dimensions"].as_array().unwrap().len(), 5);
    assert_eq!(body["dimensions"][0]["dimension"], "primaryGoal");
    assert_eq!(body["dimensions"][0]["label"], "primary-goal alignment");
    assert_eq!(body["dimensions"][0]["cap"], 35.0);
}

#[actix_web::test]
async fn test_rank_empty_roster() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(false)))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(json!({ "userProfile": {}, "attendees": [] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalCandidates"], 0);
    assert!(body["topMatchId"].is_null());
    assert!(body["matches"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_rank_rejects_zero_limit() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(false)))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(json!({ "attendees": [], "limit": 0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_invalid_json_returns_error_body() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(false)))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
    assert_eq!(body["statusCode"], 400);
}

#[actix_web::test]
async fn test_event_matches_with_cache() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(true)))
            .configure(routes::configure_routes),
    )
    .await;

    let request = json!({
        "userId": "user-1",
        "profileVersion": "3",
        "userProfile": user_profile()
    });

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/v1/events/disrupt/matches")
            .set_json(&request)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["totalCandidates"], 2);
        assert_eq!(body["topMatchId"], "vc");
        assert_eq!(body["matches"][1]["attendee"]["id"], "casual");
    }
}

#[actix_web::test]
async fn test_event_matches_requires_user_id() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(true)))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/events/disrupt/matches")
        .set_json(json!({ "userId": "", "userProfile": {} }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_unknown_event_is_not_found() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(false)))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/events/unknown/matches")
        .set_json(json!({ "userId": "user-1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/api/v1/events/unknown/roster").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_roster_and_attendee_lookup() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(false)))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/events/disrupt/roster").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["eventId"], "disrupt");
    assert_eq!(body["attendees"].as_array().unwrap().len(), 2);

    let req = test::TestRequest::get()
        .uri("/api/v1/events/disrupt/attendees/vc")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["linkedIn"]["name"], "Avery");

    let req = test::TestRequest::get()
        .uri("/api/v1/events/disrupt/attendees/nobody")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
