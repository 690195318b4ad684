//! Playback session lifecycle over the HTTP surface

use axum::http::StatusCode;
use marquee_core::config::MarqueeConfig;
use marquee_web::{build_router, build_state};
use serde_json::json;

use crate::support::{demo_router, json as parse, request};

async fn mount_session(router: &axum::Router) -> (String, u64) {
    let (status, body) = request(
        router.clone(),
        "POST",
        "/api/player",
        Some(json!({ "id": "movie1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let body = parse(&body);
    assert_eq!(body["state"], "loading");
    (
        body["session"].as_str().unwrap().to_string(),
        body["generation"].as_u64().unwrap(),
    )
}

#[tokio::test]
async fn test_session_mounts_into_loading() {
    let router = demo_router();

    let (_, generation) = mount_session(&router).await;
    assert_eq!(generation, 1);
}

#[tokio::test]
async fn test_unknown_content_id_is_404() {
    let router = demo_router();

    let (status, _) = request(
        router,
        "POST",
        "/api/player",
        Some(json!({ "id": "doesnotexist" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ready_event_starts_playback() {
    let router = demo_router();
    let (session, generation) = mount_session(&router).await;

    let (status, body) = request(
        router,
        "POST",
        &format!("/api/player/{session}/events"),
        Some(json!({ "generation": generation, "status": "ready" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let body = parse(&body);
    assert_eq!(body["applied"], true);
    assert_eq!(body["state"], "playing");
}

#[tokio::test]
async fn test_pause_and_play_round_trip() {
    let router = demo_router();
    let (session, generation) = mount_session(&router).await;

    request(
        router.clone(),
        "POST",
        &format!("/api/player/{session}/events"),
        Some(json!({ "generation": generation, "status": "ready" })),
    )
    .await;

    let (_, body) = request(
        router.clone(),
        "POST",
        &format!("/api/player/{session}/pause"),
        None,
    )
    .await;
    assert_eq!(parse(&body)["state"], "paused");

    let (_, body) = request(
        router,
        "POST",
        &format!("/api/player/{session}/play"),
        None,
    )
    .await;
    let body = parse(&body);
    assert_eq!(body["state"], "playing");
    // User actions never touch the generation
    assert_eq!(body["generation"].as_u64().unwrap(), generation);
}

#[tokio::test]
async fn test_failure_then_retry_then_ready_recovers() {
    let router = demo_router();
    let (session, generation) = mount_session(&router).await;

    let (_, body) = request(
        router.clone(),
        "POST",
        &format!("/api/player/{session}/events"),
        Some(json!({ "generation": generation, "status": "failed", "error": "network" })),
    )
    .await;
    let body = parse(&body);
    assert_eq!(body["state"], "error");
    assert_eq!(body["error"], "network");

    let (status, body) = request(
        router.clone(),
        "POST",
        &format!("/api/player/{session}/retry"),
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let body = parse(&body);
    assert_eq!(body["state"], "loading");
    let new_generation = body["generation"].as_u64().unwrap();
    assert_eq!(new_generation, generation + 1);

    let (_, body) = request(
        router,
        "POST",
        &format!("/api/player/{session}/events"),
        Some(json!({ "generation": new_generation, "status": "ready" })),
    )
    .await;
    assert_eq!(parse(&body)["state"], "playing");
}

#[tokio::test]
async fn test_stale_event_is_discarded_over_http() {
    let router = demo_router();
    let (session, generation) = mount_session(&router).await;

    // Fail generation 1, retry to generation 2
    request(
        router.clone(),
        "POST",
        &format!("/api/player/{session}/events"),
        Some(json!({ "generation": generation, "status": "failed", "error": "network" })),
    )
    .await;
    request(
        router.clone(),
        "POST",
        &format!("/api/player/{session}/retry"),
        None,
    )
    .await;

    // Generation 1's ready event arrives late: accepted, not applied
    let (status, body) = request(
        router.clone(),
        "POST",
        &format!("/api/player/{session}/events"),
        Some(json!({ "generation": generation, "status": "ready" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let body = parse(&body);
    assert_eq!(body["applied"], false);
    assert_eq!(body["state"], "loading");

    // The current generation's ready event still applies
    let (_, body) = request(
        router,
        "POST",
        &format!("/api/player/{session}/events"),
        Some(json!({ "generation": generation + 1, "status": "ready" })),
    )
    .await;
    assert_eq!(parse(&body)["state"], "playing");
}

#[tokio::test]
async fn test_retry_outside_error_state_conflicts() {
    let router = demo_router();
    let (session, _) = mount_session(&router).await;

    let (status, _) = request(
        router,
        "POST",
        &format!("/api/player/{session}/retry"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_unknown_session_is_404() {
    let router = demo_router();

    let (status, _) = request(
        router.clone(),
        "GET",
        "/api/player/00000000-0000-0000-0000-000000000000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Malformed session ids get the same signal
    let (status, _) = request(router, "GET", "/api/player/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_session_limit_is_enforced() {
    let mut config = MarqueeConfig::for_testing();
    config.playback.max_sessions = 1;
    let router = build_router(build_state(&config).unwrap());

    mount_session(&router).await;

    let (status, body) = request(
        router,
        "POST",
        "/api/player",
        Some(json!({ "id": "movie2" })),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(parse(&body)["error"], "session limit reached");
}

#[tokio::test]
async fn test_unmount_discards_session_and_frees_capacity() {
    let mut config = MarqueeConfig::for_testing();
    config.playback.max_sessions = 1;
    let router = build_router(build_state(&config).unwrap());

    let (session, _) = mount_session(&router).await;

    let (status, _) = request(
        router.clone(),
        "DELETE",
        &format!("/api/player/{session}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // The discarded session is gone
    let (status, _) = request(
        router.clone(),
        "GET",
        &format!("/api/player/{session}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // A second unmount of the same session gets the uniform 404
    let (status, _) = request(
        router.clone(),
        "DELETE",
        &format!("/api/player/{session}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Unmounting freed the registry slot: a new mount succeeds where
    // a leaked session would have exhausted the cap
    mount_session(&router).await;
}

#[tokio::test]
async fn test_sessions_are_independent() {
    let router = demo_router();
    let (first, first_generation) = mount_session(&router).await;
    let (second, _) = mount_session(&router).await;

    // Drive the first session to playing; the second stays loading
    request(
        router.clone(),
        "POST",
        &format!("/api/player/{first}/events"),
        Some(json!({ "generation": first_generation, "status": "ready" })),
    )
    .await;

    let (_, body) = request(router.clone(), "GET", &format!("/api/player/{first}"), None).await;
    assert_eq!(parse(&body)["state"], "playing");

    let (_, body) = request(router, "GET", &format!("/api/player/{second}"), None).await;
    assert_eq!(parse(&body)["state"], "loading");
}
