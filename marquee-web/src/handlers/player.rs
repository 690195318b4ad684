//! Playback session handlers
//!
//! One `PlaybackController` per mounted player, keyed by a session id.
//! The player front end creates a session when it mounts, forwards the
//! engine's lifecycle events with their generation tag, and drives
//! user actions through the action endpoints. Stale events are
//! accepted at the HTTP layer and discarded by the controller.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use marquee_core::playback::{MediaLoadError, PlaybackController, PlayerEvent};
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::handlers::api::not_found_json;
use crate::server::AppState;

/// Body for `POST /api/player`.
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    /// Content id to mount a player for
    pub id: String,
}

/// Body for `POST /api/player/{session}/events`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleEventRequest {
    /// Generation tag of the load attempt the event belongs to
    pub generation: u64,
    /// "ready" or "failed"
    pub status: LifecycleStatus,
    /// Failure kind for "failed" events; defaults to unknown
    #[serde(default)]
    pub error: Option<MediaLoadError>,
}

/// Lifecycle notification kinds accepted from the player front end.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStatus {
    Ready,
    Failed,
}

/// Body for `POST /api/player/{session}/retry`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryRequest {
    /// Alternative media location to retry against
    pub fallback_url: Option<String>,
}

fn session_json(session: Uuid, controller: &PlaybackController) -> Value {
    json!({
        "session": session,
        "state": controller.state().name(),
        "generation": controller.generation(),
        "mediaUrl": controller.media_url(),
        "volume": controller.volume(),
        "positionSecs": controller.position().as_secs_f64(),
        "error": controller.state().error(),
    })
}

/// Creates a playback session for a resolved content record.
///
/// The controller mounts immediately: the session starts in `Loading`
/// with generation 1. Unknown content ids get the same 404 as the
/// catalog API.
pub async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Response {
    let Some(item) = state.resolver.resolve(&request.id).cloned() else {
        return not_found_json();
    };

    let mut sessions = state.sessions.write().await;
    if sessions.len() >= state.playback.max_sessions {
        tracing::warn!(
            max_sessions = state.playback.max_sessions,
            "playback session limit reached"
        );
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": "session limit reached" })),
        )
            .into_response();
    }

    let mut controller = PlaybackController::mount(item.media_url);
    controller.set_volume(state.playback.default_volume);

    let session = Uuid::new_v4();
    let body = session_json(session, &controller);
    sessions.insert(session, controller);

    tracing::info!(%session, id = %request.id, "playback session created");
    (StatusCode::CREATED, Json(body)).into_response()
}

/// Returns the current state of a session.
pub async fn session_state(State(state): State<AppState>, Path(session): Path<String>) -> Response {
    let Ok(session) = Uuid::parse_str(&session) else {
        return not_found_json();
    };

    let sessions = state.sessions.read().await;
    match sessions.get(&session) {
        Some(controller) => Json(session_json(session, controller)).into_response(),
        None => not_found_json(),
    }
}

/// Unmounts a playback session, discarding its controller and freeing
/// its registry slot.
///
/// A session that was never created, or was already discarded, gets
/// the uniform 404.
pub async fn destroy_session(
    State(state): State<AppState>,
    Path(session): Path<String>,
) -> Response {
    let Ok(session) = Uuid::parse_str(&session) else {
        return not_found_json();
    };

    let mut sessions = state.sessions.write().await;
    match sessions.remove(&session) {
        Some(_) => {
            tracing::info!(%session, "playback session discarded");
            StatusCode::NO_CONTENT.into_response()
        }
        None => not_found_json(),
    }
}

/// Applies a lifecycle event from the playback engine.
///
/// The response reports whether the event applied; a stale generation
/// tag is not an error, just a discarded event.
pub async fn session_event(
    State(state): State<AppState>,
    Path(session): Path<String>,
    Json(request): Json<LifecycleEventRequest>,
) -> Response {
    let Ok(session) = Uuid::parse_str(&session) else {
        return not_found_json();
    };

    let mut sessions = state.sessions.write().await;
    let Some(controller) = sessions.get_mut(&session) else {
        return not_found_json();
    };

    let event = match request.status {
        LifecycleStatus::Ready => PlayerEvent::Ready {
            generation: request.generation,
        },
        LifecycleStatus::Failed => PlayerEvent::Failed {
            generation: request.generation,
            error: request.error.unwrap_or(MediaLoadError::Unknown),
        },
    };

    let applied = controller.handle_event(event);
    let mut body = session_json(session, controller);
    body["applied"] = json!(applied);
    Json(body).into_response()
}

/// User play action.
pub async fn session_play(State(state): State<AppState>, Path(session): Path<String>) -> Response {
    user_action(state, session, |controller| controller.play()).await
}

/// User pause action.
pub async fn session_pause(State(state): State<AppState>, Path(session): Path<String>) -> Response {
    user_action(state, session, |controller| controller.pause()).await
}

async fn user_action(
    state: AppState,
    session: String,
    action: impl FnOnce(&mut PlaybackController) -> bool,
) -> Response {
    let Ok(session) = Uuid::parse_str(&session) else {
        return not_found_json();
    };

    let mut sessions = state.sessions.write().await;
    let Some(controller) = sessions.get_mut(&session) else {
        return not_found_json();
    };

    let applied = action(controller);
    let mut body = session_json(session, controller);
    body["applied"] = json!(applied);
    Json(body).into_response()
}

/// User retry action after a failed load.
///
/// Re-issues the load with a fresh generation; rejected with 409 when
/// the session is not in the error state.
pub async fn session_retry(
    State(state): State<AppState>,
    Path(session): Path<String>,
    body: Option<Json<RetryRequest>>,
) -> Response {
    let Ok(session) = Uuid::parse_str(&session) else {
        return not_found_json();
    };

    let mut sessions = state.sessions.write().await;
    let Some(controller) = sessions.get_mut(&session) else {
        return not_found_json();
    };

    let request = body.map(|Json(request)| request).unwrap_or_default();
    match controller.retry(request.fallback_url) {
        Some(_generation) => Json(session_json(session, controller)).into_response(),
        None => (
            StatusCode::CONFLICT,
            Json(json!({ "error": "session is not in an error state" })),
        )
            .into_response(),
    }
}
