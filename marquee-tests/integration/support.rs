//! Shared helpers for driving the router in-process

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use marquee_core::config::MarqueeConfig;
use marquee_web::{build_router, build_state};
use serde_json::Value;
use tower::ServiceExt;

/// Router over the demo catalog with default playback settings.
pub fn demo_router() -> Router {
    let state = build_state(&MarqueeConfig::for_testing()).expect("demo catalog is valid");
    build_router(state)
}

/// Sends one request and collects the response body as a string.
pub async fn request(
    router: Router,
    method: &str,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, String) {
    let builder = Request::builder().method(method).uri(path);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Parses a response body as JSON.
pub fn json(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}
