use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use rollcall::router::init_router;
use rollcall::state::{AppState, build_store};
use rollcall_config::FaultConfig;
use tower::ServiceExt;

/// Classroom the load-test scripts hit.
pub const FIXTURE_CLASSROOM: &str = "2ae08889-59d0-4d2a-920a-083ca2dba1a7";

pub fn students_uri(classroom_id: &str) -> String {
    format!("/api/classrooms/{}/students", classroom_id)
}

/// Router over the bare generator.
#[allow(dead_code)]
pub fn reliable_app() -> Router {
    init_router(AppState::reliable(), None)
}

/// Router over the fault injecting store, without metrics.
#[allow(dead_code)]
pub fn unreliable_app() -> Router {
    let store = build_store(&FaultConfig::default(), None);
    init_router(AppState::new(store), None)
}

#[allow(dead_code)]
pub async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Bytes) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
    send(app, "GET", uri).await
}
