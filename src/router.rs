use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::{metrics_app, metrics_middleware};
use crate::modules::students::router::init_classroom_students_router;
use crate::state::AppState;
use axum::{Json, Router, middleware, routing::get};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::{Value, json};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the application router.
///
/// With a metrics handle, `/metrics` is mounted and HTTP metrics are recorded.
pub fn init_router(state: AppState, metrics: Option<PrometheusHandle>) -> Router {
    let mut router = Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/health", get(health))
        .nest("/api/classrooms", init_classroom_students_router())
        .with_state(state);

    if let Some(handle) = metrics {
        router = router
            .merge(metrics_app(handle))
            .layer(middleware::from_fn(metrics_middleware));
    }

    router.layer(middleware::from_fn(logging_middleware))
}
