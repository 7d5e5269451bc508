use crate::modules::students::controller::get_classroom_students;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Mounted under `/api/classrooms`.
pub fn init_classroom_students_router() -> Router<AppState> {
    Router::new().route("/{classroom_id}/students", get(get_classroom_students))
}
