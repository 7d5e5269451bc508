use crate::modules::students::model::{ClassroomId, Student};
use crate::modules::students::service::StudentsStore;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use tracing::instrument;

#[utoipa::path(
    get,
    path = "/api/classrooms/{classroom_id}/students",
    params(
        ("classroom_id" = uuid::Uuid, Path, description = "Classroom ID")
    ),
    responses(
        (status = 200, description = "Roster of the classroom", body = [Student]),
        (status = 400, description = "Classroom ID is not a UUID"),
        (status = 404, description = "Classroom has no roster"),
        (status = 500, description = "Roster could not be retrieved")
    ),
    tag = "Classrooms"
)]
#[instrument(skip(state))]
pub async fn get_classroom_students(
    State(state): State<AppState>,
    Path(classroom_id): Path<ClassroomId>,
) -> Result<Response, AppError> {
    match state.store.get_students(classroom_id).await? {
        Some(students) => Ok(Json(students).into_response()),
        None => Err(AppError::not_found(anyhow::anyhow!(
            "no roster for classroom {classroom_id}"
        ))),
    }
}
