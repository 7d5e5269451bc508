use utoipa::OpenApi;

use crate::modules::students::model::Student;

#[derive(OpenApi)]
#[openapi(
    paths(crate::modules::students::controller::get_classroom_students),
    components(schemas(Student)),
    tags(
        (name = "Classrooms", description = "Synthetic classroom rosters for load testing")
    ),
    info(
        title = "Rollcall API",
        description = "Deterministic fake student rosters with optional fault injection"
    )
)]
pub struct ApiDoc;
