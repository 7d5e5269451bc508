//! Student roster models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::grades::GradeLevel;
use crate::ids::StudentId;

/// A synthetic student.
///
/// Generated fresh for every response and never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    /// Integer grade level, -1 (PreKindergarten) through 12.
    #[schema(value_type = i8)]
    pub grade: GradeLevel,
}

/// Ordered list of students for one classroom.
pub type Roster = Vec<Student>;
