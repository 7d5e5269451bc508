//! Student data models.
//!
//! Re-exports the shared types from the `rollcall-models` crate.

pub use rollcall_models::{ClassroomId, GradeLevel, Roster, Student, StudentId};
