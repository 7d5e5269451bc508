//! # Rollcall Models
//!
//! Domain types shared by the rollcall server and CLI.
//!
//! - [`ids`]: `ClassroomId` and `StudentId` newtypes
//! - [`grades`]: the closed `GradeLevel` enumeration
//! - [`students`]: the `Student` value record and `Roster` alias

pub mod grades;
pub mod ids;
pub mod students;

pub use grades::GradeLevel;
pub use ids::{ClassroomId, StudentId};
pub use students::{Roster, Student};
