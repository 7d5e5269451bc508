//! Grade levels, PreKindergarten through Grade 12.
//!
//! Each level carries a fixed integer (-1 for PreKindergarten, 0 for
//! Kindergarten, 1..=12 for the numbered grades). Ordering and the wire
//! format both use that integer.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
#[repr(i8)]
pub enum GradeLevel {
    PreKindergarten = -1,
    Kindergarten = 0,
    Grade1 = 1,
    Grade2 = 2,
    Grade3 = 3,
    Grade4 = 4,
    Grade5 = 5,
    Grade6 = 6,
    Grade7 = 7,
    Grade8 = 8,
    Grade9 = 9,
    Grade10 = 10,
    Grade11 = 11,
    Grade12 = 12,
}

impl GradeLevel {
    /// Every level, lowest first.
    pub const ALL: [GradeLevel; 14] = [
        GradeLevel::PreKindergarten,
        GradeLevel::Kindergarten,
        GradeLevel::Grade1,
        GradeLevel::Grade2,
        GradeLevel::Grade3,
        GradeLevel::Grade4,
        GradeLevel::Grade5,
        GradeLevel::Grade6,
        GradeLevel::Grade7,
        GradeLevel::Grade8,
        GradeLevel::Grade9,
        GradeLevel::Grade10,
        GradeLevel::Grade11,
        GradeLevel::Grade12,
    ];

    #[inline]
    pub const fn as_i8(self) -> i8 {
        self as i8
    }
}

impl From<GradeLevel> for i8 {
    fn from(grade: GradeLevel) -> i8 {
        grade.as_i8()
    }
}

impl TryFrom<i8> for GradeLevel {
    type Error = InvalidGradeLevel;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        GradeLevel::ALL
            .iter()
            .copied()
            .find(|grade| grade.as_i8() == value)
            .ok_or(InvalidGradeLevel(value))
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeLevel::PreKindergarten => write!(f, "PreKindergarten"),
            GradeLevel::Kindergarten => write!(f, "Kindergarten"),
            other => write!(f, "Grade{}", other.as_i8()),
        }
    }
}

/// Integer outside -1..=12.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidGradeLevel(pub i8);

impl fmt::Display for InvalidGradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid grade level {}, expected -1..=12", self.0)
    }
}

impl std::error::Error for InvalidGradeLevel {}
