//! Deterministic fake rosters.
//!
//! A classroom id is hashed into a seed. The seed drives a `StdRng` that
//! picks the class size, the shared grade level and every student field, in
//! that order. The same id therefore always produces the same roster, also
//! across restarts.

use async_trait::async_trait;
use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rollcall_models::{ClassroomId, GradeLevel, Roster, Student, StudentId};
use sha2::{Digest, Sha256};
use std::ops::RangeInclusive;

use super::service::{StoreResult, StudentsStore};

/// Sizes are drawn as `u32` so the sequence does not depend on pointer width.
pub const CLASS_SIZE: RangeInclusive<u32> = 15..=35;

/// First eight bytes, little-endian, of SHA-256 over the raw UUID bytes.
pub fn seed_for(classroom_id: ClassroomId) -> u64 {
    let digest = Sha256::digest(classroom_id.as_bytes());
    let mut seed = [0u8; 8];
    seed.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(seed)
}

/// Class size and grade for a classroom, without generating the students.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RosterShape {
    pub seed: u64,
    pub class_size: usize,
    pub grade: GradeLevel,
}

impl RosterShape {
    pub fn for_classroom(classroom_id: ClassroomId) -> Self {
        let seed = seed_for(classroom_id);
        let mut rng = StdRng::seed_from_u64(seed);
        Self::draw(seed, &mut rng)
    }

    fn draw(seed: u64, rng: &mut StdRng) -> Self {
        let class_size = rng.random_range(CLASS_SIZE) as usize;
        let grade = GradeLevel::ALL[rng.random_range(0..GradeLevel::ALL.len() as u32) as usize];
        Self {
            seed,
            class_size,
            grade,
        }
    }
}

/// Builds the full roster for `classroom_id`. Never empty.
pub fn generate(classroom_id: ClassroomId) -> Roster {
    let seed = seed_for(classroom_id);
    let mut rng = StdRng::seed_from_u64(seed);
    let shape = RosterShape::draw(seed, &mut rng);

    (0..shape.class_size)
        .map(|_| fake_student(&mut rng, shape.grade))
        .collect()
}

fn fake_student(rng: &mut StdRng, grade: GradeLevel) -> Student {
    let id = StudentId::from_uuid(uuid::Builder::from_random_bytes(rng.random()).into_uuid());
    let first_name: String = FirstName().fake_with_rng(rng);
    let last_name: String = LastName().fake_with_rng(rng);
    let username = username_for(rng, &first_name, &last_name);

    Student {
        id,
        first_name,
        last_name,
        username,
        grade,
    }
}

/// One of `first.last`, `first_last`, `firstlast`, or `first` + two digits.
fn username_for(rng: &mut StdRng, first_name: &str, last_name: &str) -> String {
    let first = normalize(first_name);
    let last = normalize(last_name);

    match rng.random_range(0..4u8) {
        0 => format!("{first}.{last}"),
        1 => format!("{first}_{last}"),
        2 => format!("{first}{last}"),
        _ => format!("{first}{:02}", rng.random_range(0..100u8)),
    }
}

/// Lowercase ASCII alphanumerics only. Falls back to `student` for names
/// with no usable characters.
fn normalize(name: &str) -> String {
    let normalized: String = name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if normalized.is_empty() {
        "student".to_string()
    } else {
        normalized
    }
}

/// The base store: generates a roster for every classroom id it is given.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeneratedStudentsStore;

#[async_trait]
impl StudentsStore for GeneratedStudentsStore {
    async fn get_students(&self, classroom_id: ClassroomId) -> StoreResult {
        Ok(Some(generate(classroom_id)))
    }

    fn describe(&self) -> String {
        "GeneratedStudentsStore".to_string()
    }
}
