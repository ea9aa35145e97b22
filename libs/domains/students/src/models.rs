use chrono::{DateTime, NaiveDate, Utc};
use scylla::DeserializeRow;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Student entity - matches the `students` table schema
///
/// `student_id` is the sole partition key. Every other column is nullable at
/// the engine level: an UPDATE on an absent key creates a partial row, so a
/// read can legitimately return a record where only some columns are set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, DeserializeRow)]
pub struct StudentRecord {
    /// Unique identifier, minted client-side at insert
    pub student_id: Uuid,
    /// External roll/enrollment identifier; not unique-enforced
    pub student_roll: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// The only column mutated after insert
    pub email: Option<String>,
    pub dob: Option<NaiveDate>,
    pub course: Option<String>,
    pub year: Option<i32>,
    /// Assigned server-side at insert
    pub created_at: Option<DateTime<Utc>>,
}

impl StudentRecord {
    /// First and last name joined for display, skipping unset parts.
    pub fn full_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => String::new(),
        }
    }
}

/// Input for inserting a new student
///
/// The id and `created_at` are not part of the input: the repository mints
/// the id and the server assigns the timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStudent {
    pub student_roll: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub dob: Option<NaiveDate>,
    pub course: String,
    pub year: Option<i32>,
}
