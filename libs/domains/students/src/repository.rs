use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StudentResult;
use crate::models::{NewStudent, StudentRecord};

/// Repository trait for student record persistence
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Insert a new student and return the minted id.
    ///
    /// Always creates a new record; there is no existence check.
    async fn insert(&self, new: NewStudent) -> StudentResult<Uuid>;

    /// Point lookup on the primary key.
    async fn get_by_id(&self, id: Uuid) -> StudentResult<Option<StudentRecord>>;

    /// Fetch by roll via a filter scan.
    ///
    /// Scans the whole table evaluating the predicate; cost grows with table
    /// size. Production deployments should maintain a secondary index or a
    /// roll -> id lookup table instead. Kept here for demonstration.
    async fn get_by_roll(&self, roll: &str) -> StudentResult<Option<StudentRecord>>;

    /// Update the email of a student.
    ///
    /// CQL upsert semantics: updating an absent id is not an error; it
    /// creates a partial row holding only the key and the email.
    async fn update_email(&self, id: Uuid, new_email: &str) -> StudentResult<()>;

    /// Delete a student by id. No-op if absent.
    async fn delete_by_id(&self, id: Uuid) -> StudentResult<()>;

    /// List up to `limit` records in engine-defined order.
    async fn list(&self, limit: i32) -> StudentResult<Vec<StudentRecord>>;
}

/// In-memory implementation of StudentRepository (for development/testing)
///
/// Mirrors the engine's behavior where it is observable: `update_email` on an
/// absent id creates a partial row, and `list` yields no particular order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStudentRepository {
    students: Arc<RwLock<HashMap<Uuid, StudentRecord>>>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self {
            students: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn insert(&self, new: NewStudent) -> StudentResult<Uuid> {
        let student_id = Uuid::new_v4();
        let record = StudentRecord {
            student_id,
            student_roll: Some(new.student_roll),
            first_name: Some(new.first_name),
            last_name: Some(new.last_name),
            email: Some(new.email),
            dob: new.dob,
            course: Some(new.course),
            year: new.year,
            created_at: Some(Utc::now()),
        };

        let mut students = self.students.write().await;
        students.insert(student_id, record);

        tracing::info!(%student_id, "Inserted student");
        Ok(student_id)
    }

    async fn get_by_id(&self, id: Uuid) -> StudentResult<Option<StudentRecord>> {
        let students = self.students.read().await;
        Ok(students.get(&id).cloned())
    }

    async fn get_by_roll(&self, roll: &str) -> StudentResult<Option<StudentRecord>> {
        let students = self.students.read().await;
        let record = students
            .values()
            .find(|r| r.student_roll.as_deref() == Some(roll))
            .cloned();
        Ok(record)
    }

    async fn update_email(&self, id: Uuid, new_email: &str) -> StudentResult<()> {
        let mut students = self.students.write().await;
        students
            .entry(id)
            .and_modify(|record| record.email = Some(new_email.to_string()))
            .or_insert_with(|| StudentRecord {
                student_id: id,
                student_roll: None,
                first_name: None,
                last_name: None,
                email: Some(new_email.to_string()),
                dob: None,
                course: None,
                year: None,
                created_at: None,
            });

        tracing::info!(student_id = %id, "Updated student email");
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> StudentResult<()> {
        let mut students = self.students.write().await;
        if students.remove(&id).is_some() {
            tracing::info!(student_id = %id, "Deleted student");
        }
        Ok(())
    }

    async fn list(&self, limit: i32) -> StudentResult<Vec<StudentRecord>> {
        let students = self.students.read().await;
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(students.values().take(limit).cloned().collect())
    }
}
