use async_trait::async_trait;
use scylla::client::session::Session;
use scylla::statement::Consistency;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::error::{StudentError, StudentResult};
use crate::models::{NewStudent, StudentRecord};
use crate::repository::StudentRepository;

const SELECT_COLUMNS: &str =
    "student_id, student_roll, first_name, last_name, email, dob, course, year, created_at";

const INSERT_CQL: &str = "\
INSERT INTO students (student_id, student_roll, first_name, last_name, email, dob, course, year, created_at)
VALUES (?, ?, ?, ?, ?, ?, ?, ?, toTimestamp(now()))";

/// Cassandra-backed implementation of [`StudentRepository`]
///
/// Each operation is a single prepared statement against a keyspace-bound
/// session. Failures propagate to the caller; nothing is retried here.
pub struct ScyllaStudentRepository {
    session: Arc<Session>,
}

impl ScyllaStudentRepository {
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl StudentRepository for ScyllaStudentRepository {
    async fn insert(&self, new: NewStudent) -> StudentResult<Uuid> {
        let student_id = Uuid::new_v4();
        let prepared = self.session.prepare(INSERT_CQL).await?;
        self.session
            .execute_unpaged(
                &prepared,
                (
                    student_id,
                    &new.student_roll,
                    &new.first_name,
                    &new.last_name,
                    &new.email,
                    new.dob,
                    &new.course,
                    new.year,
                ),
            )
            .await?;

        debug!(%student_id, roll = %new.student_roll, "Inserted student");
        Ok(student_id)
    }

    async fn get_by_id(&self, id: Uuid) -> StudentResult<Option<StudentRecord>> {
        let prepared = self
            .session
            .prepare(format!(
                "SELECT {SELECT_COLUMNS} FROM students WHERE student_id = ?"
            ))
            .await?;
        let result = self.session.execute_unpaged(&prepared, (id,)).await?;

        result
            .into_rows_result()
            .map_err(|e| StudentError::Decode(e.to_string()))?
            .maybe_first_row::<StudentRecord>()
            .map_err(|e| StudentError::Decode(e.to_string()))
    }

    async fn get_by_roll(&self, roll: &str) -> StudentResult<Option<StudentRecord>> {
        // Filter scan on a non-key column; see the trait docs for the cost.
        let prepared = self
            .session
            .prepare(format!(
                "SELECT {SELECT_COLUMNS} FROM students WHERE student_roll = ? ALLOW FILTERING"
            ))
            .await?;
        let result = self.session.execute_unpaged(&prepared, (roll,)).await?;

        result
            .into_rows_result()
            .map_err(|e| StudentError::Decode(e.to_string()))?
            .maybe_first_row::<StudentRecord>()
            .map_err(|e| StudentError::Decode(e.to_string()))
    }

    async fn update_email(&self, id: Uuid, new_email: &str) -> StudentResult<()> {
        let prepared = self
            .session
            .prepare("UPDATE students SET email = ? WHERE student_id = ?")
            .await?;
        self.session
            .execute_unpaged(&prepared, (new_email, id))
            .await?;

        debug!(student_id = %id, "Updated student email");
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> StudentResult<()> {
        let prepared = self
            .session
            .prepare("DELETE FROM students WHERE student_id = ?")
            .await?;
        self.session.execute_unpaged(&prepared, (id,)).await?;

        debug!(student_id = %id, "Deleted student");
        Ok(())
    }

    async fn list(&self, limit: i32) -> StudentResult<Vec<StudentRecord>> {
        let mut prepared = self
            .session
            .prepare(format!("SELECT {SELECT_COLUMNS} FROM students LIMIT ?"))
            .await?;
        // Weakest read consistency: availability over cross-replica freshness
        prepared.set_consistency(Consistency::One);
        let result = self.session.execute_unpaged(&prepared, (limit,)).await?;

        let rows_result = result
            .into_rows_result()
            .map_err(|e| StudentError::Decode(e.to_string()))?;
        let rows = rows_result
            .rows::<StudentRecord>()
            .map_err(|e| StudentError::Decode(e.to_string()))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| StudentError::Decode(e.to_string()))
    }
}
