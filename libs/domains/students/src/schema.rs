use scylla::client::session::Session;
use tracing::info;

use crate::error::StudentResult;

/// `students` table definition: nine columns, `student_id` as the sole
/// primary key component.
const CREATE_TABLE_CQL: &str = "\
CREATE TABLE IF NOT EXISTS students (
    student_id uuid,
    student_roll text,
    first_name text,
    last_name text,
    email text,
    dob date,
    course text,
    year int,
    created_at timestamp,
    PRIMARY KEY (student_id)
)";

/// Create the `students` table if it doesn't exist.
///
/// Expects a keyspace-bound session. Idempotent: safe to call on every
/// startup.
pub async fn ensure_table(session: &Session) -> StudentResult<()> {
    session.query_unpaged(CREATE_TABLE_CQL, &[]).await?;
    info!("Table 'students' ready");
    Ok(())
}
