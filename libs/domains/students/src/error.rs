use scylla::errors::{ExecutionError, PrepareError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StudentError {
    #[error("Statement preparation failed: {0}")]
    Prepare(#[from] PrepareError),

    #[error("Query execution failed: {0}")]
    Execution(#[from] ExecutionError),

    #[error("Row decoding failed: {0}")]
    Decode(String),
}

pub type StudentResult<T> = Result<T, StudentError>;
