//! Student records domain
//!
//! Model, repository contract, and the Cassandra-backed implementation for
//! the `students` table. The repository surface is six operations: insert,
//! point lookup by id, lookup by roll (filter scan), email update, delete,
//! and a bounded listing.

pub mod error;
pub mod models;
pub mod repository;
pub mod schema;
pub mod scylla_repository_impl;

pub use error::{StudentError, StudentResult};
pub use models::{NewStudent, StudentRecord};
pub use repository::{InMemoryStudentRepository, StudentRepository};
pub use scylla_repository_impl::ScyllaStudentRepository;
