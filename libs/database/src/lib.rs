//! Database library providing the Cassandra/ScyllaDB connector and utilities
//!
//! Uses the `scylla` driver, which speaks CQL to both Apache Cassandra and
//! ScyllaDB clusters.
//!
//! # Examples
//!
//! ```ignore
//! use database::cassandra;
//!
//! let session = cassandra::connect(&["127.0.0.1:9042"]).await?;
//! session.query_unpaged("SELECT * FROM system.local", &[]).await?;
//!
//! // With configuration
//! let config = cassandra::CassandraConfig::with_keyspace(
//!     vec!["127.0.0.1:9042"],
//!     "student_mgmt"
//! );
//! let session = cassandra::connect_from_config(&config).await?;
//! ```

pub mod cassandra;
pub mod common;

pub use common::{retry, retry_with_backoff, RetryConfig};
