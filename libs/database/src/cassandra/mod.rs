//! Cassandra/ScyllaDB database connector and utilities
//!
//! Provides connection management, keyspace bootstrap, and health probes.
//! Uses the `scylla` driver which is compatible with both Apache Cassandra
//! and ScyllaDB.
//!
//! # Example
//!
//! ```ignore
//! use database::cassandra::{connect_from_config, CassandraConfig, ReplicationStrategy};
//!
//! let config = CassandraConfig::with_keyspace(vec!["127.0.0.1:9042"], "student_mgmt")
//!     .with_replication(ReplicationStrategy::simple(1));
//! let session = connect_from_config(&config).await?;
//!
//! session.query_unpaged("SELECT * FROM students", &[]).await?;
//! ```

mod config;
mod connector;
mod health;

pub use config::{CassandraConfig, ReplicationStrategy};
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, connect_with_retry,
    create_keyspace_if_not_exists, use_keyspace, CassandraError, CassandraSession,
};
pub use health::{check_health, check_health_detailed, get_cluster_info, ClusterInfo, HealthStatus};

// Re-export driver types for convenience
pub use scylla::client::session::Session;
pub use scylla::client::session_builder::SessionBuilder;
