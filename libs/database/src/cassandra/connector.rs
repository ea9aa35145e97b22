use scylla::client::session::Session;
use scylla::client::session_builder::SessionBuilder;
use scylla::errors::{ExecutionError, NewSessionError};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use super::{CassandraConfig, ReplicationStrategy};
use crate::common::{retry, retry_with_backoff, RetryConfig};

/// Error type for Cassandra operations
#[derive(Debug, thiserror::Error)]
pub enum CassandraError {
    #[error("Cassandra error: {0}")]
    Scylla(#[from] NewSessionError),

    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Keyspace error: {0}")]
    KeyspaceError(String),
}

/// Shared Cassandra session handle
pub type CassandraSession = Arc<Session>;

/// Connect to Cassandra/ScyllaDB and return a Session
///
/// # Arguments
/// * `contact_points` - List of Cassandra nodes (e.g., ["127.0.0.1:9042"])
///
/// # Example
/// ```ignore
/// use database::cassandra::connect;
///
/// let session = connect(&["127.0.0.1:9042"]).await?;
/// session.query_unpaged("SELECT * FROM system.local", &[]).await?;
/// ```
pub async fn connect(
    contact_points: &[impl AsRef<str>],
) -> Result<CassandraSession, CassandraError> {
    let points: Vec<&str> = contact_points.iter().map(|s| s.as_ref()).collect();
    info!("Attempting to connect to Cassandra at {:?}", points);

    let session: Session = SessionBuilder::new()
        .known_nodes(&points)
        .connection_timeout(Duration::from_secs(10))
        .build()
        .await?;

    // Verify the link before handing the session out
    session
        .query_unpaged("SELECT release_version FROM system.local", &[])
        .await
        .map_err(|e| CassandraError::ConnectionFailed(e.to_string()))?;

    info!("Successfully connected to Cassandra");
    Ok(Arc::new(session))
}

/// Connect using a [`CassandraConfig`]
///
/// This is the recommended entry point when using configuration. Applies the
/// connection timeout, optional credentials, and binds the session to the
/// configured keyspace when one is set.
pub async fn connect_from_config(
    config: &CassandraConfig,
) -> Result<CassandraSession, CassandraError> {
    info!(
        "Attempting to connect to Cassandra at {:?}",
        config.contact_points
    );

    let points: Vec<&str> = config.contact_points.iter().map(|s| s.as_str()).collect();

    let mut builder = SessionBuilder::new()
        .known_nodes(&points)
        .connection_timeout(Duration::from_secs(config.connect_timeout_secs));

    if let (Some(username), Some(password)) = (&config.username, &config.password) {
        builder = builder.user(username, password);
    }

    if let Some(ref keyspace) = config.keyspace {
        builder = builder.use_keyspace(keyspace, true);
    }

    let session: Session = builder.build().await?;

    session
        .query_unpaged("SELECT release_version FROM system.local", &[])
        .await
        .map_err(|e| CassandraError::ConnectionFailed(e.to_string()))?;

    info!("Successfully connected to Cassandra");
    Ok(Arc::new(session))
}

/// Connect to Cassandra with automatic retry on failure
///
/// Uses exponential backoff with jitter to retry connection attempts.
/// Useful for handling transient network issues during startup. Statement
/// execution is never retried; only session establishment is.
pub async fn connect_with_retry(
    contact_points: &[impl AsRef<str> + Clone],
    retry_config: Option<RetryConfig>,
) -> Result<CassandraSession, CassandraError> {
    let points: Vec<String> = contact_points
        .iter()
        .map(|s| s.as_ref().to_string())
        .collect();

    match retry_config {
        Some(config) => {
            retry_with_backoff(
                || {
                    let p = points.clone();
                    async move { connect(&p).await }
                },
                config,
            )
            .await
        }
        None => {
            retry(|| {
                let p = points.clone();
                async move { connect(&p).await }
            })
            .await
        }
    }
}

/// Connect from config with automatic retry on failure
///
/// # Example
/// ```ignore
/// use core_config::FromEnv;
/// use database::cassandra::{CassandraConfig, connect_from_config_with_retry};
///
/// let config = CassandraConfig::from_env()?;
/// let session = connect_from_config_with_retry(&config, None).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: &CassandraConfig,
    retry_config: Option<RetryConfig>,
) -> Result<CassandraSession, CassandraError> {
    let config_clone = config.clone();

    match retry_config {
        Some(retry_cfg) => {
            retry_with_backoff(|| connect_from_config(&config_clone), retry_cfg).await
        }
        None => retry(|| connect_from_config(&config_clone)).await,
    }
}

/// Create a keyspace if it doesn't exist
///
/// Renders the replication profile into the CREATE KEYSPACE statement.
/// Idempotent: safe to call on every startup.
///
/// # Example
/// ```ignore
/// use database::cassandra::{connect, create_keyspace_if_not_exists, ReplicationStrategy};
///
/// let session = connect(&["127.0.0.1:9042"]).await?;
/// create_keyspace_if_not_exists(&session, "student_mgmt", &ReplicationStrategy::simple(1)).await?;
/// ```
pub async fn create_keyspace_if_not_exists(
    session: &Session,
    keyspace: &str,
    replication: &ReplicationStrategy,
) -> Result<(), CassandraError> {
    let query = format!(
        "CREATE KEYSPACE IF NOT EXISTS {} WITH replication = {}",
        keyspace,
        replication.to_cql()
    );

    session
        .query_unpaged(query, &[])
        .await
        .map_err(|e| CassandraError::KeyspaceError(e.to_string()))?;

    info!("Keyspace '{}' ready", keyspace);
    Ok(())
}

/// Bind the session to a specific keyspace
pub async fn use_keyspace(session: &Session, keyspace: &str) -> Result<(), CassandraError> {
    session
        .use_keyspace(keyspace, true)
        .await
        .map_err(|e| CassandraError::KeyspaceError(e.to_string()))?;

    info!("Using keyspace '{}'", keyspace);
    Ok(())
}
