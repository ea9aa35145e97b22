//! Configuration for the registry CLI

use core_config::FromEnv;
use database::cassandra::CassandraConfig;
use eyre::Result;

/// Keyspace used when neither the environment nor the command line names one.
pub const DEFAULT_KEYSPACE: &str = "student_mgmt";

/// Upper bound for the listing menu option.
pub const LIST_LIMIT: i32 = 100;

#[derive(Debug, Clone)]
pub struct Config {
    pub cassandra: CassandraConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable has a compiled-in default, so the CLI runs against a
    /// local single-node cluster with zero setup.
    pub fn from_env() -> Result<Self> {
        let mut cassandra = <CassandraConfig as FromEnv>::from_env()?;
        if cassandra.keyspace.is_none() {
            cassandra.keyspace = Some(DEFAULT_KEYSPACE.to_string());
        }

        Ok(Self { cassandra })
    }

    /// Keyspace the session is bound to. Always set after `from_env`.
    pub fn keyspace(&self) -> &str {
        self.cassandra.keyspace.as_deref().unwrap_or(DEFAULT_KEYSPACE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars(
            [
                ("CASSANDRA_CONTACT_POINTS", None::<&str>),
                ("CASSANDRA_KEYSPACE", None),
            ],
            || {
                let config = Config::from_env().expect("defaults should load");
                assert_eq!(config.cassandra.contact_points, vec!["127.0.0.1:9042"]);
                assert_eq!(config.keyspace(), DEFAULT_KEYSPACE);
            },
        );
    }

    #[test]
    fn test_config_keyspace_from_env() {
        temp_env::with_var("CASSANDRA_KEYSPACE", Some("campus_records"), || {
            let config = Config::from_env().expect("should load");
            assert_eq!(config.keyspace(), "campus_records");
        });
    }
}
