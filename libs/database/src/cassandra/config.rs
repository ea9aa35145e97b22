use core_config::{ConfigError, FromEnv};

/// Keyspace replication profile applied by `create_keyspace_if_not_exists`.
///
/// Rendered into the `WITH replication = {...}` map literal of the CREATE
/// KEYSPACE statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplicationStrategy {
    /// Single-datacenter profile: one factor for the whole cluster.
    Simple { replication_factor: u32 },

    /// Topology-aware profile: an explicit datacenter -> factor mapping.
    NetworkTopology { datacenters: Vec<(String, u32)> },
}

impl ReplicationStrategy {
    pub fn simple(replication_factor: u32) -> Self {
        Self::Simple { replication_factor }
    }

    pub fn network_topology(datacenters: Vec<(String, u32)>) -> Self {
        Self::NetworkTopology { datacenters }
    }

    /// Render the CQL replication map literal.
    ///
    /// Datacenter names are emitted as CQL string literals; embedded single
    /// quotes are doubled.
    pub fn to_cql(&self) -> String {
        match self {
            Self::Simple { replication_factor } => format!(
                "{{'class': 'SimpleStrategy', 'replication_factor': {}}}",
                replication_factor
            ),
            Self::NetworkTopology { datacenters } => {
                let entries: Vec<String> = datacenters
                    .iter()
                    .map(|(dc, factor)| format!("{}: {}", cql_string_literal(dc), factor))
                    .collect();
                format!(
                    "{{'class': 'NetworkTopologyStrategy', {}}}",
                    entries.join(", ")
                )
            }
        }
    }

    /// Parse a `dc1=3,dc2=2` style datacenter mapping.
    pub fn parse_datacenters(raw: &str) -> Result<Vec<(String, u32)>, String> {
        let mut datacenters = Vec::new();
        for entry in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let (dc, factor) = entry
                .split_once('=')
                .ok_or_else(|| format!("expected 'name=factor', got '{}'", entry))?;
            let dc = dc.trim();
            if dc.is_empty() {
                return Err(format!("empty datacenter name in '{}'", entry));
            }
            let factor: u32 = factor
                .trim()
                .parse()
                .map_err(|_| format!("invalid replication factor in '{}'", entry))?;
            datacenters.push((dc.to_string(), factor));
        }
        if datacenters.is_empty() {
            return Err("no datacenters provided".to_string());
        }
        Ok(datacenters)
    }
}

impl Default for ReplicationStrategy {
    fn default() -> Self {
        Self::Simple {
            replication_factor: 1,
        }
    }
}

fn cql_string_literal(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Cassandra/ScyllaDB connection configuration
///
/// Can be constructed manually, through the builder methods, or loaded from
/// environment variables via [`FromEnv`].
///
/// # Example
///
/// ```ignore
/// use database::cassandra::{CassandraConfig, ReplicationStrategy};
///
/// let config = CassandraConfig::with_keyspace(vec!["127.0.0.1:9042"], "student_mgmt")
///     .with_replication(ReplicationStrategy::simple(3));
/// ```
#[derive(Clone, Debug)]
pub struct CassandraConfig {
    /// Contact points (host:port pairs)
    /// Example: ["127.0.0.1:9042", "127.0.0.2:9042"]
    pub contact_points: Vec<String>,

    /// Keyspace to bind the session to (similar to a database in SQL)
    pub keyspace: Option<String>,

    /// Replication profile used when the keyspace is created
    pub replication: ReplicationStrategy,

    /// Optional username for authentication
    pub username: Option<String>,

    /// Optional password for authentication
    pub password: Option<String>,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl CassandraConfig {
    /// Create a new CassandraConfig with contact points
    pub fn new<S: Into<String>>(contact_points: Vec<S>) -> Self {
        Self {
            contact_points: contact_points.into_iter().map(|s| s.into()).collect(),
            keyspace: None,
            replication: ReplicationStrategy::default(),
            username: None,
            password: None,
            connect_timeout_secs: 10,
        }
    }

    /// Create a CassandraConfig bound to a specific keyspace
    pub fn with_keyspace<S: Into<String>>(
        contact_points: Vec<S>,
        keyspace: impl Into<String>,
    ) -> Self {
        let mut config = Self::new(contact_points);
        config.keyspace = Some(keyspace.into());
        config
    }

    /// Set the replication profile
    pub fn with_replication(mut self, replication: ReplicationStrategy) -> Self {
        self.replication = replication;
        self
    }

    /// Set authentication credentials
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Set connection timeout
    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    pub fn contact_points(&self) -> &[String] {
        &self.contact_points
    }

    pub fn keyspace(&self) -> Option<&str> {
        self.keyspace.as_deref()
    }

    pub fn replication(&self) -> &ReplicationStrategy {
        &self.replication
    }
}

impl Default for CassandraConfig {
    fn default() -> Self {
        Self::new(vec!["127.0.0.1:9042"])
    }
}

/// Load CassandraConfig from environment variables
///
/// Environment variables:
/// - `CASSANDRA_CONTACT_POINTS` (optional, default: "127.0.0.1:9042") -
///   Comma-separated list of contact points
/// - `CASSANDRA_KEYSPACE` (optional) - Keyspace name
/// - `CASSANDRA_REPLICATION_STRATEGY` (optional, default: "simple") -
///   "simple" or "network_topology"
/// - `CASSANDRA_REPLICATION_FACTOR` (optional, default: 1) - Simple profile
///   factor
/// - `CASSANDRA_DATACENTERS` (required for "network_topology") -
///   "dc1=3,dc2=2" style mapping
/// - `CASSANDRA_USERNAME` / `CASSANDRA_PASSWORD` (optional)
/// - `CASSANDRA_CONNECT_TIMEOUT_SECS` (optional, default: 10)
impl FromEnv for CassandraConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let contact_points_str = core_config::env_or_default("CASSANDRA_CONTACT_POINTS", "127.0.0.1:9042");

        let contact_points: Vec<String> = contact_points_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if contact_points.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CASSANDRA_CONTACT_POINTS".to_string(),
                details: "No valid contact points provided".to_string(),
            });
        }

        let keyspace = std::env::var("CASSANDRA_KEYSPACE").ok();
        let username = std::env::var("CASSANDRA_USERNAME").ok();
        let password = std::env::var("CASSANDRA_PASSWORD").ok();

        let strategy = core_config::env_or_default("CASSANDRA_REPLICATION_STRATEGY", "simple");
        let replication = match strategy.to_ascii_lowercase().as_str() {
            "simple" => {
                let factor: u32 = core_config::env_or_default("CASSANDRA_REPLICATION_FACTOR", "1")
                    .parse()
                    .map_err(|e| ConfigError::ParseError {
                        key: "CASSANDRA_REPLICATION_FACTOR".to_string(),
                        details: format!("{}", e),
                    })?;
                ReplicationStrategy::simple(factor)
            }
            "network_topology" => {
                let raw = core_config::env_required("CASSANDRA_DATACENTERS")?;
                let datacenters = ReplicationStrategy::parse_datacenters(&raw).map_err(|details| {
                    ConfigError::ParseError {
                        key: "CASSANDRA_DATACENTERS".to_string(),
                        details,
                    }
                })?;
                ReplicationStrategy::network_topology(datacenters)
            }
            other => {
                return Err(ConfigError::ParseError {
                    key: "CASSANDRA_REPLICATION_STRATEGY".to_string(),
                    details: format!("unknown strategy '{}'", other),
                });
            }
        };

        let connect_timeout_secs = core_config::env_or_default("CASSANDRA_CONNECT_TIMEOUT_SECS", "10")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "CASSANDRA_CONNECT_TIMEOUT_SECS".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self {
            contact_points,
            keyspace,
            replication,
            username,
            password,
            connect_timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cassandra_config_new() {
        let config = CassandraConfig::new(vec!["127.0.0.1:9042"]);
        assert_eq!(config.contact_points, vec!["127.0.0.1:9042"]);
        assert!(config.keyspace.is_none());
        assert_eq!(config.connect_timeout_secs, 10);
        assert_eq!(config.replication, ReplicationStrategy::simple(1));
    }

    #[test]
    fn test_cassandra_config_with_keyspace() {
        let config = CassandraConfig::with_keyspace(vec!["127.0.0.1:9042"], "student_mgmt");
        assert_eq!(config.contact_points, vec!["127.0.0.1:9042"]);
        assert_eq!(config.keyspace, Some("student_mgmt".to_string()));
    }

    #[test]
    fn test_cassandra_config_builder_pattern() {
        let config = CassandraConfig::new(vec!["127.0.0.1:9042"])
            .with_credentials("user", "pass")
            .with_connect_timeout(30)
            .with_replication(ReplicationStrategy::simple(3));

        assert_eq!(config.username, Some("user".to_string()));
        assert_eq!(config.password, Some("pass".to_string()));
        assert_eq!(config.connect_timeout_secs, 30);
        assert_eq!(
            config.replication,
            ReplicationStrategy::Simple {
                replication_factor: 3
            }
        );
    }

    #[test]
    fn test_replication_simple_to_cql() {
        let replication = ReplicationStrategy::simple(3);
        assert_eq!(
            replication.to_cql(),
            "{'class': 'SimpleStrategy', 'replication_factor': 3}"
        );
    }

    #[test]
    fn test_replication_network_topology_to_cql() {
        let replication = ReplicationStrategy::network_topology(vec![
            ("dc1".to_string(), 3),
            ("dc2".to_string(), 2),
        ]);
        assert_eq!(
            replication.to_cql(),
            "{'class': 'NetworkTopologyStrategy', 'dc1': 3, 'dc2': 2}"
        );
    }

    #[test]
    fn test_replication_datacenter_name_is_escaped() {
        let replication =
            ReplicationStrategy::network_topology(vec![("dc'east".to_string(), 1)]);
        assert_eq!(
            replication.to_cql(),
            "{'class': 'NetworkTopologyStrategy', 'dc''east': 1}"
        );
    }

    #[test]
    fn test_parse_datacenters() {
        let datacenters =
            ReplicationStrategy::parse_datacenters("dc1=3, dc2=2").expect("should parse");
        assert_eq!(
            datacenters,
            vec![("dc1".to_string(), 3), ("dc2".to_string(), 2)]
        );
    }

    #[test]
    fn test_parse_datacenters_rejects_malformed() {
        assert!(ReplicationStrategy::parse_datacenters("dc1").is_err());
        assert!(ReplicationStrategy::parse_datacenters("dc1=abc").is_err());
        assert!(ReplicationStrategy::parse_datacenters("=3").is_err());
        assert!(ReplicationStrategy::parse_datacenters("").is_err());
    }

    #[test]
    fn test_cassandra_config_from_env_defaults() {
        temp_env::with_vars(
            [
                ("CASSANDRA_CONTACT_POINTS", None::<&str>),
                ("CASSANDRA_KEYSPACE", None),
                ("CASSANDRA_REPLICATION_STRATEGY", None),
                ("CASSANDRA_REPLICATION_FACTOR", None),
            ],
            || {
                let config = CassandraConfig::from_env().expect("defaults should load");
                assert_eq!(config.contact_points, vec!["127.0.0.1:9042"]);
                assert!(config.keyspace.is_none());
                assert_eq!(config.replication, ReplicationStrategy::simple(1));
            },
        );
    }

    #[test]
    fn test_cassandra_config_from_env() {
        temp_env::with_vars(
            [
                (
                    "CASSANDRA_CONTACT_POINTS",
                    Some("127.0.0.1:9042,127.0.0.2:9042"),
                ),
                ("CASSANDRA_KEYSPACE", Some("student_mgmt")),
                ("CASSANDRA_REPLICATION_STRATEGY", None),
                ("CASSANDRA_REPLICATION_FACTOR", Some("3")),
            ],
            || {
                let config = CassandraConfig::from_env().expect("should load");
                assert_eq!(config.contact_points.len(), 2);
                assert_eq!(config.keyspace, Some("student_mgmt".to_string()));
                assert_eq!(config.replication, ReplicationStrategy::simple(3));
            },
        );
    }

    #[test]
    fn test_cassandra_config_from_env_network_topology() {
        temp_env::with_vars(
            [
                ("CASSANDRA_CONTACT_POINTS", Some("10.0.0.1:9042")),
                (
                    "CASSANDRA_REPLICATION_STRATEGY",
                    Some("network_topology"),
                ),
                ("CASSANDRA_DATACENTERS", Some("dc1=3,dc2=2")),
            ],
            || {
                let config = CassandraConfig::from_env().expect("should load");
                assert_eq!(
                    config.replication,
                    ReplicationStrategy::network_topology(vec![
                        ("dc1".to_string(), 3),
                        ("dc2".to_string(), 2),
                    ])
                );
            },
        );
    }

    #[test]
    fn test_cassandra_config_from_env_network_topology_requires_datacenters() {
        temp_env::with_vars(
            [
                ("CASSANDRA_REPLICATION_STRATEGY", Some("network_topology")),
                ("CASSANDRA_DATACENTERS", None::<&str>),
            ],
            || {
                assert!(CassandraConfig::from_env().is_err());
            },
        );
    }

    #[test]
    fn test_cassandra_config_from_env_unknown_strategy() {
        temp_env::with_var("CASSANDRA_REPLICATION_STRATEGY", Some("everywhere"), || {
            assert!(CassandraConfig::from_env().is_err());
        });
    }
}
