//! Student Record Management CLI
//!
//! Connects to a Cassandra/ScyllaDB cluster, ensures the keyspace and the
//! `students` table exist, then drops into an interactive menu for manual
//! CRUD testing.

use clap::Parser;
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::Environment;
use eyre::Result;
use tracing::info;

mod config;
mod format;
mod menu;

use config::Config;
use database::cassandra::{
    check_health, check_health_detailed, connect_from_config_with_retry,
    create_keyspace_if_not_exists, get_cluster_info, use_keyspace,
};
use domain_students::{schema, ScyllaStudentRepository};

#[derive(Parser)]
#[command(name = "registry-cli")]
#[command(about = "Student record management over Cassandra/ScyllaDB")]
struct Cli {
    /// Cassandra contact points, comma-separated (overrides the environment)
    #[arg(short = 'H', long, value_delimiter = ',')]
    contact_points: Option<Vec<String>>,

    /// Keyspace to use (overrides the environment)
    #[arg(short, long)]
    keyspace: Option<String>,

    /// Print cluster health and topology, then exit
    #[arg(long)]
    probe: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(contact_points) = cli.contact_points {
        config.cassandra.contact_points = contact_points;
    }
    if let Some(keyspace) = cli.keyspace {
        config.cassandra.keyspace = Some(keyspace);
    }

    let environment = Environment::from_env();
    init_tracing(&environment);

    info!(
        "Connecting to Cassandra at {:?}",
        config.cassandra.contact_points
    );

    // The session builder would bind to a keyspace that may not exist yet,
    // so connect without one and bind after the bootstrap below.
    let keyspace = config.keyspace().to_string();
    let mut connect_config = config.cassandra.clone();
    connect_config.keyspace = None;

    let session = connect_from_config_with_retry(&connect_config, None)
        .await
        .map_err(|e| eyre::eyre!("Cassandra connection failed: {}", e))?;

    if cli.probe {
        let status = check_health_detailed(&session).await;
        let cluster = get_cluster_info(&session).await?;
        println!(
            "cluster  : {}",
            cluster.cluster_name.as_deref().unwrap_or("-")
        );
        println!(
            "dc/rack  : {}/{}",
            cluster.datacenter.as_deref().unwrap_or("-"),
            cluster.rack.as_deref().unwrap_or("-")
        );
        println!(
            "version  : {}",
            cluster.release_version.as_deref().unwrap_or("-")
        );
        println!("latency  : {}ms", status.latency_ms);
        if check_health(&session).await {
            println!("healthy  : yes");
            return Ok(());
        }
        println!("healthy  : no");
        return Err(eyre::eyre!("health probe failed"));
    }

    create_keyspace_if_not_exists(&session, &keyspace, config.cassandra.replication()).await?;
    use_keyspace(&session, &keyspace).await?;
    schema::ensure_table(&session).await?;

    info!("Keyspace '{}' and table 'students' are ready", keyspace);

    let status = check_health_detailed(&session).await;
    info!(
        latency_ms = status.latency_ms,
        version = status.version.as_deref().unwrap_or("unknown"),
        "Startup health probe"
    );

    let repository = ScyllaStudentRepository::new(session.clone());
    menu::run(&repository).await?;

    info!("Shutting down: closing Cassandra session");
    drop(repository);
    drop(session);

    Ok(())
}
