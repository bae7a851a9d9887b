//! Database bootstrap (`eqcat init`).
//!
//! Verifies the server is reachable, drops any previous catalog database
//! so the demo always starts from a clean slate, creates the database,
//! and loads the base schema classes. The baler classes are registered
//! later by `eqcat evolve`.

use anyhow::{Context, Result};

use crate::config::Config;
use crate::schema;
use crate::terminus::TerminusClient;

pub async fn run_init(cfg: &Config) -> Result<()> {
    let client = TerminusClient::new(cfg)?;

    client
        .ping()
        .await
        .with_context(|| format!("server at {} is not reachable", cfg.server.endpoint))?;
    println!("Connected to {}", cfg.server.endpoint);

    if client.database_exists().await? {
        log::info!("database {} already exists, dropping it", cfg.db.name);
        client.delete_database().await?;
        println!("Dropped existing database '{}'", cfg.db.name);
    }

    client
        .create_database(&cfg.db.label, &cfg.db.description)
        .await?;
    println!("Created database '{}'", cfg.db.name);

    let classes = schema::base_class_definitions();
    let count = classes.len();
    client.insert_schema(&classes).await?;
    println!("Loaded schema ({count} classes)");

    Ok(())
}
