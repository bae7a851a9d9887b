//! # Equipment Catalog CLI (`eqcat`)
//!
//! The `eqcat` binary drives the TerminusDB-backed equipment model
//! catalog: database bootstrap, seed data, query reports, similarity
//! search, update walkthroughs, and a concurrent read harness.
//!
//! ## Usage
//!
//! ```bash
//! eqcat --config ./config/eqcat.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `eqcat init` | Recreate the catalog database and load the base schema |
//! | `eqcat seed` | Insert the reference manufacturers and model records |
//! | `eqcat evolve` | Add the baler classes to the live database and load their records |
//! | `eqcat query` | Run the filter/sort report suite |
//! | `eqcat similar <model>` | Rank the catalog by similarity to a reference model |
//! | `eqcat update` | Walk through insert, replace, and delete |
//! | `eqcat bench` | Run the concurrent read harness |
//! | `eqcat demo` | init + seed + evolve + query + similar + update, end to end |
//!
//! ## Examples
//!
//! ```bash
//! # Recreate the database and load reference data
//! eqcat init && eqcat seed
//!
//! # Rank tractors against the John Deere 8R 370
//! eqcat similar "8R 370" --limit 3
//!
//! # 10 readers x 20 operations
//! eqcat bench --workers 10 --operations 20
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use equipment_catalog::config::{self, Config};
use equipment_catalog::terminus::TerminusClient;
use equipment_catalog::{bench, evolve, init, query, seed, similar, update};

/// Equipment Catalog CLI — demo and validation harness for a
/// TerminusDB-backed equipment model catalog.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/eqcat.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "eqcat",
    about = "Equipment model catalog demos against TerminusDB",
    version,
    long_about = "eqcat manages a TerminusDB catalog of farm and construction equipment \
    models: schema bootstrap, reference seed data, filter/sort query reports, weighted \
    similarity ranking, document lifecycle walkthroughs, and a concurrent read harness."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/eqcat.toml`. Server connection, database
    /// naming, ranking, and harness settings are read from this file.
    /// A missing file falls back to the defaults (local server,
    /// admin/root credentials).
    #[arg(long, global = true, default_value = "./config/eqcat.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Recreate the catalog database and load the base schema.
    ///
    /// Drops any existing database of the configured name, creates it
    /// fresh, and registers the base equipment model classes in the
    /// schema graph. The demos always start clean; the baler classes
    /// arrive later via `eqcat evolve`.
    Init,

    /// Insert the reference manufacturers and model records.
    Seed,

    /// Add the baler classes to the live database.
    ///
    /// Registers the baler schema classes against the already-populated
    /// database, loads the baler records, and verifies every
    /// pre-existing record survived unchanged. Demonstrates that new
    /// document classes are a non-breaking schema change.
    Evolve,

    /// Run the filter/sort report suite.
    ///
    /// Per-kind listings, manufacturer search, category equality,
    /// horsepower ranges, year and price sorts, the manufacturer
    /// directory, and catalog summary statistics.
    Query,

    /// Rank the catalog by similarity to a reference model.
    ///
    /// The reference is selected by document id (`TractorModel/...`) or
    /// by case-insensitive model name. Only records of the same kind are
    /// considered as candidates.
    Similar {
        /// Reference model: a document id or a model name.
        model: String,

        /// Maximum number of matches to report.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Walk through insert, replace, and delete.
    ///
    /// Adds a manufacturer and a model, verifies each write by reading
    /// it back, and removes the model again.
    Update,

    /// Run the concurrent read harness.
    ///
    /// Spawns reader tasks that issue read-then-filter cycles and
    /// reports latency, throughput, and read consistency.
    Bench {
        /// Number of concurrent reader tasks.
        #[arg(long)]
        workers: Option<usize>,

        /// Operations per reader task.
        #[arg(long)]
        operations: Option<usize>,
    },

    /// Run the full demo: init, seed, schema evolution, query, a
    /// similarity search, and the update walkthrough.
    Demo,
}

async fn run_demo(cfg: &Config, client: &TerminusClient) -> anyhow::Result<()> {
    init::run_init(cfg).await?;
    seed::run_seed(client).await?;
    evolve::run_evolve(client).await?;
    query::run_queries(client).await?;
    similar::run_similar(client, "8R 370", cfg.ranking.top_k).await?;
    update::run_update(client).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let cfg = if cli.config.exists() {
        config::load_config(&cli.config)?
    } else {
        log::info!(
            "config file {} not found, using defaults",
            cli.config.display()
        );
        Config::default()
    };
    let client = TerminusClient::new(&cfg)?;

    match cli.command {
        Commands::Init => {
            init::run_init(&cfg).await?;
        }
        Commands::Seed => {
            seed::run_seed(&client).await?;
        }
        Commands::Evolve => {
            evolve::run_evolve(&client).await?;
        }
        Commands::Query => {
            query::run_queries(&client).await?;
        }
        Commands::Similar { model, limit } => {
            let limit = limit.unwrap_or(cfg.ranking.top_k);
            similar::run_similar(&client, &model, limit).await?;
        }
        Commands::Update => {
            update::run_update(&client).await?;
        }
        Commands::Bench {
            workers,
            operations,
        } => {
            let workers = workers.unwrap_or(cfg.bench.workers);
            let operations = operations.unwrap_or(cfg.bench.operations);
            bench::run_bench(Arc::new(client), workers, operations).await?;
        }
        Commands::Demo => {
            run_demo(&cfg, &client).await?;
        }
    }

    Ok(())
}
