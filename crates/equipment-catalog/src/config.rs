//! TOML configuration parsing and validation.
//!
//! Everything the CLI needs to reach the database server lives in one
//! file (default `./config/eqcat.toml`); see `config/eqcat.example.toml`
//! for a full example. Absent sections fall back to the stock local
//! TerminusDB setup (`http://localhost:6363`, admin/root).

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub db: DbConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub bench: BenchConfig,
}

/// Connection settings for the TerminusDB server.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default = "default_key")]
    pub key: String,
    #[serde(default = "default_org")]
    pub org: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            user: default_user(),
            key: default_key(),
            org: default_org(),
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:6363".to_string()
}
fn default_user() -> String {
    "admin".to_string()
}
fn default_key() -> String {
    "root".to_string()
}
fn default_org() -> String {
    "admin".to_string()
}

/// Target database identity and descriptive metadata.
#[derive(Debug, Deserialize, Clone)]
pub struct DbConfig {
    #[serde(default = "default_db_name")]
    pub name: String,
    #[serde(default = "default_db_label")]
    pub label: String,
    #[serde(default = "default_db_description")]
    pub description: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            name: default_db_name(),
            label: default_db_label(),
            description: default_db_description(),
        }
    }
}

fn default_db_name() -> String {
    "equipment_model_catalog".to_string()
}
fn default_db_label() -> String {
    "Equipment Model Catalog".to_string()
}
fn default_db_description() -> String {
    "A reference database for equipment model configurations, specifications, and variants"
        .to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct RankingConfig {
    /// How many similar models `eqcat similar` prints by default.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
        }
    }
}

fn default_top_k() -> usize {
    3
}

/// Concurrent read harness settings.
#[derive(Debug, Deserialize, Clone)]
pub struct BenchConfig {
    #[serde(default = "default_workers")]
    pub workers: usize,
    #[serde(default = "default_operations")]
    pub operations: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            operations: default_operations(),
        }
    }
}

fn default_workers() -> usize {
    10
}
fn default_operations() -> usize {
    20
}

/// Load and validate a configuration file.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    if config.server.endpoint.trim().is_empty() {
        bail!("config error: server.endpoint must not be empty");
    }
    if config.db.name.trim().is_empty() {
        bail!("config error: db.name must not be empty");
    }
    if config.ranking.top_k == 0 {
        bail!("config error: ranking.top_k must be at least 1");
    }
    if config.bench.workers == 0 || config.bench.operations == 0 {
        bail!("config error: bench.workers and bench.operations must be at least 1");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("eqcat.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn empty_file_falls_back_to_defaults() {
        let (_dir, path) = write_config("");
        let config = load_config(&path).unwrap();
        assert_eq!(config.server.endpoint, "http://localhost:6363");
        assert_eq!(config.db.name, "equipment_model_catalog");
        assert_eq!(config.ranking.top_k, 3);
        assert_eq!(config.bench.workers, 10);
    }

    #[test]
    fn partial_overrides_apply() {
        let (_dir, path) = write_config(
            r#"
[server]
endpoint = "http://db.internal:6363"

[bench]
workers = 4
"#,
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.server.endpoint, "http://db.internal:6363");
        assert_eq!(config.server.user, "admin");
        assert_eq!(config.bench.workers, 4);
        assert_eq!(config.bench.operations, 20);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let (_dir, path) = write_config("[ranking]\ntop_k = 0\n");
        assert!(load_config(&path).is_err());

        let (_dir, path) = write_config("[server]\nendpoint = \"\"\n");
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn missing_file_is_a_readable_error() {
        let err = load_config(Path::new("/nonexistent/eqcat.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
