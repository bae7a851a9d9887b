//! # Equipment Catalog
//!
//! **Demo and validation harness for a TerminusDB-backed equipment model
//! catalog.**
//!
//! The catalog stores farm and construction equipment model records
//! (tractors, combines, balers, construction machines) plus a manufacturer
//! directory in TerminusDB, and exercises them through a set of reports:
//! filter/sort queries, weighted similarity ranking, document lifecycle
//! walkthroughs, and a concurrent read harness.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐   ┌───────────────────┐   ┌────────────┐
//! │   CLI      │──▶│  CatalogStore     │──▶│ TerminusDB │
//! │  (eqcat)   │   │  (HTTP documents) │   │  server    │
//! └─────┬──────┘   └───────────────────┘   └────────────┘
//!       │
//!       ▼
//! ┌───────────────────────────────┐
//! │ equipment-catalog-core        │
//! │ filter / sort / rank (pure)   │
//! └───────────────────────────────┘
//! ```
//!
//! Storage is behind the [`equipment_catalog_core::store::CatalogStore`]
//! trait: the CLI talks to TerminusDB through [`terminus::TerminusClient`],
//! while tests run the same flows against the in-memory store.
//! Filtering, sorting, and similarity ranking are pure functions in the
//! core crate and always run on a snapshot read from the store.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing and validation |
//! | [`terminus`] | TerminusDB document-API client (`CatalogStore` over HTTP) |
//! | [`schema`] | Class definitions for the catalog's schema graph |
//! | [`init`] | Database bootstrap: ping, recreate, load base schema |
//! | [`seed`] | Reference manufacturers and model records |
//! | [`evolve`] | Schema evolution walkthrough: add baler classes to a live database |
//! | [`query`] | Filter/sort report suite |
//! | [`similar`] | Weighted similarity search and report |
//! | [`update`] | Insert/replace/delete walkthrough |
//! | [`bench`] | Concurrent read harness |
//! | [`report`] | Console report formatting |
//!
//! ## Configuration
//!
//! The CLI is configured via a TOML file (default: `config/eqcat.toml`).
//! See [`config`] for all available options and [`config::load_config`]
//! for validation rules.

pub mod bench;
pub mod config;
pub mod evolve;
pub mod init;
pub mod query;
pub mod report;
pub mod schema;
pub mod seed;
pub mod similar;
pub mod terminus;
pub mod update;

pub use equipment_catalog_core::{filter, models, rank, store};
