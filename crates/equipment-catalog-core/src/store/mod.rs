//! Storage abstraction for the equipment catalog.
//!
//! The [`CatalogStore`] trait is the black-box document-database surface
//! the demos exercise: insert, list, get, replace, and delete. The hosted
//! backend (TerminusDB over HTTP) and the in-memory store both implement
//! it, so reports, ranking demos, and the load harness run unchanged
//! against either.
//!
//! Implementations must be `Send + Sync` to work with async runtimes.
//!
//! # Operations
//!
//! | Method | Purpose |
//! |--------|---------|
//! | [`insert_models`](CatalogStore::insert_models) | Insert model records, assigning ids |
//! | [`list_models`](CatalogStore::list_models) | List records, optionally by kind |
//! | [`get_model`](CatalogStore::get_model) | Fetch one record by id |
//! | [`replace_model`](CatalogStore::replace_model) | Replace an existing record |
//! | [`delete_model`](CatalogStore::delete_model) | Delete a record by id |
//! | [`insert_manufacturers`](CatalogStore::insert_manufacturers) | Insert manufacturer entries |
//! | [`list_manufacturers`](CatalogStore::list_manufacturers) | List manufacturer entries |

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{ManufacturerRecord, ModelKind, ModelRecord};

/// Abstract document store for catalog records.
///
/// Listing preserves insertion order so that the order-sensitive filter
/// and ranking guarantees (stable subsets, tie order) are observable end
/// to end.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Insert model records and return their ids.
    ///
    /// Records inserted without an id are assigned one of the form
    /// `<Type>/<uuid>`.
    async fn insert_models(&self, models: &[ModelRecord]) -> Result<Vec<String>>;

    /// List model records, optionally restricted to one kind.
    async fn list_models(&self, kind: Option<ModelKind>) -> Result<Vec<ModelRecord>>;

    /// Fetch one model record by id.
    async fn get_model(&self, id: &str) -> Result<Option<ModelRecord>>;

    /// Replace an existing record. Errors when the id is not present.
    async fn replace_model(&self, model: &ModelRecord) -> Result<()>;

    /// Delete a record by id. Returns `false` when nothing matched.
    async fn delete_model(&self, id: &str) -> Result<bool>;

    /// Insert manufacturer entries and return their ids.
    async fn insert_manufacturers(
        &self,
        manufacturers: &[ManufacturerRecord],
    ) -> Result<Vec<String>>;

    /// List manufacturer entries in insertion order.
    async fn list_manufacturers(&self) -> Result<Vec<ManufacturerRecord>>;
}
