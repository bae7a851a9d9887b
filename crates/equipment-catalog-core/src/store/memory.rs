//! In-memory [`CatalogStore`] implementation for tests and offline demos.
//!
//! Records live in `Vec`s behind `std::sync::RwLock`, preserving insertion
//! order. Reads take shared locks, so concurrent read-heavy workloads (the
//! load harness) proceed without blocking each other.

use std::sync::RwLock;

use anyhow::{bail, Result};
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{ManufacturerRecord, ModelKind, ModelRecord};

use super::CatalogStore;

/// In-memory store with insertion-order listing.
pub struct MemoryStore {
    models: RwLock<Vec<ModelRecord>>,
    manufacturers: RwLock<Vec<ManufacturerRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            models: RwLock::new(Vec::new()),
            manufacturers: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn insert_models(&self, models: &[ModelRecord]) -> Result<Vec<String>> {
        let mut stored = self.models.write().unwrap();
        let mut ids = Vec::with_capacity(models.len());
        for model in models {
            let mut record = model.clone();
            if record.id.is_empty() {
                record.id = format!("{}/{}", record.kind.type_name(), Uuid::new_v4());
            } else if stored.iter().any(|m| m.id == record.id) {
                bail!("document already exists: {}", record.id);
            }
            ids.push(record.id.clone());
            stored.push(record);
        }
        Ok(ids)
    }

    async fn list_models(&self, kind: Option<ModelKind>) -> Result<Vec<ModelRecord>> {
        let stored = self.models.read().unwrap();
        Ok(stored
            .iter()
            .filter(|m| kind.map_or(true, |k| m.kind == k))
            .cloned()
            .collect())
    }

    async fn get_model(&self, id: &str) -> Result<Option<ModelRecord>> {
        let stored = self.models.read().unwrap();
        Ok(stored.iter().find(|m| m.id == id).cloned())
    }

    async fn replace_model(&self, model: &ModelRecord) -> Result<()> {
        let mut stored = self.models.write().unwrap();
        match stored.iter_mut().find(|m| m.id == model.id) {
            Some(existing) => {
                *existing = model.clone();
                Ok(())
            }
            None => bail!("document not found: {}", model.id),
        }
    }

    async fn delete_model(&self, id: &str) -> Result<bool> {
        let mut stored = self.models.write().unwrap();
        let before = stored.len();
        stored.retain(|m| m.id != id);
        Ok(stored.len() < before)
    }

    async fn insert_manufacturers(
        &self,
        manufacturers: &[ManufacturerRecord],
    ) -> Result<Vec<String>> {
        let mut stored = self.manufacturers.write().unwrap();
        let mut ids = Vec::with_capacity(manufacturers.len());
        for manufacturer in manufacturers {
            let mut record = manufacturer.clone();
            if record.id.is_empty() {
                record.id = format!("ManufacturerCatalog/{}", Uuid::new_v4());
            }
            ids.push(record.id.clone());
            stored.push(record);
        }
        Ok(ids)
    }

    async fn list_manufacturers(&self) -> Result<Vec<ManufacturerRecord>> {
        let stored = self.manufacturers.read().unwrap();
        Ok(stored.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(name: &str, kind: ModelKind) -> ModelRecord {
        ModelRecord {
            id: String::new(),
            kind,
            manufacturer: "Case IH".to_string(),
            model_name: name.to_string(),
            model_year: 2024,
            series: None,
            rated_power_hp: 340.0,
            category: Some("Row Crop".to_string()),
            transmission_type: Some("Continuously Variable".to_string()),
            four_wheel_drive: true,
            msrp_base_usd: Some(340_000.0),
        }
    }

    #[tokio::test]
    async fn insert_assigns_typed_ids() {
        let store = MemoryStore::new();
        let ids = store
            .insert_models(&[model("Magnum 340", ModelKind::Tractor)])
            .await
            .unwrap();
        assert_eq!(ids.len(), 1);
        assert!(ids[0].starts_with("TractorModel/"));
    }

    #[tokio::test]
    async fn listing_preserves_insertion_order_and_filters_by_kind() {
        let store = MemoryStore::new();
        store
            .insert_models(&[
                model("Magnum 340", ModelKind::Tractor),
                model("S780", ModelKind::Combine),
                model("M7-152", ModelKind::Tractor),
            ])
            .await
            .unwrap();

        let all = store.list_models(None).await.unwrap();
        let names: Vec<&str> = all.iter().map(|m| m.model_name.as_str()).collect();
        assert_eq!(names, vec!["Magnum 340", "S780", "M7-152"]);

        let tractors = store.list_models(Some(ModelKind::Tractor)).await.unwrap();
        assert_eq!(tractors.len(), 2);
    }

    #[tokio::test]
    async fn replace_updates_in_place() {
        let store = MemoryStore::new();
        let ids = store
            .insert_models(&[model("Magnum 340", ModelKind::Tractor)])
            .await
            .unwrap();

        let mut updated = store.get_model(&ids[0]).await.unwrap().unwrap();
        updated.msrp_base_usd = Some(352_000.0);
        store.replace_model(&updated).await.unwrap();

        let fetched = store.get_model(&ids[0]).await.unwrap().unwrap();
        assert_eq!(fetched.msrp_base_usd, Some(352_000.0));
        assert_eq!(store.list_models(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn replace_missing_id_errors() {
        let store = MemoryStore::new();
        let mut rec = model("Magnum 340", ModelKind::Tractor);
        rec.id = "TractorModel/ghost".to_string();
        assert!(store.replace_model(&rec).await.is_err());
    }

    #[tokio::test]
    async fn delete_reports_whether_anything_matched() {
        let store = MemoryStore::new();
        let ids = store
            .insert_models(&[model("Magnum 340", ModelKind::Tractor)])
            .await
            .unwrap();

        assert!(store.delete_model(&ids[0]).await.unwrap());
        assert!(!store.delete_model(&ids[0]).await.unwrap());
        assert!(store.get_model(&ids[0]).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_explicit_id_rejected() {
        let store = MemoryStore::new();
        let mut rec = model("Magnum 340", ModelKind::Tractor);
        rec.id = "TractorModel/dup".to_string();
        store.insert_models(std::slice::from_ref(&rec)).await.unwrap();
        assert!(store.insert_models(&[rec]).await.is_err());
    }
}
