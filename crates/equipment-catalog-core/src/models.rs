//! Core data models for the equipment catalog.
//!
//! The document database stores loosely-typed JSON documents; these types
//! are the explicit, named-field view of the catalog entries that ranking
//! and filtering operate on. Optional attributes carry documented defaults
//! (`0.0` for horsepower, `false` for the drivetrain flag), so a record
//! missing a field behaves the same everywhere.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// The equipment model families stored in the catalog.
///
/// Serialized as the document class name so records round-trip through
/// the database's `@type` field unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    #[serde(rename = "TractorModel")]
    Tractor,
    #[serde(rename = "CombineModel")]
    Combine,
    #[serde(rename = "RoundBalerModel")]
    RoundBaler,
    #[serde(rename = "SquareBalerModel")]
    SquareBaler,
    #[serde(rename = "ConstructionEquipmentModel")]
    Construction,
}

impl ModelKind {
    /// All model kinds, in catalog listing order.
    pub fn all() -> [ModelKind; 5] {
        [
            ModelKind::Tractor,
            ModelKind::Combine,
            ModelKind::RoundBaler,
            ModelKind::SquareBaler,
            ModelKind::Construction,
        ]
    }

    /// The document class name (`@type`) for this kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            ModelKind::Tractor => "TractorModel",
            ModelKind::Combine => "CombineModel",
            ModelKind::RoundBaler => "RoundBalerModel",
            ModelKind::SquareBaler => "SquareBalerModel",
            ModelKind::Construction => "ConstructionEquipmentModel",
        }
    }

    /// Human-readable plural label for report headings.
    pub fn label(&self) -> &'static str {
        match self {
            ModelKind::Tractor => "Tractors",
            ModelKind::Combine => "Combines",
            ModelKind::RoundBaler => "Round Balers",
            ModelKind::SquareBaler => "Square Balers",
            ModelKind::Construction => "Construction Equipment",
        }
    }
}

/// One equipment model configuration (not an individual machine).
///
/// Records are produced by the store and treated as read-only snapshots by
/// ranking and filtering. The `id` is the stable identity distinguishing a
/// record from all others in a collection; it is empty only before the
/// record has been inserted into a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Document id (`@id`). Assigned by the store on insert.
    #[serde(rename = "@id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Document class (`@type`).
    #[serde(rename = "@type")]
    pub kind: ModelKind,
    pub manufacturer: String,
    pub model_name: String,
    pub model_year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    /// Rated engine power. `0.0` means unknown and disables the horsepower
    /// term when the record is used as a ranking reference.
    #[serde(default)]
    pub rated_power_hp: f64,
    /// Open label set, e.g. "Row Crop", "Utility", "Excavator".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmission_type: Option<String>,
    /// Absent in the source data is treated as `false`.
    #[serde(default)]
    pub four_wheel_drive: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msrp_base_usd: Option<f64>,
}

/// A manufacturer catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManufacturerRecord {
    #[serde(rename = "@id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headquarters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_categories: Option<String>,
}

/// A scalar field value extracted from a record.
///
/// Filtering and sorting work on this view so predicates can name fields
/// by string without reintroducing a dynamic record representation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Flag(bool),
}

impl FieldValue {
    /// Short name used in predicate type-mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Number(_) => "number",
            FieldValue::Flag(_) => "flag",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Number(v as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Flag(v)
    }
}

impl ModelRecord {
    /// Look up a filterable field by name.
    ///
    /// Returns `Ok(None)` when this record does not carry the optional
    /// field. A field name the catalog does not define is a programming
    /// error and fails immediately rather than silently matching nothing.
    pub fn field(&self, name: &str) -> Result<Option<FieldValue>> {
        let value = match name {
            "manufacturer" => Some(FieldValue::Text(self.manufacturer.clone())),
            "model_name" => Some(FieldValue::Text(self.model_name.clone())),
            "model_year" => Some(FieldValue::Number(f64::from(self.model_year))),
            "series" => self.series.clone().map(FieldValue::Text),
            "rated_power_hp" => Some(FieldValue::Number(self.rated_power_hp)),
            "category" => self.category.clone().map(FieldValue::Text),
            "transmission_type" => self.transmission_type.clone().map(FieldValue::Text),
            "four_wheel_drive" => Some(FieldValue::Flag(self.four_wheel_drive)),
            "msrp_base_usd" => self.msrp_base_usd.map(FieldValue::Number),
            other => bail!("unknown catalog field: {other}"),
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tractor() -> ModelRecord {
        ModelRecord {
            id: "TractorModel/1".to_string(),
            kind: ModelKind::Tractor,
            manufacturer: "John Deere".to_string(),
            model_name: "8R 370".to_string(),
            model_year: 2024,
            series: Some("8R Series".to_string()),
            rated_power_hp: 370.0,
            category: Some("Row Crop".to_string()),
            transmission_type: Some("Infinitely Variable".to_string()),
            four_wheel_drive: true,
            msrp_base_usd: Some(385_000.0),
        }
    }

    #[test]
    fn field_lookup_returns_typed_values() {
        let rec = tractor();
        assert_eq!(
            rec.field("rated_power_hp").unwrap(),
            Some(FieldValue::Number(370.0))
        );
        assert_eq!(
            rec.field("category").unwrap(),
            Some(FieldValue::Text("Row Crop".to_string()))
        );
        assert_eq!(
            rec.field("four_wheel_drive").unwrap(),
            Some(FieldValue::Flag(true))
        );
    }

    #[test]
    fn missing_optional_field_is_none() {
        let mut rec = tractor();
        rec.category = None;
        assert_eq!(rec.field("category").unwrap(), None);
    }

    #[test]
    fn unknown_field_fails_fast() {
        let rec = tractor();
        let err = rec.field("grain_tank_capacity").unwrap_err();
        assert!(err.to_string().contains("unknown catalog field"));
    }

    #[test]
    fn record_roundtrips_through_document_json() {
        let rec = tractor();
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"@type\":\"TractorModel\""));
        let back: ModelRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn defaults_apply_for_absent_fields() {
        let json = r#"{
            "@id": "CombineModel/abc",
            "@type": "CombineModel",
            "manufacturer": "John Deere",
            "model_name": "S780",
            "model_year": 2024
        }"#;
        let rec: ModelRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.rated_power_hp, 0.0);
        assert!(!rec.four_wheel_drive);
        assert_eq!(rec.category, None);
    }
}
