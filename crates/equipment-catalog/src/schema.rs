//! Schema-graph class definitions for the model catalog.
//!
//! These JSON documents mirror the fields of
//! [`ModelRecord`](equipment_catalog_core::models::ModelRecord) and
//! [`ManufacturerRecord`](equipment_catalog_core::models::ManufacturerRecord).
//! The shared model fields live on an abstract `EquipmentModel` class that
//! the five concrete classes inherit.
//!
//! The classes are registered in two steps: `eqcat init` loads the base
//! set (manufacturers, tractors, combines, construction equipment), and
//! `eqcat evolve` later adds the baler classes to the live database to
//! demonstrate that new classes are a non-breaking change.

use serde_json::{json, Value};

/// Classes registered at bootstrap, in dependency order.
pub fn base_class_definitions() -> Vec<Value> {
    vec![
        json!({
            "@type": "Class",
            "@id": "ManufacturerCatalog",
            "name": "xsd:string",
            "country": "xsd:string",
            "founded_year": { "@type": "Optional", "@class": "xsd:integer" },
            "headquarters": { "@type": "Optional", "@class": "xsd:string" },
            "website": { "@type": "Optional", "@class": "xsd:string" },
            "product_categories": { "@type": "Optional", "@class": "xsd:string" },
        }),
        json!({
            "@type": "Class",
            "@id": "EquipmentModel",
            "@abstract": [],
            "manufacturer": "xsd:string",
            "model_name": "xsd:string",
            "model_year": "xsd:integer",
            "series": { "@type": "Optional", "@class": "xsd:string" },
            "rated_power_hp": "xsd:decimal",
            "category": { "@type": "Optional", "@class": "xsd:string" },
            "transmission_type": { "@type": "Optional", "@class": "xsd:string" },
            "four_wheel_drive": "xsd:boolean",
            "msrp_base_usd": { "@type": "Optional", "@class": "xsd:decimal" },
        }),
        json!({
            "@type": "Class",
            "@id": "TractorModel",
            "@inherits": "EquipmentModel",
        }),
        json!({
            "@type": "Class",
            "@id": "CombineModel",
            "@inherits": "EquipmentModel",
        }),
        json!({
            "@type": "Class",
            "@id": "ConstructionEquipmentModel",
            "@inherits": "EquipmentModel",
        }),
    ]
}

/// Classes added to an already-populated database by `eqcat evolve`.
pub fn baler_class_definitions() -> Vec<Value> {
    vec![
        json!({
            "@type": "Class",
            "@id": "RoundBalerModel",
            "@inherits": "EquipmentModel",
        }),
        json!({
            "@type": "Class",
            "@id": "SquareBalerModel",
            "@inherits": "EquipmentModel",
        }),
    ]
}

/// Every class the fully evolved catalog carries.
pub fn class_definitions() -> Vec<Value> {
    let mut classes = base_class_definitions();
    classes.extend(baler_class_definitions());
    classes
}

#[cfg(test)]
mod tests {
    use super::*;
    use equipment_catalog_core::models::ModelKind;

    #[test]
    fn every_model_kind_has_a_class() {
        let classes = class_definitions();
        for kind in ModelKind::all() {
            assert!(
                classes
                    .iter()
                    .any(|c| c["@id"] == kind.type_name() && c["@type"] == "Class"),
                "missing class for {}",
                kind.type_name()
            );
        }
    }

    #[test]
    fn baler_classes_are_the_evolution_step() {
        let base = base_class_definitions();
        let balers = baler_class_definitions();
        assert!(base.iter().all(|c| !c["@id"]
            .as_str()
            .map_or(false, |id| id.contains("Baler"))));
        assert_eq!(balers.len(), 2);
        assert!(balers
            .iter()
            .all(|c| c["@id"].as_str().map_or(false, |id| id.contains("Baler"))));
        assert_eq!(class_definitions().len(), base.len() + balers.len());
    }

    #[test]
    fn concrete_classes_inherit_shared_fields() {
        let classes = class_definitions();
        let base = classes
            .iter()
            .find(|c| c["@id"] == "EquipmentModel")
            .unwrap();
        assert_eq!(base["rated_power_hp"], "xsd:decimal");
        for kind in ModelKind::all() {
            let class = classes
                .iter()
                .find(|c| c["@id"] == kind.type_name())
                .unwrap();
            assert_eq!(class["@inherits"], "EquipmentModel");
        }
    }
}
