//! Sample catalog data.
//!
//! Reference model configurations (not individual machines) covering five
//! manufacturers and all five model classes. The baler records are held
//! back from the initial seed and loaded by the schema evolution
//! walkthrough, after their classes are registered. The fixture
//! constructors are pure so the integration tests can load the same
//! catalog into a
//! [`MemoryStore`](equipment_catalog_core::store::memory::MemoryStore).

use anyhow::Result;

use equipment_catalog_core::models::{ManufacturerRecord, ModelKind, ModelRecord};
use equipment_catalog_core::store::CatalogStore;

/// The five manufacturers in the reference catalog.
pub fn manufacturers() -> Vec<ManufacturerRecord> {
    vec![
        manufacturer(
            "John Deere",
            "United States",
            1837,
            "Moline, Illinois",
            "https://www.deere.com",
            "Tractors, Combines, Construction Equipment, Hay Equipment",
        ),
        manufacturer(
            "Case IH",
            "United States",
            1842,
            "Racine, Wisconsin",
            "https://www.caseih.com",
            "Tractors, Combines, Hay Equipment",
        ),
        manufacturer(
            "New Holland",
            "United States",
            1895,
            "New Holland, Pennsylvania",
            "https://www.newholland.com",
            "Tractors, Combines, Hay Equipment, Construction Equipment",
        ),
        manufacturer(
            "Kubota",
            "Japan",
            1890,
            "Osaka, Japan",
            "https://www.kubota.com",
            "Tractors, Construction Equipment, Utility Vehicles",
        ),
        manufacturer(
            "Caterpillar",
            "United States",
            1925,
            "Peoria, Illinois",
            "https://www.cat.com",
            "Construction Equipment, Mining Equipment, Engines",
        ),
    ]
}

/// Model records loaded by `eqcat seed`: every launch kind except the
/// balers, which arrive later via `eqcat evolve`.
pub fn initial_models() -> Vec<ModelRecord> {
    vec![
        // Tractors
        model(
            ModelKind::Tractor,
            "John Deere",
            "8R 370",
            2024,
            Some("8R Series"),
            370.0,
            Some("Row Crop"),
            Some("Infinitely Variable"),
            true,
            Some(385_000.0),
        ),
        model(
            ModelKind::Tractor,
            "Case IH",
            "Magnum 340",
            2024,
            Some("Magnum Series"),
            340.0,
            Some("Row Crop"),
            Some("Continuously Variable"),
            true,
            Some(340_000.0),
        ),
        model(
            ModelKind::Tractor,
            "Kubota",
            "M7-152",
            2024,
            Some("M7 Series"),
            152.0,
            Some("Utility"),
            Some("Hydrostatic"),
            true,
            Some(125_000.0),
        ),
        // Combines
        model(
            ModelKind::Combine,
            "John Deere",
            "S780",
            2024,
            Some("S-Series"),
            473.0,
            None,
            None,
            false,
            Some(485_000.0),
        ),
        model(
            ModelKind::Combine,
            "Case IH",
            "8250 Axial-Flow",
            2024,
            Some("Axial-Flow 250 Series"),
            543.0,
            None,
            None,
            false,
            Some(565_000.0),
        ),
        // Construction equipment
        model(
            ModelKind::Construction,
            "Caterpillar",
            "320 Excavator",
            2024,
            None,
            158.0,
            Some("Excavator"),
            None,
            false,
            Some(185_000.0),
        ),
        model(
            ModelKind::Construction,
            "Caterpillar",
            "D6T Dozer",
            2024,
            None,
            270.0,
            Some("Dozer"),
            None,
            false,
            Some(275_000.0),
        ),
    ]
}

/// Baler records inserted once the baler classes are registered.
/// Balers are rated by recommended PTO power.
pub fn baler_models() -> Vec<ModelRecord> {
    vec![
        model(
            ModelKind::RoundBaler,
            "John Deere",
            "569 Premium",
            2024,
            None,
            100.0,
            Some("Round"),
            None,
            false,
            Some(55_000.0),
        ),
        model(
            ModelKind::SquareBaler,
            "Case IH",
            "LB436",
            2024,
            None,
            140.0,
            Some("Large Square"),
            None,
            false,
            Some(145_000.0),
        ),
    ]
}

/// All model records in the fully evolved reference catalog.
pub fn models() -> Vec<ModelRecord> {
    let mut records = initial_models();
    records.extend(baler_models());
    records
}

fn manufacturer(
    name: &str,
    country: &str,
    founded_year: i32,
    headquarters: &str,
    website: &str,
    product_categories: &str,
) -> ManufacturerRecord {
    ManufacturerRecord {
        id: String::new(),
        name: name.to_string(),
        country: country.to_string(),
        founded_year: Some(founded_year),
        headquarters: Some(headquarters.to_string()),
        website: Some(website.to_string()),
        product_categories: Some(product_categories.to_string()),
    }
}

#[allow(clippy::too_many_arguments)]
fn model(
    kind: ModelKind,
    manufacturer: &str,
    model_name: &str,
    model_year: i32,
    series: Option<&str>,
    rated_power_hp: f64,
    category: Option<&str>,
    transmission_type: Option<&str>,
    four_wheel_drive: bool,
    msrp_base_usd: Option<f64>,
) -> ModelRecord {
    ModelRecord {
        id: String::new(),
        kind,
        manufacturer: manufacturer.to_string(),
        model_name: model_name.to_string(),
        model_year,
        series: series.map(str::to_string),
        rated_power_hp,
        category: category.map(str::to_string),
        transmission_type: transmission_type.map(str::to_string),
        four_wheel_drive,
        msrp_base_usd,
    }
}

/// Load the reference catalog into a store.
pub async fn run_seed<S: CatalogStore + ?Sized>(store: &S) -> Result<()> {
    println!("Loading manufacturers...");
    let mfrs = manufacturers();
    store.insert_manufacturers(&mfrs).await?;
    for m in &mfrs {
        println!("  + {}", m.name);
    }

    println!("\nLoading model records...");
    let records = initial_models();
    let ids = store.insert_models(&records).await?;
    for (record, id) in records.iter().zip(ids.iter()) {
        println!(
            "  + {} {} ({})",
            record.manufacturer, record.model_name, id
        );
    }

    println!(
        "\nSeeded {} manufacturers and {} model records.",
        mfrs.len(),
        records.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_model_kind() {
        let records = models();
        for kind in ModelKind::all() {
            assert!(
                records.iter().any(|r| r.kind == kind),
                "no seed record of kind {}",
                kind.type_name()
            );
        }
    }

    #[test]
    fn balers_are_held_back_for_schema_evolution() {
        let baler_kinds = [ModelKind::RoundBaler, ModelKind::SquareBaler];
        assert!(initial_models()
            .iter()
            .all(|r| !baler_kinds.contains(&r.kind)));
        assert!(baler_models().iter().all(|r| baler_kinds.contains(&r.kind)));
        assert_eq!(
            models().len(),
            initial_models().len() + baler_models().len()
        );
    }

    #[test]
    fn seed_records_have_no_preassigned_ids() {
        assert!(models().iter().all(|r| r.id.is_empty()));
        assert!(manufacturers().iter().all(|m| m.id.is_empty()));
    }

    #[test]
    fn every_model_names_a_seeded_manufacturer() {
        let names: Vec<String> = manufacturers().into_iter().map(|m| m.name).collect();
        for record in models() {
            assert!(
                names.contains(&record.manufacturer),
                "{} references unknown manufacturer {}",
                record.model_name,
                record.manufacturer
            );
        }
    }
}
