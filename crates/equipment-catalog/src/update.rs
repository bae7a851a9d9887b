//! Add/replace/delete walkthrough (`eqcat update`).
//!
//! Exercises the store's write operations end to end: insert a new
//! manufacturer and model, verify the insert by reading it back, replace
//! the record with updated pricing, and finally delete it again. The
//! catalog is left in its original state on success.

use anyhow::{bail, Result};

use equipment_catalog_core::models::{ManufacturerRecord, ModelKind, ModelRecord};
use equipment_catalog_core::store::CatalogStore;

use crate::report;

pub async fn run_update<S: CatalogStore + ?Sized>(store: &S) -> Result<()> {
    report::print_header("Update Example 1: Add a Manufacturer");
    let manufacturer = ManufacturerRecord {
        id: String::new(),
        name: "Massey Ferguson".to_string(),
        country: "United States".to_string(),
        founded_year: Some(1953),
        headquarters: Some("Duluth, Georgia".to_string()),
        website: Some("https://www.masseyferguson.com".to_string()),
        product_categories: Some("Tractors, Hay Equipment".to_string()),
    };
    store
        .insert_manufacturers(std::slice::from_ref(&manufacturer))
        .await?;
    println!("Added manufacturer: {}", manufacturer.name);

    report::print_header("Update Example 2: Add a Tractor Model");
    let record = ModelRecord {
        id: String::new(),
        kind: ModelKind::Tractor,
        manufacturer: "Massey Ferguson".to_string(),
        model_name: "8S.265".to_string(),
        model_year: 2024,
        series: Some("8S Series".to_string()),
        rated_power_hp: 265.0,
        category: Some("Row Crop".to_string()),
        transmission_type: Some("Continuously Variable".to_string()),
        four_wheel_drive: true,
        msrp_base_usd: Some(295_000.0),
    };
    let ids = store.insert_models(std::slice::from_ref(&record)).await?;
    let id = ids
        .first()
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("insert returned no document id"))?;
    println!("Added model: {} {} ({id})", record.manufacturer, record.model_name);

    println!("\nVerifying insert...");
    let Some(mut stored) = store.get_model(&id).await? else {
        bail!("inserted model {id} not found on read-back");
    };
    println!(
        "  Found {} {} — {} HP, MSRP {}",
        stored.manufacturer,
        stored.model_name,
        stored.rated_power_hp,
        stored
            .msrp_base_usd
            .map(report::format_usd)
            .unwrap_or_else(|| "n/a".to_string()),
    );

    report::print_header("Update Example 3: Replace with New Pricing");
    stored.msrp_base_usd = Some(305_000.0);
    store.replace_model(&stored).await?;
    let Some(replaced) = store.get_model(&id).await? else {
        bail!("replaced model {id} not found on read-back");
    };
    if replaced.msrp_base_usd != Some(305_000.0) {
        bail!("replace did not persist the new price for {id}");
    }
    println!(
        "Updated MSRP to {}",
        report::format_usd(305_000.0)
    );

    report::print_header("Update Example 4: Delete the Model");
    if !store.delete_model(&id).await? {
        bail!("delete reported no matching document for {id}");
    }
    if store.get_model(&id).await?.is_some() {
        bail!("model {id} still present after delete");
    }
    println!("Deleted {id}");
    println!("\nAll update examples completed.");

    Ok(())
}
