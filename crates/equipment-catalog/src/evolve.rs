//! Schema evolution walkthrough (`eqcat evolve`).
//!
//! Adding new document classes to a populated database is a non-breaking
//! change: existing records stay intact and queryable while records of
//! the new classes load alongside them. This command registers the baler
//! classes against the live database, inserts the baler records, and
//! verifies every pre-existing record survived unchanged.

use anyhow::{bail, Result};

use equipment_catalog_core::models::ModelKind;
use equipment_catalog_core::store::CatalogStore;

use crate::report;
use crate::schema;
use crate::seed;
use crate::terminus::TerminusClient;

pub async fn run_evolve(client: &TerminusClient) -> Result<()> {
    report::print_header("Schema Evolution: Adding Baler Model Classes");

    let before = client.list_models(None).await?;
    if before.is_empty() {
        bail!("the catalog is empty; run `eqcat seed` before evolving the schema");
    }
    println!("Records before evolution: {}", before.len());

    let classes = schema::baler_class_definitions();
    client.insert_schema(&classes).await?;
    println!("Registered {} new schema classes", classes.len());

    println!("\nLoading baler records...");
    let balers = seed::baler_models();
    let ids = client.insert_models(&balers).await?;
    for (record, id) in balers.iter().zip(ids.iter()) {
        println!("  + {} {} ({})", record.manufacturer, record.model_name, id);
    }

    let after = client.list_models(None).await?;
    for prior in &before {
        match after.iter().find(|r| r.id == prior.id) {
            Some(current) if current == prior => {}
            Some(_) => bail!("record {} changed during schema evolution", prior.id),
            None => bail!("record {} disappeared during schema evolution", prior.id),
        }
    }
    println!(
        "\nAll {} pre-existing records survived unchanged.",
        before.len()
    );

    println!("\nEquipment counts by kind:");
    for kind in ModelKind::all() {
        let count = after.iter().filter(|r| r.kind == kind).count();
        println!("  - {}: {}", kind.label(), count);
    }

    Ok(())
}
