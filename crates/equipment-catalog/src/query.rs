//! The query and report suite (`eqcat query`).
//!
//! Reads a snapshot of the catalog from the store, then runs the in-memory
//! filter/sort examples over it: per-kind listings, manufacturer substring
//! search, category equality, horsepower range, recent models, price
//! ranking, the manufacturer directory, and summary statistics.

use anyhow::Result;

use equipment_catalog_core::filter::{contains, equals, filter, sort_by, threshold};
use equipment_catalog_core::models::{ModelKind, ModelRecord};
use equipment_catalog_core::store::CatalogStore;

use crate::report;

/// Run every example query against the store and print the reports.
pub async fn run_queries<S: CatalogStore + ?Sized>(store: &S) -> Result<()> {
    let all = store.list_models(None).await?;

    report::print_header("Query 1: All Models by Kind");
    for kind in ModelKind::all() {
        let of_kind = store.list_models(Some(kind)).await?;
        report::print_models(&of_kind, kind.label());
    }

    report::print_header("Query 2: Models by Manufacturer (John Deere)");
    let deere = filter(&all, &contains("manufacturer", "John Deere"))?;
    report::print_models(&deere, "John Deere models");

    report::print_header("Query 3: Row Crop Tractors");
    let tractors = store.list_models(Some(ModelKind::Tractor)).await?;
    let row_crop = filter(&tractors, &equals("category", "Row Crop"))?;
    report::print_models(&row_crop, "Row Crop tractors");

    report::print_header("Query 4: Models Rated 150-400 HP");
    let mid_power = filter(&all, &threshold("rated_power_hp", Some(150.0), Some(400.0)))?;
    report::print_models(&mid_power, "mid-power models");

    report::print_header("Query 5: Newest Models First");
    let newest = sort_by(&all, "model_year", true)?;
    report::print_models(&newest, "models by year");

    report::print_header("Query 6: Models by Base Price (Descending)");
    let by_price = sort_by(&all, "msrp_base_usd", true)?;
    report::print_models(&by_price, "models by price");
    print_price_summary(&by_price);

    report::print_header("Query 7: Manufacturer Directory");
    let manufacturers = store.list_manufacturers().await?;
    report::print_manufacturers(&manufacturers);

    report::print_header("Query 8: Catalog Summary");
    print_summary(store, &all).await?;

    Ok(())
}

fn print_price_summary(records: &[ModelRecord]) {
    let priced: Vec<f64> = records.iter().filter_map(|r| r.msrp_base_usd).collect();
    if priced.is_empty() {
        return;
    }
    let total: f64 = priced.iter().sum();
    println!("Total base MSRP: {}", report::format_usd(total));
    println!(
        "Average base MSRP: {}\n",
        report::format_usd(total / priced.len() as f64)
    );
}

async fn print_summary<S: CatalogStore + ?Sized>(store: &S, all: &[ModelRecord]) -> Result<()> {
    println!("Total model records: {}", all.len());
    for kind in ModelKind::all() {
        let count = store.list_models(Some(kind)).await?.len();
        println!("  - {}: {}", kind.label(), count);
    }
    println!();

    let rated: Vec<f64> = all
        .iter()
        .map(|r| r.rated_power_hp)
        .filter(|hp| *hp > 0.0)
        .collect();
    if !rated.is_empty() {
        let avg = rated.iter().sum::<f64>() / rated.len() as f64;
        println!("Power summary:");
        println!("  - Average rated power: {avg:.0} HP");
        println!(
            "  - Range: {:.0}-{:.0} HP",
            rated.iter().cloned().fold(f64::INFINITY, f64::min),
            rated.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
        );
        println!();
    }

    Ok(())
}
