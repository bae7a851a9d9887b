//! Similarity search (`eqcat similar`).
//!
//! Resolves a reference model by id or model name, narrows the candidate
//! set to records of the same kind (comparing a tractor against balers is
//! meaningless), ranks the candidates with the weighted similarity score,
//! and prints the best matches.

use anyhow::{bail, Result};

use equipment_catalog_core::models::ModelRecord;
use equipment_catalog_core::rank::{rank, RankedModel};
use equipment_catalog_core::store::CatalogStore;

use crate::report;

/// Rank the catalog against a reference and return the top `limit` entries.
///
/// `selector` is either a document id (`TractorModel/...`) or a
/// case-insensitive model name.
pub async fn find_similar<S: CatalogStore + ?Sized>(
    store: &S,
    selector: &str,
    limit: usize,
) -> Result<(ModelRecord, Vec<RankedModel>)> {
    let all = store.list_models(None).await?;

    let reference = all
        .iter()
        .find(|r| r.id == selector)
        .or_else(|| {
            all.iter()
                .find(|r| r.model_name.eq_ignore_ascii_case(selector))
        })
        .cloned();
    let Some(reference) = reference else {
        bail!("no model matches '{selector}' by id or name");
    };

    let candidates: Vec<ModelRecord> = all
        .into_iter()
        .filter(|r| r.kind == reference.kind)
        .collect();

    let mut ranked = rank(&reference, &candidates);
    ranked.truncate(limit);
    Ok((reference, ranked))
}

/// CLI entry point — ranks and prints the report.
pub async fn run_similar<S: CatalogStore + ?Sized>(
    store: &S,
    selector: &str,
    limit: usize,
) -> Result<()> {
    let (reference, ranked) = find_similar(store, selector, limit).await?;
    report::print_header(&format!(
        "Models Similar to {} {}",
        reference.manufacturer, reference.model_name
    ));
    report::print_ranked(&reference, &ranked);
    Ok(())
}
