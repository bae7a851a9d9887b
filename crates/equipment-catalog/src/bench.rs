//! Concurrent read harness (`eqcat bench`).
//!
//! Spawns a pool of tokio tasks that repeatedly run read-then-filter
//! cycles against the store, then reports latency, throughput, and a
//! read-consistency check (every full listing must return the same
//! count). This observes the external database's behavior under
//! concurrent readers; the catalog core itself holds no shared mutable
//! state, so it needs no coordination of its own.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Result};
use tokio::task::JoinSet;

use equipment_catalog_core::filter::{contains, filter, threshold};
use equipment_catalog_core::models::ModelKind;
use equipment_catalog_core::store::CatalogStore;

use crate::report;

/// The three read shapes the harness rotates through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadKind {
    /// Retrieve every model record.
    All,
    /// List tractors, then filter to rated power above 200 HP.
    PowerFilter,
    /// Retrieve everything, then filter by manufacturer substring.
    Manufacturer,
}

impl ReadKind {
    fn for_index(i: usize) -> Self {
        match i % 3 {
            0 => ReadKind::All,
            1 => ReadKind::PowerFilter,
            _ => ReadKind::Manufacturer,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ReadKind::All => "all",
            ReadKind::PowerFilter => "filter_hp",
            ReadKind::Manufacturer => "manufacturer",
        }
    }
}

struct ReadOutcome {
    worker: usize,
    kind: ReadKind,
    result_count: usize,
    elapsed_ms: f64,
    error: Option<String>,
}

async fn read_cycle(store: &dyn CatalogStore, kind: ReadKind) -> Result<usize> {
    match kind {
        ReadKind::All => Ok(store.list_models(None).await?.len()),
        ReadKind::PowerFilter => {
            let tractors = store.list_models(Some(ModelKind::Tractor)).await?;
            Ok(filter(&tractors, &threshold("rated_power_hp", Some(200.0), None))?.len())
        }
        ReadKind::Manufacturer => {
            let all = store.list_models(None).await?;
            Ok(filter(&all, &contains("manufacturer", "John Deere"))?.len())
        }
    }
}

/// Run the harness and print the report. Fails when any read errored or
/// when full listings disagreed on the record count.
pub async fn run_bench(
    store: Arc<dyn CatalogStore>,
    workers: usize,
    operations: usize,
) -> Result<()> {
    report::print_header(&format!(
        "Concurrent Read Harness: {workers} workers x {operations} operations each"
    ));

    let start = Instant::now();
    let mut tasks: JoinSet<Vec<ReadOutcome>> = JoinSet::new();

    for worker in 0..workers {
        let store = Arc::clone(&store);
        tasks.spawn(async move {
            let mut outcomes = Vec::with_capacity(operations);
            for op in 0..operations {
                let kind = ReadKind::for_index(worker + op);
                let began = Instant::now();
                let (result_count, error) = match read_cycle(store.as_ref(), kind).await {
                    Ok(n) => (n, None),
                    Err(e) => (0, Some(e.to_string())),
                };
                outcomes.push(ReadOutcome {
                    worker,
                    kind,
                    result_count,
                    elapsed_ms: began.elapsed().as_secs_f64() * 1000.0,
                    error,
                });
            }
            outcomes
        });
    }

    let mut outcomes = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        outcomes.extend(joined?);
    }
    let total_secs = start.elapsed().as_secs_f64();

    let failures: Vec<&ReadOutcome> = outcomes.iter().filter(|o| o.error.is_some()).collect();
    let successes: Vec<&ReadOutcome> = outcomes.iter().filter(|o| o.error.is_none()).collect();

    println!("Results:");
    println!("  Total operations: {}", outcomes.len());
    println!("  Successful: {}", successes.len());
    println!("  Failed: {}", failures.len());
    println!("  Total time: {:.2}s", total_secs);
    if !successes.is_empty() {
        let avg: f64 =
            successes.iter().map(|o| o.elapsed_ms).sum::<f64>() / successes.len() as f64;
        println!("  Average latency: {avg:.2}ms");
        println!(
            "  Throughput: {:.1} operations/second",
            successes.len() as f64 / total_secs
        );
    }

    println!("\nPer-query latency:");
    for kind in [ReadKind::All, ReadKind::PowerFilter, ReadKind::Manufacturer] {
        let of_kind: Vec<&&ReadOutcome> =
            successes.iter().filter(|o| o.kind == kind).collect();
        if of_kind.is_empty() {
            continue;
        }
        let avg = of_kind.iter().map(|o| o.elapsed_ms).sum::<f64>() / of_kind.len() as f64;
        println!(
            "  {}: {:.2}ms average ({} operations)",
            kind.label(),
            avg,
            of_kind.len()
        );
    }

    for outcome in &failures {
        log::error!(
            "worker {} {} read failed: {}",
            outcome.worker,
            outcome.kind.label(),
            outcome.error.as_deref().unwrap_or("unknown")
        );
    }

    // Every full listing must have seen the same snapshot size.
    let mut full_counts: Vec<usize> = successes
        .iter()
        .filter(|o| o.kind == ReadKind::All)
        .map(|o| o.result_count)
        .collect();
    full_counts.sort_unstable();
    full_counts.dedup();
    let consistent = full_counts.len() <= 1;

    println!();
    println!(
        "{}: read consistency ({} distinct full-listing counts)",
        if consistent { "PASS" } else { "FAIL" },
        full_counts.len().max(1)
    );

    if !failures.is_empty() {
        bail!("{} of {} reads failed", failures.len(), outcomes.len());
    }
    if !consistent {
        bail!("full listings disagreed on the record count: {full_counts:?}");
    }

    println!(
        "PASS: {} concurrent reads completed in {:.2}s",
        outcomes.len(),
        total_secs
    );
    Ok(())
}
