//! End-to-end flows over the in-memory store.
//!
//! These tests load the reference catalog into a `MemoryStore` and run
//! the same store-plus-core paths the CLI commands use, without needing
//! a database server.

use equipment_catalog::models::{ModelKind, ModelRecord};
use equipment_catalog::store::memory::MemoryStore;
use equipment_catalog::store::CatalogStore;
use equipment_catalog::{filter, seed, similar, update};

/// Seed plus the baler records the schema evolution step loads, i.e. the
/// fully evolved catalog.
async fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    seed::run_seed(&store).await.unwrap();
    store.insert_models(&seed::baler_models()).await.unwrap();
    store
}

#[tokio::test]
async fn seeding_assigns_typed_ids() {
    let store = seeded_store().await;

    let models = store.list_models(None).await.unwrap();
    assert_eq!(models.len(), seed::models().len());
    for record in &models {
        assert!(
            record.id.starts_with(record.kind.type_name()),
            "id {} does not carry the {} prefix",
            record.id,
            record.kind.type_name()
        );
    }

    let manufacturers = store.list_manufacturers().await.unwrap();
    assert_eq!(manufacturers.len(), seed::manufacturers().len());
}

#[tokio::test]
async fn listing_by_kind_partitions_the_catalog() {
    let store = seeded_store().await;

    let tractors = store.list_models(Some(ModelKind::Tractor)).await.unwrap();
    assert_eq!(tractors.len(), 3);
    assert!(tractors.iter().all(|r| r.kind == ModelKind::Tractor));

    let mut total = 0;
    for kind in ModelKind::all() {
        total += store.list_models(Some(kind)).await.unwrap().len();
    }
    assert_eq!(total, store.list_models(None).await.unwrap().len());
}

#[tokio::test]
async fn adding_baler_kinds_preserves_existing_records() {
    let store = MemoryStore::new();
    seed::run_seed(&store).await.unwrap();
    let before = store.list_models(None).await.unwrap();
    assert!(before
        .iter()
        .all(|r| r.kind != ModelKind::RoundBaler && r.kind != ModelKind::SquareBaler));

    store.insert_models(&seed::baler_models()).await.unwrap();

    let after = store.list_models(None).await.unwrap();
    assert_eq!(after.len(), before.len() + seed::baler_models().len());
    for prior in &before {
        let current = after.iter().find(|r| r.id == prior.id).unwrap();
        assert_eq!(current, prior);
    }
    assert_eq!(
        store
            .list_models(Some(ModelKind::RoundBaler))
            .await
            .unwrap()
            .len(),
        1
    );
    assert_eq!(
        store
            .list_models(Some(ModelKind::SquareBaler))
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn query_filters_match_the_reference_catalog() {
    let store = seeded_store().await;
    let all = store.list_models(None).await.unwrap();

    let deere = filter::filter(&all, &filter::contains("manufacturer", "John Deere")).unwrap();
    let names: Vec<&str> = deere.iter().map(|r| r.model_name.as_str()).collect();
    assert_eq!(names, ["8R 370", "S780", "569 Premium"]);

    let tractors = store.list_models(Some(ModelKind::Tractor)).await.unwrap();
    let row_crop = filter::filter(&tractors, &filter::equals("category", "Row Crop")).unwrap();
    assert_eq!(row_crop.len(), 2);

    let mid_power = filter::filter(
        &all,
        &filter::threshold("rated_power_hp", Some(150.0), Some(400.0)),
    )
    .unwrap();
    let mid_names: Vec<&str> = mid_power.iter().map(|r| r.model_name.as_str()).collect();
    assert_eq!(
        mid_names,
        ["8R 370", "Magnum 340", "M7-152", "320 Excavator", "D6T Dozer"]
    );
}

#[tokio::test]
async fn price_sort_puts_the_combine_flagship_first() {
    let store = seeded_store().await;
    let all = store.list_models(None).await.unwrap();

    let by_price = filter::sort_by(&all, "msrp_base_usd", true).unwrap();
    assert_eq!(by_price[0].model_name, "8250 Axial-Flow");
    assert_eq!(by_price[1].model_name, "S780");
    // Records without a price sink to the end on a descending sort.
    let priced = by_price
        .iter()
        .take_while(|r| r.msrp_base_usd.is_some())
        .count();
    assert_eq!(priced, by_price.len());
}

#[tokio::test]
async fn similar_ranks_the_magnum_closest_to_the_8r() {
    let store = seeded_store().await;

    let (reference, ranked) = similar::find_similar(&store, "8R 370", 3).await.unwrap();
    assert_eq!(reference.model_name, "8R 370");
    assert_eq!(ranked.len(), 2); // only the other two tractors compete

    assert_eq!(ranked[0].record.model_name, "Magnum 340");
    // hp 0.4*(1-30/370) + category 0.3 + drivetrain 0.1; transmissions differ
    assert!((ranked[0].score - 0.7676).abs() < 1e-3);

    assert_eq!(ranked[1].record.model_name, "M7-152");
    assert!(ranked[1].score < ranked[0].score);
}

#[tokio::test]
async fn similar_resolves_by_document_id() {
    let store = seeded_store().await;
    let all = store.list_models(None).await.unwrap();
    let s780 = all.iter().find(|r| r.model_name == "S780").unwrap();

    let (reference, ranked) = similar::find_similar(&store, &s780.id, 5).await.unwrap();
    assert_eq!(reference.id, s780.id);
    assert!(ranked.iter().all(|e| e.record.kind == ModelKind::Combine));
    assert!(ranked.iter().all(|e| e.record.id != s780.id));
}

#[tokio::test]
async fn similar_rejects_unknown_selectors() {
    let store = seeded_store().await;
    let err = similar::find_similar(&store, "Starship 9000", 3)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Starship 9000"));
}

#[tokio::test]
async fn update_walkthrough_leaves_models_unchanged() {
    let store = seeded_store().await;
    let models_before = store.list_models(None).await.unwrap().len();
    let manufacturers_before = store.list_manufacturers().await.unwrap().len();

    update::run_update(&store).await.unwrap();

    // The model is deleted again; the manufacturer entry remains.
    assert_eq!(store.list_models(None).await.unwrap().len(), models_before);
    assert_eq!(
        store.list_manufacturers().await.unwrap().len(),
        manufacturers_before + 1
    );
}

#[tokio::test]
async fn replace_and_delete_round_trip() {
    let store = seeded_store().await;
    let all = store.list_models(None).await.unwrap();
    let mut record: ModelRecord = all
        .iter()
        .find(|r| r.model_name == "M7-152")
        .unwrap()
        .clone();

    record.msrp_base_usd = Some(130_000.0);
    store.replace_model(&record).await.unwrap();
    let reread = store.get_model(&record.id).await.unwrap().unwrap();
    assert_eq!(reread.msrp_base_usd, Some(130_000.0));

    assert!(store.delete_model(&record.id).await.unwrap());
    assert!(store.get_model(&record.id).await.unwrap().is_none());
    assert!(!store.delete_model(&record.id).await.unwrap());
}
