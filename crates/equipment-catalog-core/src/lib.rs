//! # Equipment Catalog Core
//!
//! Shared logic for the equipment model catalog: the typed data model,
//! the weighted similarity ranker, field-level filtering and sorting,
//! the store abstraction, and an in-memory store.
//!
//! This crate contains no tokio, network, or filesystem dependencies.
//! Ranking and filtering are pure functions over immutable snapshots,
//! so concurrent invocation behaves identically to sequential use.

pub mod filter;
pub mod models;
pub mod rank;
pub mod store;
