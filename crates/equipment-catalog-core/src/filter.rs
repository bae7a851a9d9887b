//! Field-level filtering and sorting of catalog records.
//!
//! Predicates are built with [`equals`], [`threshold`], and [`contains`]
//! and applied with [`filter`]. Filtering is a stable, order-preserving
//! subset operation that never mutates its input; conjunction is sequential
//! application (see [`filter_all`]) — no richer combinator language is
//! provided. Records missing the tested optional field are excluded by
//! `threshold` and `contains`, and fail `equals`.
//!
//! Unknown field names and predicate/field type mismatches are programming
//! errors and fail fast with a descriptive error instead of silently
//! matching nothing.

use std::cmp::Ordering;

use anyhow::{bail, Result};

use crate::models::{FieldValue, ModelRecord};

/// A filtering predicate over a single record field.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// Exact match. Case-insensitive for text fields, exact for numbers
    /// and flags.
    Equals { field: String, value: FieldValue },
    /// Inclusive numeric range. An absent bound leaves that side open.
    Threshold {
        field: String,
        min: Option<f64>,
        max: Option<f64>,
    },
    /// Case-insensitive substring test on a text field.
    Contains { field: String, needle: String },
}

/// Build an equality predicate.
pub fn equals(field: &str, value: impl Into<FieldValue>) -> Predicate {
    Predicate::Equals {
        field: field.to_string(),
        value: value.into(),
    }
}

/// Build an inclusive numeric range predicate.
pub fn threshold(field: &str, min: Option<f64>, max: Option<f64>) -> Predicate {
    Predicate::Threshold {
        field: field.to_string(),
        min,
        max,
    }
}

/// Build a substring predicate.
pub fn contains(field: &str, needle: &str) -> Predicate {
    Predicate::Contains {
        field: field.to_string(),
        needle: needle.to_string(),
    }
}

impl Predicate {
    /// Evaluate this predicate against one record.
    pub fn matches(&self, record: &ModelRecord) -> Result<bool> {
        match self {
            Predicate::Equals { field, value } => {
                let Some(actual) = record.field(field)? else {
                    return Ok(false);
                };
                match (&actual, value) {
                    (FieldValue::Text(a), FieldValue::Text(b)) => {
                        Ok(a.to_lowercase() == b.to_lowercase())
                    }
                    (FieldValue::Number(a), FieldValue::Number(b)) => Ok(a == b),
                    (FieldValue::Flag(a), FieldValue::Flag(b)) => Ok(a == b),
                    _ => bail!(
                        "equals on field `{field}`: record holds {} but predicate supplies {}",
                        actual.type_name(),
                        value.type_name()
                    ),
                }
            }
            Predicate::Threshold { field, min, max } => {
                let Some(actual) = record.field(field)? else {
                    return Ok(false);
                };
                let FieldValue::Number(n) = actual else {
                    bail!(
                        "threshold on field `{field}`: expected a number, found {}",
                        actual.type_name()
                    );
                };
                Ok(min.map_or(true, |lo| n >= lo) && max.map_or(true, |hi| n <= hi))
            }
            Predicate::Contains { field, needle } => {
                let Some(actual) = record.field(field)? else {
                    return Ok(false);
                };
                let FieldValue::Text(t) = actual else {
                    bail!(
                        "contains on field `{field}`: expected text, found {}",
                        actual.type_name()
                    );
                };
                Ok(t.to_lowercase().contains(&needle.to_lowercase()))
            }
        }
    }
}

/// Return the matching subset of `records`, preserving input order.
pub fn filter(records: &[ModelRecord], predicate: &Predicate) -> Result<Vec<ModelRecord>> {
    let mut matched = Vec::new();
    for record in records {
        if predicate.matches(record)? {
            matched.push(record.clone());
        }
    }
    Ok(matched)
}

/// Apply predicates sequentially (logical AND).
pub fn filter_all(records: &[ModelRecord], predicates: &[Predicate]) -> Result<Vec<ModelRecord>> {
    let mut current = records.to_vec();
    for predicate in predicates {
        current = filter(&current, predicate)?;
    }
    Ok(current)
}

/// Return `records` ordered by the given field.
///
/// The sort is stable: records with equal keys keep their relative input
/// order. A missing key sorts as the type's minimum, so such records come
/// first ascending and last descending.
pub fn sort_by(records: &[ModelRecord], key: &str, descending: bool) -> Result<Vec<ModelRecord>> {
    let mut keyed: Vec<(Option<FieldValue>, ModelRecord)> = records
        .iter()
        .map(|r| Ok((r.field(key)?, r.clone())))
        .collect::<Result<_>>()?;

    keyed.sort_by(|(a, _), (b, _)| {
        let ord = cmp_key(a, b);
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });

    Ok(keyed.into_iter().map(|(_, r)| r).collect())
}

fn cmp_key(a: &Option<FieldValue>, b: &Option<FieldValue>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => cmp_value(x, y),
    }
}

fn cmp_value(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Number(x), FieldValue::Number(y)) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        (FieldValue::Text(x), FieldValue::Text(y)) => x.cmp(y),
        (FieldValue::Flag(x), FieldValue::Flag(y)) => x.cmp(y),
        // A single field always yields one variant; mixed comparisons
        // cannot arise from ModelRecord::field.
        _ => Ordering::Equal,
    }
}
