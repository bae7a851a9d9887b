//! Weighted similarity ranking over equipment model records.
//!
//! Given a reference model and a list of candidates, every candidate is
//! scored in `[0.0, 1.0]` as a weighted sum of four independent terms and
//! the list is returned best-first. The function is pure and total: it
//! performs no I/O, never fails, and treats malformed records as their
//! documented defaults (horsepower 0, drivetrain flag false).
//!
//! # Scoring
//!
//! | term | weight | rule |
//! |------|--------|------|
//! | horsepower closeness | 0.4 | `max(0, 1 - |ref - cand| / ref)`, 0 when ref is 0 |
//! | category match | 0.3 | exact string equality |
//! | transmission match | 0.2 | exact string equality |
//! | drivetrain match | 0.1 | `four_wheel_drive` flags equal |
//!
//! The weights sum to exactly 1.0, so a spec-identical twin scores 1.0 and
//! a maximally dissimilar candidate scores 0.0. The horsepower term clamps
//! at the floor only; the expression cannot exceed 1 on its own, and an
//! upper clamp would hide a future formula change.

use serde::Serialize;

use crate::models::ModelRecord;

/// Weight of the horsepower-closeness term.
pub const POWER_WEIGHT: f64 = 0.4;
/// Weight of the category match term.
pub const CATEGORY_WEIGHT: f64 = 0.3;
/// Weight of the transmission match term.
pub const TRANSMISSION_WEIGHT: f64 = 0.2;
/// Weight of the drivetrain (4WD flag) match term.
pub const DRIVETRAIN_WEIGHT: f64 = 0.1;

/// A candidate record paired with its similarity score.
#[derive(Debug, Clone, Serialize)]
pub struct RankedModel {
    pub record: ModelRecord,
    /// Similarity to the reference, in `[0.0, 1.0]`.
    pub score: f64,
}

/// Score one candidate against a reference record.
///
/// Both-absent categorical fields count as a match: two records that agree
/// the attribute is unknown are more alike than two that disagree.
pub fn similarity_score(reference: &ModelRecord, candidate: &ModelRecord) -> f64 {
    let mut score = 0.0;

    if reference.rated_power_hp > 0.0 {
        let diff = (reference.rated_power_hp - candidate.rated_power_hp).abs();
        let closeness = (1.0 - diff / reference.rated_power_hp).max(0.0);
        score += closeness * POWER_WEIGHT;
    }

    if reference.category == candidate.category {
        score += CATEGORY_WEIGHT;
    }

    if reference.transmission_type == candidate.transmission_type {
        score += TRANSMISSION_WEIGHT;
    }

    if reference.four_wheel_drive == candidate.four_wheel_drive {
        score += DRIVETRAIN_WEIGHT;
    }

    score
}

/// Rank candidates against a reference, best-first.
///
/// The reference itself is excluded by id equality, never by value
/// equality: a distinct record with identical specs stays in the result
/// (and scores 1.0). Ties keep the candidates' original relative order.
pub fn rank(reference: &ModelRecord, candidates: &[ModelRecord]) -> Vec<RankedModel> {
    let mut ranked: Vec<RankedModel> = candidates
        .iter()
        .filter(|c| reference.id.is_empty() || c.id != reference.id)
        .map(|c| RankedModel {
            record: c.clone(),
            score: similarity_score(reference, c),
        })
        .collect();

    // Vec::sort_by is stable, so equal scores preserve input order.
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked
}
