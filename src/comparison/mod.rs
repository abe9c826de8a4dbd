// src/comparison/mod.rs

//! Aligns two measurement distributions and scores their overlap.
//!
//! The entry point is [`compare_distributions`]. It never fails: an empty or
//! zero-total side simply contributes all-zero probabilities.

mod report;

pub use report::{ComparisonReport, StateComparison};

use crate::distribution::MeasurementDistribution;
use std::collections::BTreeSet;

/// Sorted union of the labels of `a` and `b`.
///
/// Lexicographic order is the canonical display order; identical inputs
/// always produce the identical sequence.
pub fn aligned_labels<'a>(a: &'a MeasurementDistribution, b: &'a MeasurementDistribution) -> Vec<&'a str> {
    let union: BTreeSet<&str> = a.labels().chain(b.labels()).collect();
    union.into_iter().collect()
}

/// Classical fidelity: `Σ min(p_A(x), p_B(x))` over the aligned labels.
///
/// This is the overlap of the two probability mass functions (one minus the
/// total-variation distance), not the quantum state fidelity. Range `[0, 1]`.
pub fn classical_fidelity(a: &MeasurementDistribution, b: &MeasurementDistribution) -> f64 {
    aligned_labels(a, b)
        .into_iter()
        .map(|label| a.probability(label).min(b.probability(label)))
        .sum()
}

/// Compares distribution `a` (reference, e.g. simulator) against `b`
/// (observed, e.g. hardware).
///
/// Each aligned label gets its probability under both sides and the signed
/// difference `p_B - p_A`. The report also carries both raw totals and the
/// classical fidelity.
pub fn compare_distributions(a: &MeasurementDistribution, b: &MeasurementDistribution) -> ComparisonReport {
    let rows: Vec<StateComparison> = aligned_labels(a, b)
        .into_iter()
        .map(|label| {
            let probability_a = a.probability(label);
            let probability_b = b.probability(label);
            StateComparison {
                label: label.to_string(),
                count_a: a.count(label),
                count_b: b.count(label),
                probability_a,
                probability_b,
                difference: probability_b - probability_a,
            }
        })
        .collect();

    // Same sum as classical_fidelity, reusing the probabilities already computed
    let fidelity: f64 = rows.iter().map(|row| row.probability_a.min(row.probability_b)).sum();

    ComparisonReport::new(rows, a.total(), b.total(), fidelity)
}
