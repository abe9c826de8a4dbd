// tests/comparison_tests.rs

// Import necessary types from the qviz crate
use qviz::{
    classical_fidelity, compare_distributions, MeasurementDistribution, QvizError,
};
use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use std::collections::BTreeMap;

const TEST_TOLERANCE: f64 = 1e-9;

// Helper function to build a distribution from literal pairs
fn counts(pairs: &[(&str, i64)]) -> Result<MeasurementDistribution, QvizError> {
    MeasurementDistribution::from_counts(pairs.iter().map(|(label, count)| (*label, *count)))
}

#[test]
fn test_bell_state_end_to_end() -> Result<(), QvizError> {
    let a = counts(&[("00", 500), ("11", 500)])?;
    let b = counts(&[("00", 480), ("01", 25), ("10", 25), ("11", 470)])?;

    let report = compare_distributions(&a, &b);
    assert_eq!(report.labels().collect::<Vec<_>>(), vec!["00", "01", "10", "11"]);

    let expected_a = [0.5, 0.0, 0.0, 0.5];
    let expected_b = [0.48, 0.025, 0.025, 0.47];
    for (row, (pa, pb)) in report.rows().iter().zip(expected_a.iter().zip(expected_b.iter())) {
        assert_abs_diff_eq!(row.probability_a, *pa, epsilon = TEST_TOLERANCE);
        assert_abs_diff_eq!(row.probability_b, *pb, epsilon = TEST_TOLERANCE);
        assert_abs_diff_eq!(row.difference, pb - pa, epsilon = TEST_TOLERANCE);
    }
    assert_abs_diff_eq!(report.fidelity(), 0.95, epsilon = TEST_TOLERANCE);
    Ok(())
}

#[test]
fn test_identical_distributions_have_unit_fidelity() -> Result<(), QvizError> {
    let a = counts(&[("0", 3), ("1", 7)])?;
    // Same shape, different number of shots
    let b = counts(&[("0", 30), ("1", 70)])?;
    assert_abs_diff_eq!(classical_fidelity(&a, &b), 1.0, epsilon = TEST_TOLERANCE);
    Ok(())
}

#[test]
fn test_comparison_against_empty_never_fails() -> Result<(), QvizError> {
    let a = counts(&[("01", 12)])?;
    let empty = MeasurementDistribution::new();

    let forward = compare_distributions(&a, &empty);
    let backward = compare_distributions(&empty, &a);
    assert_eq!(forward.fidelity(), 0.0);
    assert_eq!(backward.fidelity(), 0.0);
    assert_eq!(forward.total_b(), 0);
    assert_eq!(backward.rows()[0].difference, 1.0);
    Ok(())
}

#[test]
fn test_negative_counts_rejected_at_construction() {
    let result = counts(&[("0", 5), ("1", -2)]);
    match result {
        Err(QvizError::Validation { label, message }) => {
            assert_eq!(label, "1");
            assert!(message.contains("negative"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_report_is_reproducible() -> Result<(), QvizError> {
    let a = counts(&[("110", 4), ("001", 9), ("011", 1)])?;
    let b = counts(&[("111", 2), ("001", 3)])?;
    let first = compare_distributions(&a, &b);
    let second = compare_distributions(&a, &b);
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
    Ok(())
}

// --- Property-based tests ---

fn distribution_over(labels: &'static [&'static str], min_count: i64) -> impl Strategy<Value = MeasurementDistribution> {
    prop::collection::btree_map(prop::sample::select(labels), min_count..1000i64, 0..=labels.len()).prop_map(
        |map: BTreeMap<&'static str, i64>| {
            MeasurementDistribution::from_counts(map).expect("generated counts are valid")
        },
    )
}

const TWO_QUBIT_LABELS: &[&str] = &["00", "01", "10", "11"];

proptest! {
    #[test]
    fn prop_fidelity_is_symmetric(
        a in distribution_over(TWO_QUBIT_LABELS, 0),
        b in distribution_over(TWO_QUBIT_LABELS, 0),
    ) {
        let ab = classical_fidelity(&a, &b);
        let ba = classical_fidelity(&b, &a);
        prop_assert!((ab - ba).abs() < 1e-12);
        prop_assert!((-1e-12..=1.0 + 1e-12).contains(&ab));
    }

    #[test]
    fn prop_self_fidelity_is_one(a in distribution_over(TWO_QUBIT_LABELS, 0)) {
        prop_assume!(a.total() > 0);
        prop_assert!((classical_fidelity(&a, &a) - 1.0).abs() < TEST_TOLERANCE);
    }

    #[test]
    fn prop_disjoint_support_has_zero_fidelity(
        a in distribution_over(&["00", "01"], 1),
        b in distribution_over(&["10", "11"], 1),
    ) {
        prop_assume!(a.total() > 0 && b.total() > 0);
        prop_assert_eq!(classical_fidelity(&a, &b), 0.0);
    }

    #[test]
    fn prop_probabilities_sum_to_one(
        a in distribution_over(TWO_QUBIT_LABELS, 0),
        b in distribution_over(TWO_QUBIT_LABELS, 0),
    ) {
        let report = compare_distributions(&a, &b);
        let sum_a: f64 = report.rows().iter().map(|r| r.probability_a).sum();
        if a.total() > 0 {
            prop_assert!((sum_a - 1.0).abs() < TEST_TOLERANCE);
        } else {
            prop_assert_eq!(sum_a, 0.0);
        }
        for row in report.rows() {
            prop_assert!((-1.0..=1.0).contains(&row.difference));
        }
    }
}
