// src/distribution/mod.rs

//! Measurement-count distributions: bitstring outcome -> number of observations.

use crate::core::label::is_bitstring;
use crate::core::{QvizError, Result};
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fmt;

/// Observed measurement counts keyed by bitstring label.
///
/// Invariants checked at construction:
/// - every count is non-negative,
/// - every label is a non-empty string over `{0, 1}`,
/// - all labels share one width.
///
/// Keys are held in a `BTreeMap` so iteration is always in ascending label order.
/// The total may be zero; that is a valid (degenerate) distribution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasurementDistribution {
    counts: BTreeMap<String, u64>,
    total: u64,
}

impl MeasurementDistribution {
    /// Creates an empty distribution (total 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a distribution from raw signed counts.
    ///
    /// Repeated labels are summed.
    ///
    /// # Returns
    /// * `Err(QvizError::Validation)` on a negative count, a non-binary label,
    ///   or labels of differing widths.
    pub fn from_counts<I, K>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        let mut unsigned = Vec::new();
        for (label, count) in counts {
            let label = label.into();
            let count = u64::try_from(count).map_err(|_| QvizError::Validation {
                message: format!("count {} is negative; counts must be >= 0", count),
                label: label.clone(),
            })?;
            unsigned.push((label, count));
        }
        Self::from_unsigned(unsigned)
    }

    /// Builds a distribution from counts that are already non-negative.
    /// Label checks still apply.
    pub fn from_unsigned<I, K>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, u64)>,
        K: Into<String>,
    {
        let mut map: BTreeMap<String, u64> = BTreeMap::new();
        let mut width: Option<usize> = None;
        let mut total: u64 = 0;
        for (label, count) in counts {
            let label = label.into();
            if !is_bitstring(&label) {
                return Err(QvizError::Validation {
                    message: "labels must be non-empty strings over {0, 1}".to_string(),
                    label,
                });
            }
            match width {
                None => width = Some(label.len()),
                Some(w) if w != label.len() => {
                    return Err(QvizError::Validation {
                        message: format!("label width {} differs from width {} of earlier labels", label.len(), w),
                        label,
                    });
                }
                Some(_) => {}
            }
            // Every entry is bounded by the total, so checking the total covers the merge too
            total = match total.checked_add(count) {
                Some(sum) => sum,
                None => {
                    return Err(QvizError::Validation {
                        message: "count total overflows u64".to_string(),
                        label,
                    });
                }
            };
            *map.entry(label).or_insert(0) += count;
        }
        Ok(Self { counts: map, total })
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct labels recorded (including labels with a zero count).
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when no label has been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Width of the labels, or `None` for an empty distribution.
    pub fn label_width(&self) -> Option<usize> {
        self.counts.keys().next().map(String::len)
    }

    /// Count for `label`; absent labels count as 0.
    pub fn count(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Normalized probability of `label`.
    /// Every probability is 0 when the total is 0.
    pub fn probability(&self, label: &str) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count(label) as f64 / self.total as f64
        }
    }

    /// Labels in ascending order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// `(label, count)` pairs in ascending label order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// `(label, percent)` pairs in ascending label order.
    /// Empty when the total is 0, since there is nothing to annotate.
    pub fn percentages(&self) -> Vec<(&str, f64)> {
        if self.total == 0 {
            return Vec::new();
        }
        self.iter()
            .map(|(label, count)| (label, count as f64 / self.total as f64 * 100.0))
            .collect()
    }

    /// Label with the highest count; ties resolve to the smallest label.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        // max_by_key keeps the last maximum, so walk in reverse to favour the smallest label
        self.iter().rev().max_by_key(|(_, count)| *count)
    }

    /// Largest single count, 0 for an empty distribution.
    pub fn max_count(&self) -> u64 {
        self.counts.values().copied().max().unwrap_or(0)
    }
}

impl TryFrom<HashMap<String, i64>> for MeasurementDistribution {
    type Error = QvizError;

    fn try_from(counts: HashMap<String, i64>) -> Result<Self> {
        Self::from_counts(counts)
    }
}

impl TryFrom<BTreeMap<String, u64>> for MeasurementDistribution {
    type Error = QvizError;

    fn try_from(counts: BTreeMap<String, u64>) -> Result<Self> {
        Self::from_unsigned(counts)
    }
}

impl fmt::Display for MeasurementDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Counts{{")?;
        for (i, (label, count)) in self.iter().enumerate() {
            write!(f, "{}{}: {}", if i > 0 { ", " } else { "" }, label, count)?;
        }
        write!(f, "}} (total {})", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_distribution_has_zero_probabilities() {
        let dist = MeasurementDistribution::new();
        assert_eq!(dist.total(), 0);
        assert!(dist.is_empty());
        assert_eq!(dist.probability("0"), 0.0);
        assert!(dist.percentages().is_empty());
        assert_eq!(dist.most_frequent(), None);
    }

    #[test]
    fn zero_total_with_labels_is_valid() -> Result<()> {
        let dist = MeasurementDistribution::from_counts([("0", 0), ("1", 0)])?;
        assert_eq!(dist.total(), 0);
        assert_eq!(dist.len(), 2);
        assert_eq!(dist.probability("1"), 0.0);
        Ok(())
    }

    #[test]
    fn negative_count_is_rejected() {
        let err = MeasurementDistribution::from_counts([("00", 10), ("11", -1)]).unwrap_err();
        match err {
            QvizError::Validation { label, .. } => assert_eq!(label, "11"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn non_binary_and_mixed_width_labels_are_rejected() {
        assert!(matches!(
            MeasurementDistribution::from_counts([("0x", 1)]),
            Err(QvizError::Validation { .. })
        ));
        assert!(matches!(
            MeasurementDistribution::from_counts([("", 1)]),
            Err(QvizError::Validation { .. })
        ));
        assert!(matches!(
            MeasurementDistribution::from_counts([("00", 1), ("1", 1)]),
            Err(QvizError::Validation { .. })
        ));
    }

    #[test]
    fn duplicate_labels_are_summed_and_ordered() -> Result<()> {
        let dist = MeasurementDistribution::from_counts([("11", 3), ("00", 2), ("11", 5)])?;
        let labels: Vec<_> = dist.labels().collect();
        assert_eq!(labels, vec!["00", "11"]);
        assert_eq!(dist.count("11"), 8);
        assert_eq!(dist.total(), 10);
        assert_eq!(dist.label_width(), Some(2));
        Ok(())
    }

    #[test]
    fn overflowing_total_is_rejected() {
        match MeasurementDistribution::from_unsigned([("0", u64::MAX), ("1", 1)]) {
            Err(QvizError::Validation { label, message }) => {
                assert_eq!(label, "1");
                assert!(message.contains("overflows"));
            }
            other => panic!("expected Validation error, got {:?}", other),
        }
        assert!(MeasurementDistribution::from_unsigned([("0", u64::MAX), ("1", 0)]).is_ok());
    }

    #[test]
    fn overflowing_duplicate_label_is_rejected() {
        match MeasurementDistribution::from_unsigned([("0", u64::MAX), ("0", 1)]) {
            Err(QvizError::Validation { label, .. }) => assert_eq!(label, "0"),
            other => panic!("expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn percentages_and_most_frequent() -> Result<()> {
        let dist = MeasurementDistribution::from_counts([("0", 250), ("1", 750)])?;
        assert_eq!(dist.percentages(), vec![("0", 25.0), ("1", 75.0)]);
        assert_eq!(dist.most_frequent(), Some(("1", 750)));
        assert_eq!(dist.max_count(), 750);

        let tied = MeasurementDistribution::from_counts([("1", 5), ("0", 5)])?;
        assert_eq!(tied.most_frequent(), Some(("0", 5)));
        Ok(())
    }

    #[test]
    fn try_from_hash_map() -> Result<()> {
        let mut raw = HashMap::new();
        raw.insert("01".to_string(), 7i64);
        let dist = MeasurementDistribution::try_from(raw)?;
        assert_eq!(dist.count("01"), 7);
        assert_eq!(dist.to_string(), "Counts{01: 7} (total 7)");
        Ok(())
    }
}
