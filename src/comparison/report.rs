// src/comparison/report.rs
use std::fmt;

const RULE_WIDTH: usize = 60;

/// One aligned label of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct StateComparison {
    /// Bitstring label shared by both sides.
    pub label: String,
    /// Raw count under distribution A (0 if absent).
    pub count_a: u64,
    /// Raw count under distribution B (0 if absent).
    pub count_b: u64,
    /// Normalized probability under A.
    pub probability_a: f64,
    /// Normalized probability under B.
    pub probability_b: f64,
    /// Signed `probability_b - probability_a`, in `[-1, 1]`.
    pub difference: f64,
}

/// Result of comparing two measurement distributions.
/// Built fresh by `compare_distributions`; read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    rows: Vec<StateComparison>,
    total_a: u64,
    total_b: u64,
    fidelity: f64,
    // Display-only metadata
    name: String,
    side_a: String,
    side_b: String,
}

impl ComparisonReport {
    pub(crate) fn new(rows: Vec<StateComparison>, total_a: u64, total_b: u64, fidelity: f64) -> Self {
        Self {
            rows,
            total_a,
            total_b,
            fidelity,
            name: "Circuit".to_string(),
            side_a: "Simulator".to_string(),
            side_b: "Hardware".to_string(),
        }
    }

    /// Sets the circuit name shown in the table heading.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the column headings used for sides A and B.
    pub fn with_sides(mut self, side_a: impl Into<String>, side_b: impl Into<String>) -> Self {
        self.side_a = side_a.into();
        self.side_b = side_b.into();
        self
    }

    /// Per-label rows in aligned (ascending) order.
    pub fn rows(&self) -> &[StateComparison] {
        &self.rows
    }

    /// Aligned labels in ascending order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.label.as_str())
    }

    /// Looks up the row for `label`.
    pub fn row(&self, label: &str) -> Option<&StateComparison> {
        // rows are sorted by label
        self.rows
            .binary_search_by(|row| row.label.as_str().cmp(label))
            .ok()
            .map(|idx| &self.rows[idx])
    }

    /// Number of aligned labels.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when neither side recorded any label.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Raw total of distribution A.
    pub fn total_a(&self) -> u64 {
        self.total_a
    }

    /// Raw total of distribution B.
    pub fn total_b(&self) -> u64 {
        self.total_b
    }

    /// Classical fidelity `Σ min(p_A, p_B)`.
    pub fn fidelity(&self) -> f64 {
        self.fidelity
    }

    /// Largest absolute per-label difference (0 for an empty report).
    pub fn max_abs_difference(&self) -> f64 {
        self.rows.iter().map(|row| row.difference.abs()).fold(0.0, f64::max)
    }

    /// Circuit name used in the table heading.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column headings for sides A and B.
    pub fn sides(&self) -> (&str, &str) {
        (&self.side_a, &self.side_b)
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        writeln!(f, "{}", heavy)?;
        writeln!(f, "Results Comparison: {}", self.name)?;
        writeln!(f, "{}", heavy)?;
        writeln!(f)?;
        writeln!(f, "{:<10} {:<15} {:<15} {:<15}", "State", self.side_a, self.side_b, "Difference")?;
        writeln!(f, "{}", light)?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<10} {:.4} ({:<4}) {:.4} ({:<4}) {:+.4}",
                row.label, row.probability_a, row.count_a, row.probability_b, row.count_b, row.difference
            )?;
        }
        writeln!(f, "{}", light)?;
        writeln!(f)?;
        writeln!(f, "Total shots - {}: {}, {}: {}", self.side_a, self.total_a, self.side_b, self.total_b)?;
        writeln!(f)?;
        writeln!(f, "Classical Fidelity: {:.4}", self.fidelity)?;
        write!(f, "{}", heavy)
    }
}

#[cfg(test)]
mod tests {
    use crate::comparison::compare_distributions;
    use crate::distribution::MeasurementDistribution;

    #[test]
    fn table_lists_every_aligned_state() {
        let sim = MeasurementDistribution::from_counts([("00", 500), ("11", 500)]).unwrap();
        let hw = MeasurementDistribution::from_counts([("00", 480), ("01", 25), ("10", 25), ("11", 470)]).unwrap();
        let table = compare_distributions(&sim, &hw).with_name("Bell State").to_string();

        assert!(table.contains("Results Comparison: Bell State"));
        assert!(table.contains("00         0.5000 (500 ) 0.4800 (480 ) -0.0200"));
        assert!(table.contains("01         0.0000 (0   ) 0.0250 (25  ) +0.0250"));
        assert!(table.contains("Total shots - Simulator: 1000, Hardware: 1000"));
        assert!(table.contains("Classical Fidelity: 0.9500"));
    }

    #[test]
    fn custom_sides_and_row_lookup() {
        let a = MeasurementDistribution::from_counts([("0", 1)]).unwrap();
        let b = MeasurementDistribution::from_counts([("1", 1)]).unwrap();
        let report = compare_distributions(&a, &b).with_sides("Classical", "Quantum");

        assert_eq!(report.sides(), ("Classical", "Quantum"));
        assert!(report.to_string().contains("Total shots - Classical: 1, Quantum: 1"));
        assert_eq!(report.row("1").map(|r| r.count_b), Some(1));
        assert!(report.row("11").is_none());
        assert_eq!(report.max_abs_difference(), 1.0);
    }
}
