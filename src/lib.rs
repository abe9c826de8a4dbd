// src/lib.rs

//! `qviz` - numeric core for quantum computing workshop figures
//!
//! This library aligns and compares measurement-count distributions, scores
//! their overlap, and decomposes statevectors into the per-basis-state views
//! that amplitude, phase and real/imaginary plots are drawn from. It never
//! draws anything itself: the `figures` module stops at chart descriptions.

pub mod core;
pub mod distribution;
pub mod comparison;
pub mod statevector;
pub mod sampling;
pub mod figures;

// Re-export the most common types for easier top-level use
pub use crate::core::{QvizError, Result};
pub use distribution::MeasurementDistribution;
pub use comparison::{classical_fidelity, compare_distributions, ComparisonReport, StateComparison};
pub use statevector::{decompose_statevector, StateAmplitudeView, Statevector};
pub use sampling::{BackendConfig, CountSource, MonarchBackend, SamplerConfig, StatevectorSampler};
pub use figures::{BarChart, ChartOptions};

// Example 1: Simulator vs hardware comparison
// Compares an ideal Bell-state distribution with noisy hardware counts.
/// ```
/// use qviz::{compare_distributions, MeasurementDistribution, QvizError};
///
/// let simulator = MeasurementDistribution::from_counts([("00", 500), ("11", 500)])?;
/// let hardware = MeasurementDistribution::from_counts([
///     ("00", 480), ("01", 25), ("10", 25), ("11", 470),
/// ])?;
///
/// let report = compare_distributions(&simulator, &hardware).with_name("Bell State");
/// println!("{}", report);
///
/// // min(0.5, 0.48) + min(0, 0.025) + min(0, 0.025) + min(0.5, 0.47)
/// assert!((report.fidelity() - 0.95).abs() < 1e-12);
/// assert_eq!(report.labels().collect::<Vec<_>>(), vec!["00", "01", "10", "11"]);
/// # Ok::<(), QvizError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Decomposing |0> + i|1>
/// ```
/// use qviz::{decompose_statevector, QvizError};
/// use num_complex::Complex;
/// use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2};
///
/// let views = decompose_statevector(&[
///     Complex::new(FRAC_1_SQRT_2, 0.0),
///     Complex::new(0.0, FRAC_1_SQRT_2),
/// ])?;
/// assert_eq!(views[1].label, "1");
/// assert!((views[1].phase - FRAC_PI_2).abs() < 1e-12);
///
/// // Lengths that are not a power of two are rejected outright
/// let bad = decompose_statevector(&[Complex::new(1.0, 0.0); 3]);
/// assert!(matches!(bad, Err(QvizError::Shape { length: 3, .. })));
/// # Ok::<(), QvizError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
