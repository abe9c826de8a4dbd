// src/statevector/mod.rs

//! Decomposes a pure-state amplitude vector into the numeric views used by
//! amplitude, phase and real/imaginary charts.
//!
//! The decomposer only reads amplitudes. It does not check or enforce unit
//! norm, and it never filters entries: every one of the `2^n` basis states is
//! reported, small or not.

use crate::core::constants::qviz_constants::MAX_BASIS_QUBITS;
use crate::core::{QvizError, Result, basis_label, qubit_count};
use num_complex::Complex;
use num_traits::{One, Zero};
use std::f64::consts::PI;
use std::fmt;

/// Derived view of a single amplitude.
#[derive(Debug, Clone, PartialEq)]
pub struct StateAmplitudeView {
    /// Position of the amplitude in the source sequence.
    pub index: usize,
    /// `index` in binary, MSB first, padded to the qubit count.
    pub label: String,
    /// `|z|`, always `>= 0`.
    pub magnitude: f64,
    /// `arg(z)` in radians within `(-π, π]`; 0 when the magnitude is exactly 0.
    pub phase: f64,
    /// Real component.
    pub real: f64,
    /// Imaginary component.
    pub imag: f64,
}

impl StateAmplitudeView {
    fn from_amplitude(index: usize, num_qubits: usize, amp: Complex<f64>) -> Self {
        let magnitude = amp.norm();
        Self {
            index,
            label: basis_label(index, num_qubits),
            magnitude,
            phase: principal_phase(amp, magnitude),
            real: amp.re,
            imag: amp.im,
        }
    }

    /// Measurement probability `|z|²`.
    pub fn probability(&self) -> f64 {
        self.magnitude * self.magnitude
    }
}

impl fmt::Display for StateAmplitudeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "|{}⟩: {:.4}{:+.4}i (|z|={:.4}, φ={:.4})",
            self.label, self.real, self.imag, self.magnitude, self.phase
        )
    }
}

/// `atan2(im, re)` folded into `(-π, π]`, with 0 for a zero amplitude.
fn principal_phase(amp: Complex<f64>, magnitude: f64) -> f64 {
    if magnitude == 0.0 {
        return 0.0;
    }
    let phase = amp.arg();
    // atan2 returns -π for negative reals with a -0.0 imaginary part
    if phase <= -PI { PI } else { phase }
}

/// Decomposes `amplitudes` into one view per basis state, in index order.
///
/// # Returns
/// * `Ok(views)` with exactly `amplitudes.len()` entries.
/// * `Err(QvizError::Shape)` if the length is zero or not a power of two.
pub fn decompose_statevector(amplitudes: &[Complex<f64>]) -> Result<Vec<StateAmplitudeView>> {
    let num_qubits = qubit_count(amplitudes.len())?;
    Ok(amplitudes
        .iter()
        .enumerate()
        .map(|(index, amp)| StateAmplitudeView::from_amplitude(index, num_qubits, *amp))
        .collect())
}

/// An ordered amplitude vector whose length is known to be a power of two.
///
/// Unit norm is not enforced; use [`Statevector::norm_sqr`] to inspect it.
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    amplitudes: Vec<Complex<f64>>,
    num_qubits: usize,
}

impl Statevector {
    /// Wraps `amplitudes`, checking the length.
    ///
    /// # Returns
    /// * `Err(QvizError::Shape)` if the length is zero or not a power of two.
    pub fn new(amplitudes: Vec<Complex<f64>>) -> Result<Self> {
        let num_qubits = qubit_count(amplitudes.len())?;
        Ok(Self { amplitudes, num_qubits })
    }

    /// Builds a state from real amplitudes (e.g. `[1/√2, -1/√2]`).
    pub fn from_real(amplitudes: &[f64]) -> Result<Self> {
        Self::new(amplitudes.iter().map(|re| Complex::new(*re, 0.0)).collect())
    }

    /// Computational basis state `|index⟩` over `num_qubits` qubits.
    ///
    /// # Returns
    /// * `Err(QvizError::Shape)` if `num_qubits` exceeds `MAX_BASIS_QUBITS`
    ///   or `index >= 2^num_qubits`.
    pub fn basis(num_qubits: usize, index: usize) -> Result<Self> {
        let too_large = || QvizError::Shape {
            length: 0,
            message: format!("{} qubits exceed the limit of {} for basis states", num_qubits, MAX_BASIS_QUBITS),
        };
        if num_qubits > MAX_BASIS_QUBITS {
            return Err(too_large());
        }
        let shift = u32::try_from(num_qubits).map_err(|_| too_large())?;
        let dim = 1usize.checked_shl(shift).ok_or_else(too_large)?;
        if index >= dim {
            return Err(QvizError::Shape {
                length: dim,
                message: format!("basis index {} out of range for {} qubits", index, num_qubits),
            });
        }
        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[index] = Complex::one();
        Ok(Self { amplitudes, num_qubits })
    }

    /// Read-only access to the amplitudes.
    pub fn amplitudes(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Number of qubits `n` (length is `2^n`).
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of amplitudes.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// `Σ |c_i|²`. Not necessarily 1.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }

    /// Per-index measurement weights `|c_i|²`.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|c| c.norm_sqr()).collect()
    }

    /// Label of basis state `index`.
    pub fn label(&self, index: usize) -> String {
        basis_label(index, self.num_qubits)
    }

    /// Same as [`decompose_statevector`], infallible because the shape was checked at construction.
    pub fn decompose(&self) -> Vec<StateAmplitudeView> {
        self.amplitudes
            .iter()
            .enumerate()
            .map(|(index, amp)| StateAmplitudeView::from_amplitude(index, self.num_qubits, *amp))
            .collect()
    }
}

impl TryFrom<Vec<Complex<f64>>> for Statevector {
    type Error = QvizError;

    fn try_from(amplitudes: Vec<Complex<f64>>) -> Result<Self> {
        Self::new(amplitudes)
    }
}

impl fmt::Display for Statevector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Statevector[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}
