// src/core/label.rs

//! Basis-state labelling shared by the decomposer, the sampler and the figures.

use super::error::{QvizError, Result};

/// Number of qubits described by a statevector of `len` amplitudes.
///
/// # Returns
/// * `Ok(n)` where `len == 2^n`.
/// * `Err(QvizError::Shape)` if `len` is zero or not a power of two.
pub fn qubit_count(len: usize) -> Result<usize> {
    if len == 0 {
        return Err(QvizError::Shape {
            length: len,
            message: "statevector is empty; expected 2^n amplitudes".to_string(),
        });
    }
    if !len.is_power_of_two() {
        return Err(QvizError::Shape {
            length: len,
            message: format!("length {} is not a power of two", len),
        });
    }
    Ok(len.trailing_zeros() as usize)
}

/// Formats `index` as an MSB-first binary string, zero-padded to `num_qubits` digits.
///
/// A zero-qubit state is still labelled `"0"`: the width never drops below one digit.
pub fn basis_label(index: usize, num_qubits: usize) -> String {
    format!("{:0width$b}", index, width = num_qubits.max(1))
}

/// Wraps a bitstring in ket notation, e.g. `"01"` -> `"|01⟩"`.
pub fn ket(label: &str) -> String {
    format!("|{}⟩", label)
}

/// True when `label` is a non-empty string over `{0, 1}`.
pub(crate) fn is_bitstring(label: &str) -> bool {
    !label.is_empty() && label.bytes().all(|b| b == b'0' || b == b'1')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qubit_count_accepts_powers_of_two() {
        assert_eq!(qubit_count(1), Ok(0));
        assert_eq!(qubit_count(2), Ok(1));
        assert_eq!(qubit_count(8), Ok(3));
        assert_eq!(qubit_count(1024), Ok(10));
    }

    #[test]
    fn qubit_count_rejects_zero_and_non_powers() {
        for len in [0usize, 3, 5, 6, 12] {
            match qubit_count(len) {
                Err(QvizError::Shape { length, .. }) => assert_eq!(length, len),
                other => panic!("expected Shape error for {}, got {:?}", len, other),
            }
        }
    }

    #[test]
    fn labels_are_msb_first_and_padded() {
        assert_eq!(basis_label(0, 0), "0");
        assert_eq!(basis_label(1, 1), "1");
        assert_eq!(basis_label(1, 3), "001");
        assert_eq!(basis_label(6, 3), "110");
        assert_eq!(ket("10"), "|10⟩");
    }

    #[test]
    fn bitstring_check() {
        assert!(is_bitstring("0101"));
        assert!(!is_bitstring(""));
        assert!(!is_bitstring("01a"));
        assert!(!is_bitstring("|0>"));
    }
}
