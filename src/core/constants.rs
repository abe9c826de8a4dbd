//! Numeric constants shared by the core and the figure builders.

/// Constants used across the crate
pub mod qviz_constants {
    /// Used for phase angles (`e^(iθ)`)
    pub const PI: f64 = std::f64::consts::PI;
    /// Magnitudes at or below this are left unannotated in amplitude charts.
    pub const ANNOTATION_THRESHOLD: f64 = 0.01;
    /// Largest qubit count `Statevector::basis` will allocate for (2^24 amplitudes, 256 MiB).
    pub const MAX_BASIS_QUBITS: usize = 24;
    /// Default seed for the statevector sampler.
    pub const DEFAULT_SEED: u64 = 42;
}
