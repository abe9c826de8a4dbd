//! Error handling logic

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QvizError>;

/// Failures reported by the comparison, decomposition and count-source layers.
///
/// Degenerate but well-formed inputs (an empty distribution, a zero total)
/// are never errors; they resolve to all-zero probabilities instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)] // Eq useful for testing error variants
pub enum QvizError {
    /// A statevector whose length is zero or not a power of two.
    /// No partial decomposition is produced.
    #[error("Shape Error (length {length}): {message}")]
    Shape {
        /// Offending amplitude count
        length: usize,
        /// Shape failure message
        message: String,
    },

    /// A measurement distribution that breaks its construction invariants
    /// (negative count, non-binary label, mixed label widths).
    #[error("Validation Error ({label:?}): {message}")]
    Validation {
        /// Label the violation was found on
        label: String,
        /// Validation failure message
        message: String,
    },

    /// A count source could not draw outcomes from its input.
    #[error("Sampling Error: {message}")]
    Sampling {
        /// Sampling failure message
        message: String,
    },

    /// A hardware backend was used before `configure` succeeded.
    #[error("Backend '{backend}' not configured. Call configure() first.")]
    BackendNotConfigured {
        /// Name of the backend
        backend: String,
    },

    /// Placeholder capability with no real implementation behind it.
    #[error("Not Implemented ({feature}): {message}")]
    NotImplemented {
        /// Capability that was requested
        feature: String,
        /// Explanation of what a real implementation needs
        message: String,
    },
}
