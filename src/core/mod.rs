// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod label;

// Re-export public types for convenient access via `qviz::core::TypeName`
pub use error::{QvizError, Result};
pub use label::{basis_label, ket, qubit_count};

pub mod constants;
pub use constants::qviz_constants::{ANNOTATION_THRESHOLD, PI};
