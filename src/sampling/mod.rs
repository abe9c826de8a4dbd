// src/sampling/mod.rs

//! Count sources: anything that can turn a program into a `MeasurementDistribution`.
//!
//! The comparator does not care where counts come from. This module provides
//! the capability trait plus two implementations: a seeded sampler that draws
//! shots from a statevector, and a hardware backend placeholder.

mod backend;

pub use backend::{BackendConfig, BackendInfo, MonarchBackend};

use crate::core::constants::qviz_constants::DEFAULT_SEED;
use crate::core::{QvizError, Result};
use crate::distribution::MeasurementDistribution;
use crate::statevector::Statevector;
use rand::SeedableRng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::StdRng;
use tracing::debug;

/// Something that can execute a program `P` for a number of shots and
/// report the observed counts.
pub trait CountSource<P: ?Sized> {
    /// Executes `program` `shots` times.
    fn submit(&self, program: &P, shots: u64) -> Result<MeasurementDistribution>;
}

/// Settings for [`StatevectorSampler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Seed for the PRNG; equal seeds give equal counts.
    pub seed: u64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED }
    }
}

/// Draws measurement outcomes from a statevector with weights `|c_i|²`.
///
/// A fresh `StdRng` is seeded on every call, so the sampler holds no mutable
/// state and repeated submissions of the same state return the same counts.
#[derive(Debug, Clone, Default)]
pub struct StatevectorSampler {
    config: SamplerConfig,
}

impl StatevectorSampler {
    /// Creates a sampler with the given settings.
    pub fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    /// Shorthand for a sampler with only the seed changed.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SamplerConfig { seed })
    }

    /// Current settings.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }
}

impl CountSource<Statevector> for StatevectorSampler {
    /// Only observed outcomes appear in the returned distribution.
    ///
    /// # Returns
    /// * `Err(QvizError::Sampling)` if `shots` is 0 or the state has zero norm.
    fn submit(&self, state: &Statevector, shots: u64) -> Result<MeasurementDistribution> {
        if shots == 0 {
            return Err(QvizError::Sampling {
                message: "at least one shot is required".to_string(),
            });
        }
        let weights = state.probabilities();
        let norm_sq: f64 = weights.iter().sum();
        if norm_sq == 0.0 {
            return Err(QvizError::Sampling {
                message: "statevector has zero norm; no outcome can be drawn".to_string(),
            });
        }
        let index = WeightedIndex::new(&weights).map_err(|e| QvizError::Sampling {
            message: format!("invalid amplitude weights: {}", e),
        })?;

        debug!(
            shots,
            num_qubits = state.num_qubits(),
            seed = self.config.seed,
            norm_sq,
            "sampling statevector"
        );

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut tallies = vec![0u64; state.dim()];
        for _ in 0..shots {
            tallies[index.sample(&mut rng)] += 1;
        }

        MeasurementDistribution::from_unsigned(
            tallies
                .into_iter()
                .enumerate()
                .filter(|(_, count)| *count > 0)
                .map(|(k, count)| (state.label(k), count)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn basis_state_puts_every_shot_on_one_label() -> Result<()> {
        let state = Statevector::basis(3, 5)?;
        let counts = StatevectorSampler::default().submit(&state, 200)?;
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.count("101"), 200);
        assert_eq!(counts.total(), 200);
        Ok(())
    }

    #[test]
    fn same_seed_same_counts() -> Result<()> {
        let state = Statevector::from_real(&[FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2])?;
        let first = StatevectorSampler::with_seed(7).submit(&state, 1000)?;
        let second = StatevectorSampler::with_seed(7).submit(&state, 1000)?;
        assert_eq!(first, second);
        assert_eq!(first.total(), 1000);
        assert_eq!(first.count("01") + first.count("10"), 0);
        Ok(())
    }

    #[test]
    fn zero_shots_and_zero_norm_are_rejected() -> Result<()> {
        let sampler = StatevectorSampler::default();
        let state = Statevector::basis(1, 0)?;
        assert!(matches!(sampler.submit(&state, 0), Err(QvizError::Sampling { .. })));

        let empty = Statevector::from_real(&[0.0, 0.0])?;
        assert!(matches!(sampler.submit(&empty, 10), Err(QvizError::Sampling { .. })));
        Ok(())
    }
}
