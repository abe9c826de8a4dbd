// src/sampling/backend.rs

use super::CountSource;
use crate::core::{QvizError, Result};
use crate::distribution::MeasurementDistribution;
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

const DEFAULT_BACKEND: &str = "monarch";

/// Connection settings for a hardware backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Provider channel name.
    pub channel: String,
    /// Authentication token; `None` means saved credentials.
    pub token: Option<String>,
    /// Backend to select on the provider.
    pub backend_name: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            channel: "ibm_quantum".to_string(),
            token: None,
            backend_name: DEFAULT_BACKEND.to_string(),
        }
    }
}

/// Placeholder for the Monarch hardware backend.
///
/// Every call fails: `configure` with `NotImplemented`, everything else with
/// `BackendNotConfigured`. It exists so workshop code can be written against
/// [`CountSource`] today and swapped to a real backend later.
#[derive(Debug, Clone, Default)]
pub struct MonarchBackend {
    config: Option<BackendConfig>,
}

impl MonarchBackend {
    /// Creates an unconfigured backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to connect with `config`.
    ///
    /// # Returns
    /// * Always `Err(QvizError::NotImplemented)`; the message lists what a
    ///   real implementation has to do.
    pub fn configure(&mut self, config: BackendConfig) -> Result<()> {
        warn!(
            channel = %config.channel,
            backend = %config.backend_name,
            has_token = config.token.is_some(),
            "hardware configuration requested but not implemented"
        );
        Err(QvizError::NotImplemented {
            feature: format!("configure {}", config.backend_name),
            message: "backend configuration needs real credentials. Expected steps: \
                      1. load account credentials (token, URL), \
                      2. initialize the runtime service, \
                      3. select the backend, \
                      4. verify the connection"
                .to_string(),
        })
    }

    /// Backend already holding `config`, standing in for a successful `configure`.
    #[cfg(test)]
    pub(crate) fn with_config(config: BackendConfig) -> Self {
        Self { config: Some(config) }
    }

    /// True once `configure` has succeeded (never, for now).
    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Name of the backend this instance targets.
    pub fn name(&self) -> &str {
        self.config
            .as_ref()
            .map(|c| c.backend_name.as_str())
            .unwrap_or(DEFAULT_BACKEND)
    }

    fn require_configured(&self) -> Result<&BackendConfig> {
        self.config.as_ref().ok_or_else(|| {
            warn!(backend = self.name(), "backend used before configure()");
            QvizError::BackendNotConfigured {
                backend: self.name().to_string(),
            }
        })
    }

    /// Hardware properties (gate fidelities, coherence times).
    pub fn properties(&self) -> Result<BTreeMap<String, f64>> {
        let config = self.require_configured()?;
        Err(QvizError::NotImplemented {
            feature: format!("properties of {}", config.backend_name),
            message: "backend property queries need a real implementation".to_string(),
        })
    }

    /// Summary used for printing; placeholder values when unconfigured.
    pub fn info(&self) -> BackendInfo {
        BackendInfo {
            name: self.name().to_string(),
            configured: self.is_configured(),
        }
    }
}

impl<P: ?Sized> CountSource<P> for MonarchBackend {
    fn submit(&self, _program: &P, shots: u64) -> Result<MeasurementDistribution> {
        let config = self.require_configured()?;
        Err(QvizError::NotImplemented {
            feature: format!("submit {} shots to {}", shots, config.backend_name),
            message: "job submission needs a real implementation".to_string(),
        })
    }
}

/// Printable description of a hardware backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendInfo {
    /// Backend name.
    pub name: String,
    /// Whether a connection was established.
    pub configured: bool,
}

impl fmt::Display for BackendInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(60);
        if !self.configured {
            writeln!(f, "Hardware Backend Information (Placeholder)")?;
            writeln!(f, "{}", rule)?;
            writeln!(f, "Backend Name: {}", self.name)?;
            writeln!(f, "Status: Not configured")?;
            writeln!(f)?;
            writeln!(f, "Expected hardware specifications:")?;
            for spec in ["Number of qubits", "Quantum volume", "Gate fidelities", "Readout fidelity", "Coherence times (T1, T2)"] {
                writeln!(f, "  - {}: TBD", spec)?;
            }
            writeln!(f)?;
            writeln!(f, "To configure: set up backend credentials")?;
            return write!(f, "{}", rule);
        }
        writeln!(f, "{}", rule)?;
        writeln!(f, "Hardware Backend: {}", self.name)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Backend configured successfully!")?;
        write!(f, "{}", rule)
    }
}
