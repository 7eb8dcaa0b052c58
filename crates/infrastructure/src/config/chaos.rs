//! Latency chaos configuration

use domain::{DomainError, InjectionRate};
use serde::{Deserialize, Serialize};

use crate::chaos::LatencyDistribution;

/// Settings for one latency injection policy
///
/// ```toml
/// [chaos]
/// enabled = true
/// injection_rate = 0.3
/// seed = 42
///
/// [chaos.latency]
/// type = "uniform"
/// min_ms = 100
/// max_ms = 500
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyChaosConfig {
    /// Master switch; off unless configured
    #[serde(default)]
    pub enabled: bool,

    /// Fraction of invocations that get delayed
    #[serde(default = "default_injection_rate")]
    pub injection_rate: InjectionRate,

    /// How the injected delay is chosen
    #[serde(default)]
    pub latency: LatencyDistribution,

    /// Seed for both the injection draws and the latency sampling
    ///
    /// Leave unset for non-reproducible runs.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Name used in log fields
    #[serde(default)]
    pub policy_key: Option<String>,
}

fn default_injection_rate() -> InjectionRate {
    InjectionRate::clamped(0.1)
}

impl Default for LatencyChaosConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            injection_rate: default_injection_rate(),
            latency: LatencyDistribution::default(),
            seed: None,
            policy_key: None,
        }
    }
}

impl LatencyChaosConfig {
    /// Check the settings are consistent
    pub fn validate(&self) -> Result<(), DomainError> {
        self.latency.validate()
    }
}
