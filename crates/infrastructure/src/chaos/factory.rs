//! Policy construction from configuration

use application::{FaultError, InjectLatencyPolicy};
use tracing::info;

use crate::{
    adapters::{
        ConstantEnabled, ConstantInjectionRate, DistributionLatency, SeededRandomSource,
        ThreadRandomSource,
    },
    config::LatencyChaosConfig,
};

/// Builds injection policies from configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct ChaosFactory;

impl ChaosFactory {
    /// Build a latency policy with constant enablement and rate
    ///
    /// With a `seed`, both the injection draws and the sampled delays are
    /// reproducible across runs.
    pub fn latency_policy(config: &LatencyChaosConfig) -> Result<InjectLatencyPolicy, FaultError> {
        config.validate()?;

        let builder = InjectLatencyPolicy::builder()
            .enabled(ConstantEnabled::new(config.enabled))
            .injection_rate(ConstantInjectionRate::new(config.injection_rate));

        let builder = match config.seed {
            Some(seed) => builder
                .random_source(SeededRandomSource::new(seed))
                .latency(DistributionLatency::seeded(config.latency, seed.wrapping_add(1))),
            None => builder
                .random_source(ThreadRandomSource)
                .latency(DistributionLatency::new(config.latency)),
        };

        let builder = match &config.policy_key {
            Some(key) => builder.policy_key(key.clone()),
            None => builder,
        };

        let policy = builder.build()?;

        info!(
            policy = policy.policy_key().unwrap_or("unnamed"),
            enabled = config.enabled,
            rate = %config.injection_rate,
            seeded = config.seed.is_some(),
            "Latency injection policy created"
        );
        Ok(policy)
    }
}
