//! Latency sampled from a distribution

use std::time::Duration;

use application::{error::FaultError, ports::LatencyPort};
use async_trait::async_trait;
use domain::ExecutionContext;
use parking_lot::Mutex;
use rand::{SeedableRng, rngs::StdRng};
use tokio_util::sync::CancellationToken;

use crate::chaos::LatencyDistribution;

/// Latency provider drawing each delay from a [`LatencyDistribution`]
#[derive(Debug)]
pub struct DistributionLatency {
    distribution: LatencyDistribution,
    rng: Mutex<StdRng>,
}

impl DistributionLatency {
    /// Sample with an OS-seeded generator
    pub fn new(distribution: LatencyDistribution) -> Self {
        Self {
            distribution,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Sample with a seeded generator for reproducible delays
    pub fn seeded(distribution: LatencyDistribution, seed: u64) -> Self {
        Self {
            distribution,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// The distribution delays are drawn from
    pub const fn distribution(&self) -> &LatencyDistribution {
        &self.distribution
    }
}

#[async_trait]
impl LatencyPort for DistributionLatency {
    async fn latency(
        &self,
        _ctx: &ExecutionContext,
        _cancel: &CancellationToken,
    ) -> Result<Duration, FaultError> {
        Ok(self.distribution.sample(&mut *self.rng.lock()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn samples_within_bounds() {
        let provider = DistributionLatency::new(LatencyDistribution::uniform(
            Duration::from_millis(10),
            Duration::from_millis(20),
        ));
        let ctx = ExecutionContext::new();
        let cancel = CancellationToken::new();

        for _ in 0..50 {
            let latency = provider.latency(&ctx, &cancel).await.unwrap();
            assert!(latency >= Duration::from_millis(10));
            assert!(latency <= Duration::from_millis(20));
        }
    }

    #[tokio::test]
    async fn seeded_providers_agree() {
        let dist = LatencyDistribution::default();
        let a = DistributionLatency::seeded(dist, 99);
        let b = DistributionLatency::seeded(dist, 99);
        let ctx = ExecutionContext::new();
        let cancel = CancellationToken::new();

        for _ in 0..5 {
            assert_eq!(
                a.latency(&ctx, &cancel).await.unwrap(),
                b.latency(&ctx, &cancel).await.unwrap()
            );
        }
        assert_eq!(a.distribution(), &dist);
    }
}
