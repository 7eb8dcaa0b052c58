//! Providers returning a fixed value for every invocation

use std::time::Duration;

use application::{
    error::FaultError,
    ports::{EnablementPort, InjectionRatePort, LatencyPort},
};
use async_trait::async_trait;
use domain::{ExecutionContext, InjectionRate};
use tokio_util::sync::CancellationToken;

/// Enablement switch that never changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantEnabled(bool);

impl ConstantEnabled {
    /// Create a fixed switch
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self(enabled)
    }
}

#[async_trait]
impl EnablementPort for ConstantEnabled {
    async fn is_enabled(
        &self,
        _ctx: &ExecutionContext,
        _cancel: &CancellationToken,
    ) -> Result<bool, FaultError> {
        Ok(self.0)
    }
}

/// Injection rate that never changes
///
/// Takes a validated [`InjectionRate`], so the value is always in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantInjectionRate(InjectionRate);

impl ConstantInjectionRate {
    /// Create a fixed rate
    #[must_use]
    pub const fn new(rate: InjectionRate) -> Self {
        Self(rate)
    }

    /// The configured rate
    #[must_use]
    pub const fn rate(&self) -> InjectionRate {
        self.0
    }
}

#[async_trait]
impl InjectionRatePort for ConstantInjectionRate {
    async fn injection_rate(
        &self,
        _ctx: &ExecutionContext,
        _cancel: &CancellationToken,
    ) -> Result<f64, FaultError> {
        Ok(self.0.value())
    }
}

/// Latency that never changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantLatency(Duration);

impl ConstantLatency {
    /// Create a fixed latency
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self(latency)
    }
}

#[async_trait]
impl LatencyPort for ConstantLatency {
    async fn latency(
        &self,
        _ctx: &ExecutionContext,
        _cancel: &CancellationToken,
    ) -> Result<Duration, FaultError> {
        Ok(self.0)
    }
}
