//! Injection rate port

use std::fmt;

use async_trait::async_trait;
use domain::ExecutionContext;
#[cfg(test)]
use mockall::automock;
use tokio_util::sync::CancellationToken;

use crate::error::FaultError;

/// Port producing the injection probability for one invocation
///
/// The returned value is expected in `[0.0, 1.0]`. The engine does not clamp
/// it; keeping it in range is the implementation's job.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait InjectionRatePort: Send + Sync + fmt::Debug {
    /// Probability that a fault is injected into this invocation
    async fn injection_rate(
        &self,
        ctx: &ExecutionContext,
        cancel: &CancellationToken,
    ) -> Result<f64, FaultError>;
}
