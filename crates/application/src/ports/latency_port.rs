//! Latency port
//!
//! Computes the delay to inject. Only evaluated once injection was decided.

use std::{fmt, time::Duration};

use async_trait::async_trait;
use domain::ExecutionContext;
#[cfg(test)]
use mockall::automock;
use tokio_util::sync::CancellationToken;

use crate::error::FaultError;

/// Port producing the latency to inject for one invocation
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LatencyPort: Send + Sync + fmt::Debug {
    /// Delay to sleep before the wrapped action runs
    ///
    /// May observe `cancel` and return [`FaultError::Cancelled`].
    async fn latency(
        &self,
        ctx: &ExecutionContext,
        cancel: &CancellationToken,
    ) -> Result<Duration, FaultError>;
}
