//! Latency fault behavior
//!
//! Computes a delay through the latency port and sleeps for it, honoring
//! cancellation at two points:
//!
//! 1. right after the delay was computed, since the latency port may itself
//!    take time during which the caller gave up;
//! 2. continuously while sleeping.
//!
//! Either checkpoint surfaces [`FaultError::Cancelled`]; the wrapped action is
//! then never invoked.

use std::sync::Arc;

use async_trait::async_trait;
use domain::{ExecutionContext, InjectionOutcome};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::cancellable_sleep;
use crate::{
    error::FaultError,
    ports::{FaultBehavior, LatencyPort},
};

/// Fault behavior that delays the wrapped action
#[derive(Debug, Clone)]
pub struct LatencyFault {
    latency: Arc<dyn LatencyPort>,
}

impl LatencyFault {
    /// Create a latency fault backed by the given latency port
    pub fn new(latency: Arc<dyn LatencyPort>) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl FaultBehavior for LatencyFault {
    #[allow(clippy::cast_possible_truncation)]
    async fn apply(
        &self,
        ctx: &ExecutionContext,
        cancel: &CancellationToken,
    ) -> Result<InjectionOutcome, FaultError> {
        let latency = self.latency.latency(ctx, cancel).await?;

        if cancel.is_cancelled() {
            debug!(
                correlation_id = %ctx.correlation_id(),
                "Cancelled after latency computation, skipping injection"
            );
            return Err(FaultError::Cancelled);
        }

        debug!(
            correlation_id = %ctx.correlation_id(),
            latency_ms = latency.as_millis() as u64,
            "Injecting latency"
        );
        cancellable_sleep(latency, cancel).await?;

        Ok(InjectionOutcome::Injected { latency })
    }
}
