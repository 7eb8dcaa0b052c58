//! Enablement port
//!
//! Decides, per invocation, whether fault injection is switched on at all.

use std::fmt;

use async_trait::async_trait;
use domain::ExecutionContext;
#[cfg(test)]
use mockall::automock;
use tokio_util::sync::CancellationToken;

use crate::error::FaultError;

/// Port producing the enabled flag for one invocation
///
/// Evaluated fresh on every call and never cached. When it yields `false`
/// the injection rate is not consulted.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EnablementPort: Send + Sync + fmt::Debug {
    /// Whether injection is enabled for this invocation
    async fn is_enabled(
        &self,
        ctx: &ExecutionContext,
        cancel: &CancellationToken,
    ) -> Result<bool, FaultError>;
}
