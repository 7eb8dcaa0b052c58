//! Fault behavior seam
//!
//! A fault behavior is what the engine runs on the "inject" branch, before
//! the wrapped action.

use std::fmt;

use async_trait::async_trait;
use domain::{ExecutionContext, InjectionOutcome};
use tokio_util::sync::CancellationToken;

use crate::error::FaultError;

/// Fault applied before the wrapped action on the inject branch
#[async_trait]
pub trait FaultBehavior: Send + Sync + fmt::Debug {
    /// Apply the fault
    ///
    /// Returning an error aborts the invocation; the wrapped action is not run.
    async fn apply(
        &self,
        ctx: &ExecutionContext,
        cancel: &CancellationToken,
    ) -> Result<InjectionOutcome, FaultError>;
}
