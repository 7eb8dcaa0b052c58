//! Closure-backed providers
//!
//! Wraps an async closure so any of the provider ports can be answered
//! dynamically, for example from the execution context or a feature flag
//! service.

use std::{fmt, future::Future, time::Duration};

use application::{
    error::FaultError,
    ports::{EnablementPort, InjectionRatePort, LatencyPort},
};
use async_trait::async_trait;
use domain::ExecutionContext;
use tokio_util::sync::CancellationToken;

/// Provider computed by an async closure
///
/// The closure receives owned clones of the context handle and the
/// cancellation token. Which port it implements follows from the closure's
/// output type: `bool` for enablement, `f64` for the injection rate and
/// [`Duration`] for latency.
///
/// ```rust,ignore
/// let latency = ProviderFn::new(|ctx: ExecutionContext, _: CancellationToken| async move {
///     let ms = ctx.get::<u64>("latency_ms")?.unwrap_or(100);
///     Ok::<_, FaultError>(Duration::from_millis(ms))
/// });
/// ```
pub struct ProviderFn<F> {
    name: &'static str,
    f: F,
}

impl<F> ProviderFn<F> {
    /// Wrap a closure
    pub const fn new(f: F) -> Self {
        Self { name: "fn", f }
    }

    /// Wrap a closure with a name shown in debug output
    pub const fn named(name: &'static str, f: F) -> Self {
        Self { name, f }
    }
}

impl<F> fmt::Debug for ProviderFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderFn")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<F, Fut> EnablementPort for ProviderFn<F>
where
    F: Fn(ExecutionContext, CancellationToken) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<bool, FaultError>> + Send + 'static,
{
    async fn is_enabled(
        &self,
        ctx: &ExecutionContext,
        cancel: &CancellationToken,
    ) -> Result<bool, FaultError> {
        (self.f)(ctx.clone(), cancel.clone()).await
    }
}

#[async_trait]
impl<F, Fut> InjectionRatePort for ProviderFn<F>
where
    F: Fn(ExecutionContext, CancellationToken) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<f64, FaultError>> + Send + 'static,
{
    async fn injection_rate(
        &self,
        ctx: &ExecutionContext,
        cancel: &CancellationToken,
    ) -> Result<f64, FaultError> {
        (self.f)(ctx.clone(), cancel.clone()).await
    }
}

#[async_trait]
impl<F, Fut> LatencyPort for ProviderFn<F>
where
    F: Fn(ExecutionContext, CancellationToken) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Duration, FaultError>> + Send + 'static,
{
    async fn latency(
        &self,
        ctx: &ExecutionContext,
        cancel: &CancellationToken,
    ) -> Result<Duration, FaultError> {
        (self.f)(ctx.clone(), cancel.clone()).await
    }
}
