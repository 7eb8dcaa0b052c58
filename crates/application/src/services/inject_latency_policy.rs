//! Latency injection policy
//!
//! Decorates an async action with an optional delay. The policy is
//! behaviorally transparent when no fault is injected: the action sees the
//! same context and token, and its result or error is returned untouched.
//!
//! # Example
//!
//! ```rust,ignore
//! use application::InjectLatencyPolicy;
//!
//! let policy = InjectLatencyPolicy::builder()
//!     .latency(ConstantLatency::new(Duration::from_millis(50)))
//!     .injection_rate(ConstantInjectionRate::new(InjectionRate::new(0.3)?))
//!     .enabled(ConstantEnabled::new(true))
//!     .random_source(ThreadRandomSource)
//!     .build()?;
//!
//! let profile = policy
//!     .execute(|ctx, cancel| async move { client.fetch(&ctx, &cancel).await }, &ctx, &cancel)
//!     .await?;
//! ```

use std::{future::Future, sync::Arc};

use domain::ExecutionContext;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug_span};

use super::{InjectionEngine, InjectionReport, LatencyFault};
use crate::{
    error::FaultError,
    ports::{EnablementPort, InjectionRatePort, LatencyPort, RandomSourcePort},
};

/// Policy injecting latency ahead of the wrapped action
#[derive(Debug, Clone)]
pub struct InjectLatencyPolicy {
    policy_key: Option<String>,
    engine: InjectionEngine,
    fault: LatencyFault,
}

impl InjectLatencyPolicy {
    /// Create a policy from its four ports
    pub fn new(
        latency: Arc<dyn LatencyPort>,
        injection_rate: Arc<dyn InjectionRatePort>,
        enabled: Arc<dyn EnablementPort>,
        random: Arc<dyn RandomSourcePort>,
    ) -> Self {
        Self {
            policy_key: None,
            engine: InjectionEngine::new(enabled, injection_rate, random),
            fault: LatencyFault::new(latency),
        }
    }

    /// Start building a policy
    pub fn builder() -> InjectLatencyPolicyBuilder {
        InjectLatencyPolicyBuilder::default()
    }

    /// Name used in log fields
    pub fn policy_key(&self) -> Option<&str> {
        self.policy_key.as_deref()
    }

    /// Run `action`, possibly delayed by injected latency
    pub async fn execute<F, Fut, T, E>(
        &self,
        action: F,
        ctx: &ExecutionContext,
        cancel: &CancellationToken,
    ) -> Result<T, E>
    where
        F: FnOnce(ExecutionContext, CancellationToken) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<FaultError>,
    {
        self.execute_and_capture(action, ctx, cancel)
            .await
            .into_result()
    }

    /// Run `action` and report whether latency was injected
    pub async fn execute_and_capture<F, Fut, T, E>(
        &self,
        action: F,
        ctx: &ExecutionContext,
        cancel: &CancellationToken,
    ) -> InjectionReport<T, E>
    where
        F: FnOnce(ExecutionContext, CancellationToken) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<FaultError>,
    {
        let span = debug_span!(
            "inject_latency",
            policy = self.policy_key.as_deref().unwrap_or("unnamed"),
            operation_key = ctx.operation_key().unwrap_or_default(),
            correlation_id = %ctx.correlation_id(),
        );
        self.engine
            .execute(&self.fault, action, ctx, cancel)
            .instrument(span)
            .await
    }
}

/// Builder for [`InjectLatencyPolicy`]
///
/// Every port is required; [`build`](Self::build) reports the first missing one.
#[derive(Debug, Default)]
pub struct InjectLatencyPolicyBuilder {
    policy_key: Option<String>,
    latency: Option<Arc<dyn LatencyPort>>,
    injection_rate: Option<Arc<dyn InjectionRatePort>>,
    enabled: Option<Arc<dyn EnablementPort>>,
    random: Option<Arc<dyn RandomSourcePort>>,
}

impl InjectLatencyPolicyBuilder {
    /// Set the name used in log fields
    #[must_use]
    pub fn policy_key(mut self, key: impl Into<String>) -> Self {
        self.policy_key = Some(key.into());
        self
    }

    /// Set the latency port
    #[must_use]
    pub fn latency(mut self, port: impl LatencyPort + 'static) -> Self {
        self.latency = Some(Arc::new(port));
        self
    }

    /// Set the injection rate port
    #[must_use]
    pub fn injection_rate(mut self, port: impl InjectionRatePort + 'static) -> Self {
        self.injection_rate = Some(Arc::new(port));
        self
    }

    /// Set the enablement port
    #[must_use]
    pub fn enabled(mut self, port: impl EnablementPort + 'static) -> Self {
        self.enabled = Some(Arc::new(port));
        self
    }

    /// Set the random source
    #[must_use]
    pub fn random_source(mut self, source: impl RandomSourcePort + 'static) -> Self {
        self.random = Some(Arc::new(source));
        self
    }

    /// Build the policy
    pub fn build(self) -> Result<InjectLatencyPolicy, FaultError> {
        let latency = self.latency.ok_or(FaultError::MissingProvider("latency"))?;
        let injection_rate = self
            .injection_rate
            .ok_or(FaultError::MissingProvider("injection_rate"))?;
        let enabled = self.enabled.ok_or(FaultError::MissingProvider("enabled"))?;
        let random = self
            .random
            .ok_or(FaultError::MissingProvider("random_source"))?;

        let mut policy = InjectLatencyPolicy::new(latency, injection_rate, enabled, random);
        policy.policy_key = self.policy_key;
        Ok(policy)
    }
}
