//! Injection decision engine
//!
//! Decides, per invocation, whether a fault is injected and orchestrates the
//! fault behavior ahead of the wrapped action.
//!
//! The decision runs in a fixed order:
//!
//! 1. the enablement port; `false` short-circuits and the rate is never read
//! 2. the injection rate port
//! 3. one uniform draw from the random source; inject iff `draw < rate`
//!
//! Cancellation is not pre-checked here. Ports receive the token and decide
//! for themselves how to react to it.

use std::{
    future::Future,
    sync::Arc,
    time::{Duration, Instant},
};

use domain::{ExecutionContext, InjectionOutcome};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::{
    error::FaultError,
    ports::{EnablementPort, FaultBehavior, InjectionRatePort, RandomSourcePort},
};

/// Result of a decorated invocation, with what the injector did
#[derive(Debug)]
pub struct InjectionReport<T, E> {
    /// The result of the wrapped action, or the fault error converted into `E`
    pub result: Result<T, E>,
    /// What happened before the action ran
    pub outcome: InjectionOutcome,
    /// Total time spent, including injected latency
    pub elapsed: Duration,
}

impl<T, E> InjectionReport<T, E> {
    /// Check if the invocation succeeded
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Check if the invocation failed
    #[must_use]
    pub const fn is_err(&self) -> bool {
        self.result.is_err()
    }

    /// Convert to standard Result, discarding metadata
    pub fn into_result(self) -> Result<T, E> {
        self.result
    }
}

/// Decision engine shared by fault behaviors
#[derive(Debug, Clone)]
pub struct InjectionEngine {
    enabled: Arc<dyn EnablementPort>,
    injection_rate: Arc<dyn InjectionRatePort>,
    random: Arc<dyn RandomSourcePort>,
}

impl InjectionEngine {
    /// Create a new engine from its ports
    pub fn new(
        enabled: Arc<dyn EnablementPort>,
        injection_rate: Arc<dyn InjectionRatePort>,
        random: Arc<dyn RandomSourcePort>,
    ) -> Self {
        Self {
            enabled,
            injection_rate,
            random,
        }
    }

    /// Decide whether to inject a fault into this invocation
    ///
    /// Port failures propagate unchanged.
    pub async fn should_inject(
        &self,
        ctx: &ExecutionContext,
        cancel: &CancellationToken,
    ) -> Result<bool, FaultError> {
        if !self.enabled.is_enabled(ctx, cancel).await? {
            debug!(correlation_id = %ctx.correlation_id(), "Injection disabled");
            return Ok(false);
        }

        let rate = self.injection_rate.injection_rate(ctx, cancel).await?;
        if !(0.0..=1.0).contains(&rate) {
            warn!(
                correlation_id = %ctx.correlation_id(),
                rate,
                "Injection rate outside [0, 1], using it as is"
            );
        }

        let draw = self.random.next_f64();
        let inject = draw < rate;
        debug!(
            correlation_id = %ctx.correlation_id(),
            rate,
            draw,
            inject,
            "Injection decision"
        );
        Ok(inject)
    }

    /// Run `action`, preceded by `behavior` when injection is decided
    ///
    /// The action runs at most once. It does not run when a port or the
    /// fault behavior fails; that error is converted into `E` instead.
    pub async fn execute<F, Fut, T, E>(
        &self,
        behavior: &dyn FaultBehavior,
        action: F,
        ctx: &ExecutionContext,
        cancel: &CancellationToken,
    ) -> InjectionReport<T, E>
    where
        F: FnOnce(ExecutionContext, CancellationToken) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<FaultError>,
    {
        let start = Instant::now();

        let outcome = match self.prologue(behavior, ctx, cancel).await {
            Ok(outcome) => outcome,
            Err(err) => {
                let outcome = if err.is_cancelled() {
                    InjectionOutcome::Cancelled
                } else {
                    InjectionOutcome::NotInjected
                };
                return InjectionReport {
                    result: Err(err.into()),
                    outcome,
                    elapsed: start.elapsed(),
                };
            },
        };

        let result = action(ctx.clone(), cancel.clone()).await;
        InjectionReport {
            result,
            outcome,
            elapsed: start.elapsed(),
        }
    }

    async fn prologue(
        &self,
        behavior: &dyn FaultBehavior,
        ctx: &ExecutionContext,
        cancel: &CancellationToken,
    ) -> Result<InjectionOutcome, FaultError> {
        if self.should_inject(ctx, cancel).await? {
            behavior.apply(ctx, cancel).await
        } else {
            Ok(InjectionOutcome::NotInjected)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;
    use mockall::Sequence;
    use proptest::prelude::*;

    use super::*;
    use crate::ports::{MockEnablementPort, MockInjectionRatePort, MockRandomSourcePort};

    #[derive(Debug, Default)]
    struct CountingBehavior {
        calls: AtomicU32,
    }

    #[async_trait]
    impl FaultBehavior for CountingBehavior {
        async fn apply(
            &self,
            _ctx: &ExecutionContext,
            _cancel: &CancellationToken,
        ) -> Result<InjectionOutcome, FaultError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(InjectionOutcome::Injected {
                latency: Duration::ZERO,
            })
        }
    }

    #[derive(Debug)]
    struct CancellingBehavior;

    #[async_trait]
    impl FaultBehavior for CancellingBehavior {
        async fn apply(
            &self,
            _ctx: &ExecutionContext,
            _cancel: &CancellationToken,
        ) -> Result<InjectionOutcome, FaultError> {
            Err(FaultError::Cancelled)
        }
    }

    fn enabled(value: bool) -> MockEnablementPort {
        let mut mock = MockEnablementPort::new();
        mock.expect_is_enabled().returning(move |_, _| Ok(value));
        mock
    }

    fn rate(value: f64) -> MockInjectionRatePort {
        let mut mock = MockInjectionRatePort::new();
        mock.expect_injection_rate().returning(move |_, _| Ok(value));
        mock
    }

    fn draw(value: f64) -> MockRandomSourcePort {
        let mut mock = MockRandomSourcePort::new();
        mock.expect_next_f64().return_const(value);
        mock
    }

    fn engine(
        enabled: MockEnablementPort,
        rate: MockInjectionRatePort,
        random: MockRandomSourcePort,
    ) -> InjectionEngine {
        InjectionEngine::new(Arc::new(enabled), Arc::new(rate), Arc::new(random))
    }

    async fn decide(engine: &InjectionEngine) -> bool {
        engine
            .should_inject(&ExecutionContext::new(), &CancellationToken::new())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn disabled_never_consults_rate_or_random() {
        let mut rate = MockInjectionRatePort::new();
        rate.expect_injection_rate().times(0);
        let mut random = MockRandomSourcePort::new();
        random.expect_next_f64().times(0);

        let engine = engine(enabled(false), rate, random);

        assert!(!decide(&engine).await);
    }

    #[tokio::test]
    async fn decision_follows_draw_against_rate() {
        let cases = [
            (0.0, 0.0, false),
            (0.0, 0.000_001, false),
            (0.5, 0.499_999, true),
            (0.5, 0.5, false),
            (0.5, 0.500_001, false),
            (1.0, 0.0, true),
            (1.0, 0.999_999, true),
        ];

        for (rate_value, draw_value, expected) in cases {
            let engine = engine(enabled(true), rate(rate_value), draw(draw_value));
            assert_eq!(
                decide(&engine).await,
                expected,
                "rate {rate_value}, draw {draw_value}"
            );
        }
    }

    #[tokio::test]
    async fn out_of_range_rate_is_used_as_is() {
        assert!(decide(&engine(enabled(true), rate(1.5), draw(0.99))).await);
        assert!(!decide(&engine(enabled(true), rate(-0.5), draw(0.0))).await);
        assert!(!decide(&engine(enabled(true), rate(f64::NAN), draw(0.0))).await);
    }

    #[tokio::test]
    async fn enablement_failure_propagates() {
        let mut enablement = MockEnablementPort::new();
        enablement
            .expect_is_enabled()
            .returning(|_, _| Err(FaultError::provider("enabled", "flag store down")));
        let mut rate = MockInjectionRatePort::new();
        rate.expect_injection_rate().times(0);

        let engine = engine(enablement, rate, draw(0.0));
        let result = engine
            .should_inject(&ExecutionContext::new(), &CancellationToken::new())
            .await;

        assert_eq!(
            result,
            Err(FaultError::provider("enabled", "flag store down"))
        );
    }

    #[tokio::test]
    async fn execute_runs_behavior_then_action_when_injecting() {
        let engine = engine(enabled(true), rate(1.0), draw(0.3));
        let behavior = CountingBehavior::default();

        let report: InjectionReport<u32, FaultError> = engine
            .execute(
                &behavior,
                |_, _| async { Ok(7) },
                &ExecutionContext::new(),
                &CancellationToken::new(),
            )
            .await;

        assert_eq!(behavior.calls.load(Ordering::SeqCst), 1);
        assert!(report.outcome.is_injected());
        assert_eq!(report.into_result(), Ok(7));
    }

    #[tokio::test]
    async fn execute_skips_behavior_when_not_injecting() {
        let engine = engine(enabled(true), rate(0.0), draw(0.3));
        let behavior = CountingBehavior::default();

        let report: InjectionReport<u32, FaultError> = engine
            .execute(
                &behavior,
                |_, _| async { Ok(7) },
                &ExecutionContext::new(),
                &CancellationToken::new(),
            )
            .await;

        assert_eq!(behavior.calls.load(Ordering::SeqCst), 0);
        assert_eq!(report.outcome, InjectionOutcome::NotInjected);
        assert!(report.is_ok());
    }

    #[tokio::test]
    async fn behavior_cancellation_skips_action() {
        let engine = engine(enabled(true), rate(1.0), draw(0.0));
        let action_calls = Arc::new(AtomicU32::new(0));
        let calls = Arc::clone(&action_calls);

        let report: InjectionReport<u32, FaultError> = engine
            .execute(
                &CancellingBehavior,
                move |_, _| async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(7)
                },
                &ExecutionContext::new(),
                &CancellationToken::new(),
            )
            .await;

        assert_eq!(action_calls.load(Ordering::SeqCst), 0);
        assert_eq!(report.outcome, InjectionOutcome::Cancelled);
        assert_eq!(report.into_result(), Err(FaultError::Cancelled));
    }

    #[tokio::test]
    async fn action_error_passes_through() {
        #[derive(Debug, PartialEq)]
        enum CallError {
            Fault(FaultError),
            Downstream(&'static str),
        }

        impl From<FaultError> for CallError {
            fn from(err: FaultError) -> Self {
                Self::Fault(err)
            }
        }

        let engine = engine(enabled(false), rate(1.0), draw(0.0));
        let report: InjectionReport<u32, CallError> = engine
            .execute(
                &CountingBehavior::default(),
                |_, _| async { Err(CallError::Downstream("boom")) },
                &ExecutionContext::new(),
                &CancellationToken::new(),
            )
            .await;

        assert!(report.is_err());
        assert_eq!(report.into_result(), Err(CallError::Downstream("boom")));
    }

    #[tokio::test]
    async fn each_invocation_draws_once() {
        let mut random = MockRandomSourcePort::new();
        let mut seq = Sequence::new();
        for value in [0.2, 0.4, 0.1] {
            random
                .expect_next_f64()
                .times(1)
                .in_sequence(&mut seq)
                .return_const(value);
        }
        let engine = engine(enabled(true), rate(0.3), random);

        let mut decisions = Vec::new();
        for _ in 0..3 {
            decisions.push(decide(&engine).await);
        }

        assert_eq!(decisions, vec![true, false, true]);
    }

    proptest! {
        #[test]
        fn decision_matches_draw_below_rate(
            rate_value in 0.0f64..=1.0f64,
            draw_value in 0.0f64..1.0f64
        ) {
            let engine = engine(enabled(true), rate(rate_value), draw(draw_value));
            let decision = tokio_test::block_on(decide(&engine));
            prop_assert_eq!(decision, draw_value < rate_value);
        }
    }
}
