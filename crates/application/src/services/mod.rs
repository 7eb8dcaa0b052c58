//! Application services - Injection decision and fault application

mod cancellable_delay;
mod inject_latency_policy;
mod injection_engine;
mod latency_fault;

pub use cancellable_delay::cancellable_sleep;
pub use inject_latency_policy::{InjectLatencyPolicy, InjectLatencyPolicyBuilder};
pub use injection_engine::{InjectionEngine, InjectionReport};
pub use latency_fault::LatencyFault;
