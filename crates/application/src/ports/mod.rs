//! Port definitions for application layer
//!
//! Ports are interfaces that define how the injection machinery obtains its
//! per-invocation inputs. Adapters in the infrastructure layer implement these
//! ports; tests substitute deterministic stand-ins.

mod enablement_port;
mod fault_behavior;
mod injection_rate_port;
mod latency_port;
mod random_source_port;

pub use enablement_port::EnablementPort;
#[cfg(test)]
pub use enablement_port::MockEnablementPort;
pub use fault_behavior::FaultBehavior;
pub use injection_rate_port::InjectionRatePort;
#[cfg(test)]
pub use injection_rate_port::MockInjectionRatePort;
pub use latency_port::LatencyPort;
#[cfg(test)]
pub use latency_port::MockLatencyPort;
pub use random_source_port::RandomSourcePort;
#[cfg(test)]
pub use random_source_port::MockRandomSourcePort;
