//! Adapters implementing the application ports
//!
//! - constant providers backed by fixed configuration values
//! - closure-backed providers for dynamic decisions
//! - random sources (thread-local, seeded, fixed sequence)
//! - latency sampled from a [`LatencyDistribution`](crate::chaos::LatencyDistribution)

mod constant_providers;
mod distribution_latency;
mod fn_provider;
mod random_source;

pub use constant_providers::{ConstantEnabled, ConstantInjectionRate, ConstantLatency};
pub use distribution_latency::DistributionLatency;
pub use fn_provider::ProviderFn;
pub use random_source::{SeededRandomSource, SequenceRandomSource, ThreadRandomSource};
