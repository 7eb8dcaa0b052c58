//! Value Objects - Immutable, identity-less domain primitives

mod execution_context;
mod injection_outcome;
mod injection_rate;

pub use execution_context::ExecutionContext;
pub use injection_outcome::InjectionOutcome;
pub use injection_rate::{InjectionRate, InvalidInjectionRate};
