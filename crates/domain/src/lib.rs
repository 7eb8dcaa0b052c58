//! Domain layer for latency fault injection
//!
//! Contains the value objects threaded through every injection decision:
//! the per-invocation execution context, the injection rate and the
//! outcome of a decision. This layer has no async or I/O dependencies.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::*;
