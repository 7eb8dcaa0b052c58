//! Application layer - Injection decision and fault orchestration
//!
//! Contains the provider ports, the decision engine and the latency fault
//! behavior. Orchestrates domain objects and infrastructure adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use error::FaultError;
pub use ports::*;
pub use services::*;
