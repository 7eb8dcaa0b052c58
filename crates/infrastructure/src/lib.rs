//! Infrastructure layer - Adapters, configuration and logging
//!
//! Implements ports defined in the application layer.
//! Contains provider adapters, latency distributions, configuration loading
//! and the tracing subscriber setup.

pub mod adapters;
pub mod chaos;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use chaos::{ChaosFactory, LatencyDistribution};
pub use config::{AppConfig, LatencyChaosConfig};
pub use telemetry::{LoggingConfig, TelemetryError, init_logging};
