//! Logging infrastructure
//!
//! Installs a `tracing` subscriber for the injection machinery's structured
//! events (decisions, injected latency, cancellations).

mod logging;

pub use logging::{LoggingConfig, TelemetryError, init_logging};
