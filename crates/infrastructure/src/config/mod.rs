//! Application configuration
//!
//! Split into focused sub-modules:
//! - `chaos`: latency injection settings
//!
//! Logging settings live next to the subscriber setup in
//! [`crate::telemetry`].

mod chaos;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use chaos::LatencyChaosConfig;

use crate::telemetry::LoggingConfig;

/// Environment variable prefix, e.g. `LATENCY_MONKEY_CHAOS__INJECTION_RATE=0.5`
const ENV_PREFIX: &str = "LATENCY_MONKEY";

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Latency injection settings
    #[serde(default)]
    pub chaos: LatencyChaosConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// Sources, later ones overriding earlier ones:
    /// 1. built-in defaults
    /// 2. `config.toml` in the working directory, if present
    /// 3. `LATENCY_MONKEY_*` environment variables, with `__` between nested keys
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = Self::defaults()?
            .add_source(config::File::with_name("config").required(false))
            .add_source(environment());

        Self::finish(builder)
    }

    /// Load configuration from an explicit file, then the environment
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let builder = Self::defaults()?
            .add_source(config::File::from(path.as_ref()).required(true))
            .add_source(environment());

        Self::finish(builder)
    }

    /// Parse configuration from a TOML document, without environment overrides
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        let builder = Self::defaults()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml));

        Self::finish(builder)
    }

    /// Check every section is consistent
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        self.chaos
            .validate()
            .map_err(|e| config::ConfigError::Message(format!("chaos: {e}")))
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError>
    {
        config::Config::builder()
            .set_default("chaos.enabled", false)?
            .set_default("logging.log_filter", "info")?
            .set_default("logging.json", false)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, config::ConfigError> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;

        debug!(
            chaos_enabled = config.chaos.enabled,
            injection_rate = config.chaos.injection_rate.value(),
            "Configuration loaded"
        );
        Ok(config)
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
