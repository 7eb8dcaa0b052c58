//! Latency chaos wiring
//!
//! Turns configuration into ready-to-use injection policies.
//!
//! # Overview
//!
//! - `LatencyDistribution`: how an injected delay is chosen
//! - `ChaosFactory`: builds an [`InjectLatencyPolicy`](application::InjectLatencyPolicy)
//!   from a [`LatencyChaosConfig`](crate::config::LatencyChaosConfig)
//!
//! # Example
//!
//! ```ignore
//! use infrastructure::{chaos::ChaosFactory, config::AppConfig};
//!
//! let config = AppConfig::load()?;
//! let policy = ChaosFactory::latency_policy(&config.chaos)?;
//!
//! // Delays 30% of calls when `chaos.injection_rate = 0.3`
//! let user = policy
//!     .execute(|ctx, cancel| async move { repo.find_user(&ctx, &cancel).await }, &ctx, &cancel)
//!     .await?;
//! ```

mod factory;
mod latency_distribution;

pub use factory::ChaosFactory;
pub use latency_distribution::LatencyDistribution;
