//! Latency distributions for injected delays
//!
//! Describes how an injected delay is chosen. All durations are expressed in
//! milliseconds so the distribution can be written directly in configuration.
//! The `Duration` constructors truncate to whole milliseconds: anything below
//! 1ms becomes 0ms.

use std::time::Duration;

use domain::DomainError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Distribution an injected latency is sampled from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LatencyDistribution {
    /// Always the same latency
    Constant {
        /// Latency in milliseconds
        latency_ms: u64,
    },
    /// Uniformly distributed between `min_ms` and `max_ms` (inclusive)
    Uniform {
        /// Lower bound in milliseconds
        min_ms: u64,
        /// Upper bound in milliseconds
        max_ms: u64,
    },
    /// Normal (Gaussian) distribution, truncated at zero
    Normal {
        /// Mean in milliseconds
        mean_ms: u64,
        /// Standard deviation in milliseconds
        std_dev_ms: u64,
    },
    /// Exponential distribution with the given mean, capped at `max_ms`
    Exponential {
        /// Mean in milliseconds
        mean_ms: u64,
        /// Cap in milliseconds
        max_ms: u64,
    },
}

impl LatencyDistribution {
    /// Create a constant latency (no variation)
    ///
    /// Truncated to whole milliseconds.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn constant(latency: Duration) -> Self {
        Self::Constant {
            latency_ms: latency.as_millis() as u64,
        }
    }

    /// Create a uniformly distributed latency range
    ///
    /// Both bounds are truncated to whole milliseconds.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn uniform(min: Duration, max: Duration) -> Self {
        Self::Uniform {
            min_ms: min.as_millis() as u64,
            max_ms: max.as_millis() as u64,
        }
    }

    /// Create a normally distributed latency (bell curve)
    ///
    /// Mean and deviation are truncated to whole milliseconds.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn normal(mean: Duration, std_dev: Duration) -> Self {
        Self::Normal {
            mean_ms: mean.as_millis() as u64,
            std_dev_ms: std_dev.as_millis() as u64,
        }
    }

    /// Create an exponentially distributed latency capped at `max`
    ///
    /// Mean and cap are truncated to whole milliseconds.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn exponential(mean: Duration, max: Duration) -> Self {
        Self::Exponential {
            mean_ms: mean.as_millis() as u64,
            max_ms: max.as_millis() as u64,
        }
    }

    /// Check the parameters are usable
    pub fn validate(&self) -> Result<(), DomainError> {
        match *self {
            Self::Constant { .. } | Self::Normal { .. } => Ok(()),
            Self::Uniform { min_ms, max_ms } if min_ms > max_ms => {
                Err(DomainError::ValidationError(format!(
                    "uniform latency min ({min_ms}ms) exceeds max ({max_ms}ms)"
                )))
            },
            Self::Uniform { .. } => Ok(()),
            Self::Exponential { mean_ms, max_ms } if mean_ms > max_ms => {
                Err(DomainError::ValidationError(format!(
                    "exponential latency mean ({mean_ms}ms) exceeds max ({max_ms}ms)"
                )))
            },
            Self::Exponential { .. } => Ok(()),
        }
    }

    /// Sample a latency value from this distribution
    #[allow(clippy::cast_precision_loss)]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        match *self {
            Self::Constant { latency_ms } => Duration::from_millis(latency_ms),
            Self::Uniform { min_ms, max_ms } => {
                let (low, high) = if min_ms <= max_ms {
                    (min_ms, max_ms)
                } else {
                    (max_ms, min_ms)
                };
                if low == high {
                    return Duration::from_millis(low);
                }
                Duration::from_millis(rng.random_range(low..=high))
            },
            Self::Normal {
                mean_ms,
                std_dev_ms,
            } => {
                // Box-Muller transform; u1 is kept in (0, 1] so ln() stays finite
                let u1 = 1.0 - rng.random::<f64>();
                let u2: f64 = rng.random();
                let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
                let sample = (std_dev_ms as f64).mul_add(z0, mean_ms as f64);

                from_millis_f64(sample.max(0.0))
            },
            Self::Exponential { mean_ms, max_ms } => {
                if mean_ms == 0 {
                    return Duration::ZERO;
                }
                let u = 1.0 - rng.random::<f64>();
                let sample = -u.ln() * mean_ms as f64;

                from_millis_f64(sample.min(max_ms as f64))
            },
        }
    }
}

impl Default for LatencyDistribution {
    fn default() -> Self {
        Self::Uniform {
            min_ms: 100,
            max_ms: 500,
        }
    }
}

fn from_millis_f64(millis: f64) -> Duration {
    Duration::try_from_secs_f64(millis / 1000.0).unwrap_or(Duration::ZERO)
}
