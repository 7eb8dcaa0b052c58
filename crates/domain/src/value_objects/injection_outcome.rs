//! Outcome of an injection decision for one invocation

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

/// What the injector did before running the wrapped action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum InjectionOutcome {
    /// The action ran without added latency
    NotInjected,
    /// The action ran after the given latency was applied
    Injected {
        /// Latency that was slept before the action ran
        latency: Duration,
    },
    /// A fault was decided but the caller cancelled before the action ran
    Cancelled,
}

impl InjectionOutcome {
    /// Check if a fault was applied
    #[must_use]
    pub const fn is_injected(&self) -> bool {
        matches!(self, Self::Injected { .. })
    }

    /// Applied latency, if any
    #[must_use]
    pub const fn latency(&self) -> Option<Duration> {
        match self {
            Self::NotInjected | Self::Cancelled => None,
            Self::Injected { latency } => Some(*latency),
        }
    }
}

impl fmt::Display for InjectionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInjected => write!(f, "not injected"),
            Self::Injected { latency } => write!(f, "injected {latency:?}"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}
