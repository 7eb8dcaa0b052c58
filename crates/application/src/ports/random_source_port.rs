//! Random source port

use std::fmt;

#[cfg(test)]
use mockall::automock;

/// Source of the uniform draw compared against the injection rate
///
/// Shared by every concurrent invocation of a policy, so implementations
/// must be safe for concurrent use.
#[cfg_attr(test, automock)]
pub trait RandomSourcePort: Send + Sync + fmt::Debug {
    /// Uniform sample in `[0.0, 1.0)`
    fn next_f64(&self) -> f64;
}
