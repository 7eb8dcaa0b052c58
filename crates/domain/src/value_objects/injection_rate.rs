//! Injection rate value object
//!
//! Represents a validated probability (0.0-1.0) that a fault is injected
//! into a single invocation.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::InjectionRate;
//!
//! let rate = InjectionRate::new(0.3).expect("valid rate");
//! assert!((rate.value() - 0.3).abs() < f64::EPSILON);
//!
//! // Out-of-range values are rejected
//! assert!(InjectionRate::new(1.5).is_err());
//!
//! // Or clamped
//! assert!((InjectionRate::clamped(1.5).value() - 1.0).abs() < f64::EPSILON);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when an injection rate is outside `[0.0, 1.0]` or NaN
#[derive(Debug, Clone, Copy, Error, PartialEq)]
#[error("invalid injection rate: {0} is out of range (must be 0.0-1.0)")]
pub struct InvalidInjectionRate(f64);

impl InvalidInjectionRate {
    /// Wrap the rejected value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// The value that was rejected
    pub const fn value(&self) -> f64 {
        self.0
    }
}

/// Probability that a fault is injected into an invocation
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct InjectionRate(f64);

impl InjectionRate {
    /// Never inject
    pub const NEVER: Self = Self(0.0);

    /// Inject on every invocation
    pub const ALWAYS: Self = Self(1.0);

    /// Create a new validated injection rate
    ///
    /// # Errors
    ///
    /// Returns `InvalidInjectionRate` if the value is NaN or outside `[0.0, 1.0]`.
    pub fn new(value: f64) -> Result<Self, InvalidInjectionRate> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidInjectionRate(value))
        }
    }

    /// Create an injection rate, clamping to the valid range
    ///
    /// NaN is treated as `0.0`.
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            Self::NEVER
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// Get the rate as an `f64`
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Check whether this rate can never inject
    #[must_use]
    pub fn is_never(self) -> bool {
        self.0 <= 0.0
    }
}

impl Default for InjectionRate {
    fn default() -> Self {
        Self::NEVER
    }
}

impl fmt::Display for InjectionRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

impl TryFrom<f64> for InjectionRate {
    type Error = InvalidInjectionRate;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<InjectionRate> for f64 {
    fn from(rate: InjectionRate) -> Self {
        rate.0
    }
}

/// Custom deserialization that validates the rate
impl<'de> Deserialize<'de> for InjectionRate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_bounds() {
        assert!(InjectionRate::new(0.0).is_ok());
        assert!(InjectionRate::new(0.5).is_ok());
        assert!(InjectionRate::new(1.0).is_ok());
    }

    #[test]
    fn new_rejects_out_of_range() {
        let result = InjectionRate::new(1.01);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "invalid injection rate: 1.01 is out of range (must be 0.0-1.0)"
        );
        assert!(InjectionRate::new(-0.1).is_err());
    }

    #[test]
    fn new_rejects_nan() {
        assert!(InjectionRate::new(f64::NAN).is_err());
    }

    #[test]
    fn clamped_values() {
        assert!((InjectionRate::clamped(-3.0).value() - 0.0).abs() < f64::EPSILON);
        assert!((InjectionRate::clamped(0.25).value() - 0.25).abs() < f64::EPSILON);
        assert!((InjectionRate::clamped(7.0).value() - 1.0).abs() < f64::EPSILON);
        assert!(InjectionRate::clamped(f64::NAN).is_never());
    }

    #[test]
    fn display_as_percentage() {
        assert_eq!(InjectionRate::new(0.3).unwrap().to_string(), "30.0%");
        assert_eq!(InjectionRate::ALWAYS.to_string(), "100.0%");
    }

    #[test]
    fn default_never_injects() {
        assert!(InjectionRate::default().is_never());
        assert!(!InjectionRate::ALWAYS.is_never());
    }

    #[test]
    fn serialization() {
        let json = serde_json::to_string(&InjectionRate::new(0.25).unwrap()).unwrap();
        assert_eq!(json, "0.25");
    }

    #[test]
    fn deserialization_validates() {
        let rate: InjectionRate = serde_json::from_str("0.75").unwrap();
        assert!((rate.value() - 0.75).abs() < f64::EPSILON);

        let result: Result<InjectionRate, _> = serde_json::from_str("2.0");
        assert!(result.is_err());
    }

    #[test]
    fn json_round_trip_is_exact() {
        let rate = InjectionRate::new(0.242_749_073_957_493_54).unwrap();
        let json = serde_json::to_string(&rate).unwrap();
        let parsed: InjectionRate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.value().to_bits(), rate.value().to_bits());
    }

    #[test]
    fn try_from_and_into_f64() {
        let rate = InjectionRate::try_from(0.4).unwrap();
        let value: f64 = rate.into();
        assert!((value - 0.4).abs() < f64::EPSILON);
        assert!(InjectionRate::try_from(-1.0).is_err());
    }
}
