//! Core types shared by the daily goal trackers
//!
//! - `Bounds`: the inclusive range and default of a numeric input
//! - `Severity`: the four classes of status message
//! - `Feedback`: a message with its severity
//! - `Tracker`: the goal/consumed pattern every tracker follows

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive range of accepted values for one input, plus its default
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
    pub default: T,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    pub const fn new(min: T, max: T, default: T) -> Self {
        Self { min, max, default }
    }

    /// Map a value into `[min, max]`
    ///
    /// Values that cannot be compared (NaN) fall back to the default.
    pub fn clamp(&self, value: T) -> T {
        match (value.partial_cmp(&self.min), value.partial_cmp(&self.max)) {
            (None, _) | (_, None) => self.default,
            (Some(std::cmp::Ordering::Less), _) => self.min,
            (_, Some(std::cmp::Ordering::Greater)) => self.max,
            _ => value,
        }
    }

    /// Clamp an optional input, using the default when it is absent
    pub fn resolve(&self, value: Option<T>) -> T {
        value.map(|v| self.clamp(v)).unwrap_or(self.default)
    }

    /// Same range with a different upper limit (for goal-dependent inputs)
    pub fn with_max(self, max: T) -> Self {
        Self { max, ..self }
    }
}

impl Bounds<u32> {
    /// Clamp a signed or oversized count, so `-5` lands on `min` and
    /// anything past `u32::MAX` lands on `max`
    pub fn clamp_wide(&self, value: i64) -> u32 {
        let clamped = value.clamp(i64::from(self.min), i64::from(self.max));
        u32::try_from(clamped).unwrap_or(self.default)
    }

    /// [`Bounds::resolve`] for wide counts
    pub fn resolve_wide(&self, value: Option<i64>) -> u32 {
        value.map(|v| self.clamp_wide(v)).unwrap_or(self.default)
    }
}

/// Severity class of a status message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub severity: Severity,
    pub message: String,
}

impl Feedback {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// A goal paired with today's value, producing one feedback message
pub trait Tracker {
    /// Section heading shown above the tracker's inputs
    fn title(&self) -> &'static str;

    /// Evaluate the current pair
    fn feedback(&self) -> Feedback;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_integers() {
        let bounds = Bounds::new(1000u32, 5000, 2000);
        assert_eq!(bounds.clamp(10), 1000);
        assert_eq!(bounds.clamp(9999), 5000);
        assert_eq!(bounds.clamp(2500), 2500);
    }

    #[test]
    fn test_clamp_nan_uses_default() {
        let bounds = Bounds::new(1.0, 5.0, 2.0);
        assert_eq!(bounds.clamp(f64::NAN), 2.0);
        assert_eq!(bounds.clamp(f64::INFINITY), 5.0);
    }

    #[test]
    fn test_resolve_missing() {
        let bounds = Bounds::new(0u32, 10_000, 0);
        assert_eq!(bounds.resolve(None), 0);
        assert_eq!(bounds.resolve(Some(20_000)), 10_000);
    }

    #[test]
    fn test_with_max() {
        let bounds = Bounds::new(0.0, 5.0, 0.0).with_max(2.0);
        assert_eq!(bounds.max, 2.0);
        assert_eq!(bounds.clamp(2.1), 2.0);
        assert_eq!(bounds.clamp(1.96), 1.96);
    }

    #[test]
    fn test_clamp_wide_counts() {
        let bounds = Bounds::new(0u32, 10_000, 0);
        assert_eq!(bounds.clamp_wide(-5), 0);
        assert_eq!(bounds.clamp_wide(99_999_999_999), 10_000);
        assert_eq!(bounds.clamp_wide(i64::MIN), 0);
        assert_eq!(bounds.clamp_wide(1234), 1234);
        assert_eq!(bounds.resolve_wide(None), 0);
        assert_eq!(bounds.resolve_wide(Some(-1)), 0);
    }

    #[test]
    fn test_severity_serialization() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        assert_eq!(Severity::Info.to_string(), "info");
    }
}
