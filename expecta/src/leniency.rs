//! The [`leniency`](self) module defines how a mock reacts to calls that no
//! expectation accepted.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Policy of a mock instance for unexpected calls.
///
/// The policy only changes the severity of unexpected calls. Expectations
/// that were called too often or not often enough always fail verification.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Leniency {
    /// Unexpected calls fail the test immediately.
    Strict,

    /// Unexpected calls are logged as warning, the test does not fail.
    #[default]
    Naggy,

    /// Unexpected calls are silently ignored.
    Nice,
}

/// Severity of an unexpected call under a specific [`Leniency`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Severity {
    /// The call is a failure.
    Fatal,

    /// The call is reported, but is no failure.
    Warning,

    /// The call is ignored.
    Silent,
}

impl Leniency {
    /// Severity of an unexpected call under this policy.
    #[must_use]
    pub fn unexpected_call_severity(self) -> Severity {
        match self {
            Self::Strict => Severity::Fatal,
            Self::Naggy => Severity::Warning,
            Self::Nice => Severity::Silent,
        }
    }
}

impl Display for Leniency {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Naggy => write!(f, "naggy"),
            Self::Nice => write!(f, "nice"),
        }
    }
}

/// Error returned when parsing an unknown [`Leniency`] name.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("unknown leniency `{0}`, expected one of `strict`, `naggy` or `nice`")]
pub struct UnknownLeniency(pub String);

impl FromStr for Leniency {
    type Err = UnknownLeniency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "naggy" | "default" => Ok(Self::Naggy),
            "nice" => Ok(Self::Nice),
            _ => Err(UnknownLeniency(s.to_owned())),
        }
    }
}
