//! Human readable durations for matching timeout-like arguments.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Deref;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use parse_duration::{parse, parse::Error};

/// [`std::time::Duration`] that can be parsed from strings like `"1s 500ms"`
/// and compared with plain [`std::time::Duration`] values in both directions,
/// so it can be used as expected value of `eq`, `lt` or `range` matchers.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Duration(pub StdDuration);

impl Duration {
    /// Do not wait at all.
    pub const ZERO: Self = Self(StdDuration::ZERO);

    /// Wait forever.
    pub const MAX: Self = Self(StdDuration::MAX);

    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(StdDuration::from_secs(secs))
    }

    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(StdDuration::from_millis(millis))
    }

    #[must_use]
    pub const fn from_micros(micros: u64) -> Self {
        Self(StdDuration::from_micros(micros))
    }

    /// `true` for [`Duration::MAX`].
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        *self == Self::MAX
    }
}

impl From<StdDuration> for Duration {
    fn from(value: StdDuration) -> Self {
        Self(value)
    }
}

impl From<Duration> for StdDuration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl FromStr for Duration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(Self)
    }
}

/// Prints the duration in the largest unit that represents it exactly.
impl Display for Duration {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let nanos = self.0.as_nanos();

        if self.is_infinite() {
            f.write_str("forever")
        } else if nanos == 0 {
            f.write_str("0s")
        } else if nanos % 1_000_000_000 == 0 {
            write!(f, "{}s", nanos / 1_000_000_000)
        } else if nanos % 1_000_000 == 0 {
            write!(f, "{}ms", nanos / 1_000_000)
        } else if nanos % 1_000 == 0 {
            write!(f, "{}us", nanos / 1_000)
        } else {
            write!(f, "{nanos}ns")
        }
    }
}

impl Deref for Duration {
    type Target = StdDuration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

macro_rules! impl_cmp {
    ($lhs:ty, $rhs:ty, |$a:ident, $b:ident| ($x:expr, $y:expr)) => {
        impl PartialEq<$rhs> for $lhs {
            fn eq(&self, other: &$rhs) -> bool {
                let ($a, $b) = (self, other);
                $x == $y
            }
        }

        impl PartialOrd<$rhs> for $lhs {
            fn partial_cmp(&self, other: &$rhs) -> Option<Ordering> {
                let ($a, $b) = (self, other);
                Some($x.cmp(&$y))
            }
        }
    };
}

impl_cmp!(Duration, StdDuration, |a, b| (a.0, *b));
impl_cmp!(StdDuration, Duration, |a, b| (*a, b.0));
