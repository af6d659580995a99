//! The [`times`](self) module contains the cardinality of a call expectation:
//! how often it has to be called and how often it may be called.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{
    Bound, Range, RangeBounds, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

/// Call counter of a single expectation together with its expected range.
#[derive(Default, Debug)]
pub struct Times {
    /// Number of calls the expectation has accepted so far.
    pub count: usize,

    /// Expected number of calls.
    pub range: TimesRange,
}

impl Times {
    /// Create a new counter for the passed `range`.
    pub fn new<R: Into<TimesRange>>(range: R) -> Self {
        Self {
            count: 0,
            range: range.into(),
        }
    }

    /// Count one more call and return the number of calls before it.
    pub fn increment(&mut self) -> usize {
        let prev = self.count;
        self.count += 1;

        prev
    }

    /// `true` once the lower limit is reached.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.count >= self.range.min
    }

    /// `true` once the upper limit is reached. A saturated expectation
    /// must not accept further calls.
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self.range.max, Some(max) if self.count >= max)
    }

    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.range.contains(self.count)
    }
}

/// Closed interval `[min, max]` of acceptable call counts. `max` is `None`
/// for an unlimited interval.
///
/// Every way of building a range (numbers, std ranges, the helper functions
/// of this module) is normalized into this form, so equal intervals compare
/// equal no matter how they were written.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct TimesRange {
    min: usize,
    max: Option<usize>,
}

impl TimesRange {
    /// Smallest call count within the range.
    #[must_use]
    pub fn min(&self) -> usize {
        self.min
    }

    /// Largest call count within the range, `None` if unlimited.
    #[must_use]
    pub fn max(&self) -> Option<usize> {
        self.max
    }

    #[must_use]
    pub fn contains(&self, count: usize) -> bool {
        count >= self.min && self.max.map_or(true, |max| count <= max)
    }

    fn from_bounds<R: RangeBounds<usize>>(range: &R) -> Self {
        let min = match range.start_bound() {
            Bound::Unbounded => 0,
            Bound::Included(&x) => x,
            Bound::Excluded(&x) => x + 1,
        };
        let max = match range.end_bound() {
            Bound::Unbounded => None,
            Bound::Included(&x) => Some(x),
            Bound::Excluded(&x) => Some(x.saturating_sub(1)),
        };

        Self::checked(min, max)
    }

    fn checked(min: usize, max: Option<usize>) -> Self {
        if let Some(max) = max {
            assert!(
                min <= max,
                "invalid call count range: lower bound {min} exceeds upper bound {max}"
            );
        }

        Self { min, max }
    }
}

impl Display for TimesRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let unit = |n: usize| if n == 1 { "time" } else { "times" };

        match (self.min, self.max) {
            (0, None) => f.write_str("any number of times"),
            (min, None) => write!(f, "at least {min} {}", unit(min)),
            (min, Some(max)) if min == max => write!(f, "exactly {min} {}", unit(min)),
            (0, Some(max)) => write!(f, "at most {max} {}", unit(max)),
            (min, Some(max)) => write!(f, "between {min} and {max} times"),
        }
    }
}

impl From<usize> for TimesRange {
    fn from(value: usize) -> Self {
        exactly(value)
    }
}

macro_rules! impl_from_range {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for TimesRange {
                fn from(value: $ty) -> Self {
                    Self::from_bounds(&value)
                }
            }
        )*
    };
}

impl_from_range!(
    Range<usize>,
    RangeFrom<usize>,
    RangeFull,
    RangeInclusive<usize>,
    RangeTo<usize>,
    RangeToInclusive<usize>
);

/// Expect exactly `n` calls.
#[must_use]
pub fn exactly(n: usize) -> TimesRange {
    TimesRange {
        min: n,
        max: Some(n),
    }
}

/// Expect `n` or more calls.
#[must_use]
pub fn at_least(n: usize) -> TimesRange {
    TimesRange { min: n, max: None }
}

/// Expect no more than `n` calls.
#[must_use]
pub fn at_most(n: usize) -> TimesRange {
    TimesRange {
        min: 0,
        max: Some(n),
    }
}

/// Expect between `min` and `max` calls, both inclusive.
///
/// # Panics
/// Panics if `min` is greater than `max`.
#[must_use]
pub fn between(min: usize, max: usize) -> TimesRange {
    TimesRange::checked(min, Some(max))
}

/// Accept any number of calls, including none.
#[must_use]
pub fn any_number() -> TimesRange {
    TimesRange::default()
}
