use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::ops::{Bound, RangeBounds};

use crate::Matcher;

/// Matches values contained in `range`. Any range syntax works: `3..7`,
/// `3..=7`, `3..`, `..7` and `..=7`.
pub fn range<R, T>(range: R) -> Range<T>
where
    R: RangeBounds<T>,
    T: Clone,
{
    Range {
        lower: range.start_bound().cloned(),
        upper: range.end_bound().cloned(),
    }
}

#[must_use]
#[derive(Debug, Clone)]
pub struct Range<T> {
    lower: Bound<T>,
    upper: Bound<T>,
}

impl<T, U> Matcher<U> for Range<T>
where
    T: Debug,
    U: PartialOrd<T>,
{
    fn matches(&self, value: &U) -> bool {
        let above = match &self.lower {
            Bound::Included(x) => *value >= *x,
            Bound::Excluded(x) => *value > *x,
            Bound::Unbounded => true,
        };

        let below = match &self.upper {
            Bound::Included(x) => *value <= *x,
            Bound::Excluded(x) => *value < *x,
            Bound::Unbounded => true,
        };

        above && below
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("range(")?;

        match &self.lower {
            Bound::Included(x) | Bound::Excluded(x) => write!(f, "{x:?}")?,
            Bound::Unbounded => (),
        }

        match &self.upper {
            Bound::Included(x) => write!(f, "..={x:?}")?,
            Bound::Excluded(x) => write!(f, "..{x:?}")?,
            Bound::Unbounded => f.write_str("..")?,
        }

        f.write_str(")")
    }
}
