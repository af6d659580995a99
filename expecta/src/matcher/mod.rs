//! The [`matcher`](self) module contains the argument matchers that decide
//! whether the arguments of a call satisfy the pattern of a call expectation.

mod adapter;
mod compare;
mod inspect;
mod logic;
mod pattern;
mod range;
mod string;

use std::fmt::{Display, Formatter, Result as FmtResult};

pub use adapter::{deref, field, Deref, Field};
pub use compare::{eq, ge, gt, le, lt, ne, Compare, Equals, Relation};
pub use inspect::{inspect, Inspect};
pub use logic::{all_of, any, any_of, closure, not, AllOf, Any, AnyOf, Closure, Not};
pub use pattern::{multi, no_args, Multi, NoArgs, Positions};
pub use range::{range, Range};
pub use string::{
    contains as str_contains, ends_with as str_ends_with, eq_ignore_case as str_eq_ignore_case,
    is_empty, starts_with as str_starts_with, Text,
};

/// A matcher is used to check if the passed argument matches a pre-defined
/// expectation. It is mostly used to verify the arguments to an expected call.
pub trait Matcher<T> {
    /// Returns `true` if the passed `value` matches the expectations, `false`
    /// otherwise.
    fn matches(&self, value: &T) -> bool;

    /// Write a human readable representation of the matcher to the passed
    /// formatter.
    ///
    /// # Errors
    /// Returns an error if writing to the formatter failed.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult;
}

/// [`Display`] adapter for any [`Matcher`].
pub struct Describe<'a, T>(pub &'a dyn Matcher<T>);

impl<T> Display for Describe<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Matcher::fmt(self.0, f)
    }
}
