use std::fmt::{Formatter, Result as FmtResult};

use super::{Describe, Matcher};

/// Wildcard that matches every value (`_` in `expect_call!`).
pub fn any() -> Any {
    Any
}

/// Predicate matcher: the value matches if `f` returns `true` for it.
pub fn closure<F>(f: F) -> Closure<F> {
    Closure(f)
}

/// Inverts the passed matcher.
pub fn not<M>(inner: M) -> Not<M> {
    Not(inner)
}

/// Matches if both `a` and `b` match. Nest calls for more matchers.
pub fn all_of<A, B>(a: A, b: B) -> AllOf<A, B> {
    AllOf(a, b)
}

/// Matches if `a` or `b` matches. Nest calls for more matchers.
pub fn any_of<A, B>(a: A, b: B) -> AnyOf<A, B> {
    AnyOf(a, b)
}

#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct Any;

impl<T> Matcher<T> for Any {
    fn matches(&self, _value: &T) -> bool {
        true
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("_")
    }
}

#[must_use]
#[derive(Debug, Clone)]
pub struct Closure<F>(F);

impl<T, F> Matcher<T> for Closure<F>
where
    F: Fn(&T) -> bool,
{
    fn matches(&self, value: &T) -> bool {
        (self.0)(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("closure(..)")
    }
}

#[must_use]
#[derive(Debug, Clone)]
pub struct Not<M>(M);

impl<T, M> Matcher<T> for Not<M>
where
    M: Matcher<T>,
{
    fn matches(&self, value: &T) -> bool {
        !self.0.matches(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "not({})", Describe::<T>(&self.0))
    }
}

#[must_use]
#[derive(Debug, Clone)]
pub struct AllOf<A, B>(A, B);

impl<T, A, B> Matcher<T> for AllOf<A, B>
where
    A: Matcher<T>,
    B: Matcher<T>,
{
    fn matches(&self, value: &T) -> bool {
        self.0.matches(value) && self.1.matches(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "all_of({}, {})", Describe::<T>(&self.0), Describe::<T>(&self.1))
    }
}

#[must_use]
#[derive(Debug, Clone)]
pub struct AnyOf<A, B>(A, B);

impl<T, A, B> Matcher<T> for AnyOf<A, B>
where
    A: Matcher<T>,
    B: Matcher<T>,
{
    fn matches(&self, value: &T) -> bool {
        self.0.matches(value) || self.1.matches(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "any_of({}, {})", Describe::<T>(&self.0), Describe::<T>(&self.1))
    }
}
