use std::fmt::{Debug, Formatter, Result as FmtResult};

use super::{Describe, Matcher};

/// Wraps `inner` and traces every comparison at `debug` level, including
/// the compared value. Useful to find out why an expectation never matches.
pub fn inspect<M>(inner: M) -> Inspect<M> {
    Inspect(inner)
}

#[must_use]
#[derive(Debug)]
pub struct Inspect<M>(pub M);

impl<T, M> Matcher<T> for Inspect<M>
where
    T: Debug,
    M: Matcher<T>,
{
    fn matches(&self, value: &T) -> bool {
        let matched = self.0.matches(value);

        tracing::debug!(
            matcher = %Describe::<T>(&self.0),
            ?value,
            matched,
            "argument inspected"
        );

        matched
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Matcher::fmt(&self.0, f)
    }
}
