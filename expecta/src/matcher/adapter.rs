use std::fmt::{Formatter, Result as FmtResult};
use std::ops::Deref as StdDeref;

use super::{Describe, Matcher};

/// Applies `inner` to the target of a smart pointer argument, for example
/// the `String` inside an `Arc<String>`.
pub fn deref<M>(inner: M) -> Deref<M> {
    Deref(inner)
}

/// Applies `inner` to a part of the argument that `project` selects, for
/// example a single field of a struct.
///
/// ```
/// use expecta::matcher::{field, gt, Matcher};
///
/// struct Request {
///     size: usize,
/// }
///
/// let m = field("size", |r: &Request| r.size, gt(10));
/// assert!(m.matches(&Request { size: 11 }));
/// ```
pub fn field<F, M>(name: &'static str, project: F, inner: M) -> Field<F, M> {
    Field {
        name,
        project,
        inner,
    }
}

#[must_use]
#[derive(Debug, Clone)]
pub struct Deref<M>(M);

impl<T, M> Matcher<T> for Deref<M>
where
    T: StdDeref,
    T::Target: Sized,
    M: Matcher<T::Target>,
{
    fn matches(&self, value: &T) -> bool {
        self.0.matches(&**value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "deref({})", Describe::<T::Target>(&self.0))
    }
}

#[must_use]
#[derive(Debug, Clone)]
pub struct Field<F, M> {
    name: &'static str,
    project: F,
    inner: M,
}

impl<T, U, F, M> Matcher<T> for Field<F, M>
where
    F: Fn(&T) -> U,
    M: Matcher<U>,
{
    fn matches(&self, value: &T) -> bool {
        self.inner.matches(&(self.project)(value))
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}: {}", self.name, Describe::<U>(&self.inner))
    }
}
