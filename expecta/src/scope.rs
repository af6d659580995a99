//! The [`scope`](self) module contains a guard that ties the teardown of a
//! value to the end of a block.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::ops::{Deref, DerefMut};

/// Wrap `value` in a [`Guard`] that calls `teardown` when the guard goes out
/// of scope.
///
/// The teardown runs exactly once on every exit path of the block, including
/// early returns, the `?` operator and unwinding panics.
///
/// ```
/// use expecta::scope::guard;
///
/// let mut log = Vec::new();
/// {
///     let mut lock = guard(&mut log, |log| log.push("give"));
///     lock.push("take");
/// }
///
/// assert_eq!(vec!["take", "give"], log);
/// ```
pub fn guard<T, F>(value: T, teardown: F) -> Guard<T, F>
where
    F: FnOnce(&mut T),
{
    Guard {
        value: Some(value),
        teardown: Some(teardown),
    }
}

/// Scope guard returned by [`guard`].
#[must_use = "the teardown runs immediately if the guard is not bound to a variable"]
pub struct Guard<T, F>
where
    F: FnOnce(&mut T),
{
    /// `None` only after `dismiss` moved the value out.
    value: Option<T>,
    teardown: Option<F>,
}

impl<T, F> Guard<T, F>
where
    F: FnOnce(&mut T),
{
    /// Return the guarded value without running the teardown.
    pub fn dismiss(mut self) -> T {
        self.teardown = None;

        match self.value.take() {
            Some(value) => value,
            None => unreachable!("guarded value is only taken by `dismiss`"),
        }
    }
}

impl<T, F> Deref for Guard<T, F>
where
    F: FnOnce(&mut T),
{
    type Target = T;

    fn deref(&self) -> &Self::Target {
        match &self.value {
            Some(value) => value,
            None => unreachable!("guarded value is only taken by `dismiss`"),
        }
    }
}

impl<T, F> DerefMut for Guard<T, F>
where
    F: FnOnce(&mut T),
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        match &mut self.value {
            Some(value) => value,
            None => unreachable!("guarded value is only taken by `dismiss`"),
        }
    }
}

impl<T, F> Debug for Guard<T, F>
where
    T: Debug,
    F: FnOnce(&mut T),
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_tuple("Guard").field(&self.value).finish()
    }
}

impl<T, F> Drop for Guard<T, F>
where
    F: FnOnce(&mut T),
{
    fn drop(&mut self) {
        if let (Some(teardown), Some(value)) = (self.teardown.take(), self.value.as_mut()) {
            teardown(value);
        }
    }
}
