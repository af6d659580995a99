use std::marker::PhantomData;

use crate::Pointee;

use super::Action;

/// Creates a [`Return`] action that returns the passed `value` when called.
pub fn return_<T>(value: T) -> Return<T> {
    Return(value)
}

/// Creates a [`ReturnPointee`] action that returns the value `pointee`
/// points to at the time of the call, instead of the time of declaration.
pub fn return_pointee<P>(pointee: P) -> ReturnPointee<P> {
    ReturnPointee(pointee)
}

/// Creates a [`ReturnDefault`] action that returns `T::default()`.
#[must_use]
pub fn return_default<T: Default>() -> ReturnDefault<T> {
    ReturnDefault(PhantomData)
}

/// Returns the wrapped value.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Return<T>(pub T);

impl<A, T> Action<A, T> for Return<T> {
    fn exec(self, _args: A) -> T {
        self.0
    }
}

/// Returns the current value behind a [`Pointee`].
#[derive(Debug, Clone)]
pub struct ReturnPointee<P>(pub P);

impl<A, P, T> Action<A, T> for ReturnPointee<P>
where
    P: Pointee<T>,
{
    fn exec(self, _args: A) -> T {
        self.0.current()
    }
}

/// Returns the default value of `T`, even if a default action of the
/// operation would answer differently.
#[derive(Debug)]
pub struct ReturnDefault<T>(PhantomData<fn() -> T>);

impl<T> Clone for ReturnDefault<T> {
    fn clone(&self) -> Self {
        Self(PhantomData)
    }
}

impl<A, T> Action<A, T> for ReturnDefault<T>
where
    T: Default,
{
    fn exec(self, _args: A) -> T {
        T::default()
    }
}
