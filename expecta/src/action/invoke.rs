use std::fmt::{Debug, Formatter, Result as FmtResult};

use super::Action;

/// Creates an [`Invoke`] action that forwards the call arguments to `func`.
pub fn invoke<F>(func: F) -> Invoke<F> {
    Invoke(func)
}

/// Creates an [`InvokeWithoutArgs`] action that calls `func` and drops the
/// call arguments.
pub fn invoke_without_args<F>(func: F) -> InvokeWithoutArgs<F> {
    InvokeWithoutArgs(func)
}

/// Creates a [`PanicWith`] action that fails the call with `message`.
pub fn panic_with<S: Into<String>>(message: S) -> PanicWith {
    PanicWith(message.into())
}

/// Calls the wrapped function with the call arguments.
#[derive(Clone, Copy)]
pub struct Invoke<F>(pub F);

impl<F, A, R> Action<A, R> for Invoke<F>
where
    F: FnOnce(A) -> R,
{
    fn exec(self, args: A) -> R {
        (self.0)(args)
    }
}

impl<F> Debug for Invoke<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Invoke(..)")
    }
}

/// Calls the wrapped function without arguments.
#[derive(Clone, Copy)]
pub struct InvokeWithoutArgs<F>(pub F);

impl<F, A, R> Action<A, R> for InvokeWithoutArgs<F>
where
    F: FnOnce() -> R,
{
    fn exec(self, _args: A) -> R {
        (self.0)()
    }
}

impl<F> Debug for InvokeWithoutArgs<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("InvokeWithoutArgs(..)")
    }
}

/// Panics with the wrapped message, for code under test that is expected to
/// survive a failing dependency.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PanicWith(pub String);

impl<A, R> Action<A, R> for PanicWith {
    fn exec(self, _args: A) -> R {
        panic!("{}", self.0)
    }
}
