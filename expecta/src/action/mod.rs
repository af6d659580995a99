//! The [`action`](self) module contains the responses of a call expectation
//! and the [`ActionQueue`] that hands them out to successive matching calls.
//!
//! Every closure `FnOnce(A) -> R` is an action. The arguments follow the
//! convention of the crate: `()` for no arguments, the bare value for one
//! argument and a tuple for more.

mod invoke;
mod queue;
mod returns;

pub use invoke::{invoke, invoke_without_args, panic_with, Invoke, InvokeWithoutArgs, PanicWith};
pub use queue::ActionQueue;
pub use returns::{return_, return_default, return_pointee, Return, ReturnDefault, ReturnPointee};

/// Response to a single call.
pub trait Action<A, R> {
    /// Consume the action and produce the result of the call.
    fn exec(self, args: A) -> R;
}

impl<X, A, R> Action<A, R> for X
where
    X: FnOnce(A) -> R,
{
    fn exec(self, args: A) -> R {
        self(args)
    }
}

/// Object safe form of [`Action`], a boxed one-shot response.
pub trait OnceAction<A, R> {
    /// Execute the boxed action.
    fn exec_once(self: Box<Self>, args: A) -> R;
}

impl<X, A, R> OnceAction<A, R> for X
where
    X: Action<A, R>,
{
    fn exec_once(self: Box<Self>, args: A) -> R {
        (*self).exec(args)
    }
}

/// Response that answers any number of calls. Every call executes a fresh
/// clone of the action.
pub trait RepeatableAction<A, R> {
    /// Produce the result of the next call.
    fn exec_again(&mut self, args: A) -> R;
}

impl<X, A, R> RepeatableAction<A, R> for X
where
    X: Action<A, R> + Clone,
{
    fn exec_again(&mut self, args: A) -> R {
        self.clone().exec(args)
    }
}
