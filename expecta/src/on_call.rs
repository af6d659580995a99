//! The [`on_call`](self) module contains the default actions of a mock.
//!
//! A default action answers calls that are not answered by an expectation,
//! either because no expectation matched a lenient call or because the
//! matching expectation has no action left. Default actions never take part
//! in verification.

use std::any::Any;

use crate::action::{Action, RepeatableAction};
use crate::{Matcher, Mock, OperationId};

/// Default action for the operation with the arguments `A` and the return type `R`.
pub struct DefaultAction<A, R> {
    operation: OperationId,
    matcher: Option<Box<dyn Matcher<A> + Send>>,
    action: Box<dyn RepeatableAction<A, R> + Send>,
}

impl<A, R> DefaultAction<A, R> {
    /// Returns `true` if `args` match the argument pattern of this default action.
    pub fn matches(&self, args: &A) -> bool {
        self.matcher.as_ref().map_or(true, |m| m.matches(args))
    }

    /// Execute the default action.
    pub fn exec(&mut self, args: A) -> R {
        self.action.exec_again(args)
    }
}

/// Type erased [`DefaultAction`], as stored inside a mock.
pub trait ErasedDefaultAction: Send {
    /// The operation this default action belongs to.
    fn operation(&self) -> OperationId;

    /// Access to the concrete type.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<A, R> ErasedDefaultAction for DefaultAction<A, R>
where
    A: 'static,
    R: 'static,
{
    fn operation(&self) -> OperationId {
        self.operation
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Builder for a [`DefaultAction`].
///
/// The default action is registered by [`will_by_default`](Self::will_by_default).
/// Like expectations, later default actions shadow earlier ones.
#[must_use = "the default action is only registered by `will_by_default`"]
pub struct OnCallBuilder<'mock, A, R> {
    mock: &'mock Mock,
    operation: OperationId,
    matcher: Option<Box<dyn Matcher<A> + Send>>,
    _marker: std::marker::PhantomData<fn() -> R>,
}

impl<'mock, A, R> OnCallBuilder<'mock, A, R>
where
    A: 'static,
    R: 'static,
{
    pub(crate) fn new(mock: &'mock Mock, operation: OperationId) -> Self {
        Self {
            mock,
            operation,
            matcher: None,
            _marker: std::marker::PhantomData,
        }
    }

    /// Restrict the default action to calls whose arguments match `matcher`.
    pub fn with<M>(mut self, matcher: M) -> Self
    where
        M: Matcher<A> + Send + 'static,
    {
        self.matcher = Some(Box::new(matcher));

        self
    }

    /// Register `action` as default action.
    pub fn will_by_default<X>(self, action: X)
    where
        X: Action<A, R> + Clone + Send + 'static,
    {
        let Self {
            mock,
            operation,
            matcher,
            _marker,
        } = self;

        mock.register_default(Box::new(DefaultAction {
            operation,
            matcher,
            action: Box::new(action),
        }));
    }
}
