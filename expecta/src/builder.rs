//! The [`builder`](self) module contains the chainable API used to declare a
//! call expectation.

use std::mem::replace;

use crate::action::Action;
use crate::expectation::Expectation;
use crate::times::{at_least, exactly};
use crate::{InSequence, Matcher, Mock, OperationId, Sequence, TimesRange};

/// Builder for a single call expectation.
///
/// The expectation is registered at the mock when the builder is dropped,
/// which is usually at the end of the statement that declared it:
///
/// ```
/// use expecta::{action::Return, matcher::eq, Mock, Operation};
///
/// let mock = Mock::strict("MockStack");
/// let pop = Operation::<(), i32>::new("Stack", "pop");
/// let push = Operation::<i32, ()>::new("Stack", "push");
///
/// mock.expect(&push).with(eq(2)).times(1);
/// mock.expect(&pop).will_once(Return(2));
///
/// mock.invoke(&push, 2);
/// assert_eq!(2, mock.invoke(&pop, ()));
/// ```
///
/// If [`times`](Self::times) is not called, the expected number of calls is
/// derived from the actions: exactly once without actions, exactly `n` times
/// for `n` one-shot actions, and at least `n` times if a repeating action
/// was set as well.
pub struct ExpectationBuilder<'mock, A, R>
where
    A: 'static,
    R: 'static,
{
    mock: &'mock Mock,
    expectation: Expectation<A, R>,
    times_set: bool,
}

impl<'mock, A, R> ExpectationBuilder<'mock, A, R>
where
    A: 'static,
    R: 'static,
{
    pub(crate) fn new(mock: &'mock Mock, operation: OperationId) -> Self {
        let mut expectation = Expectation::new(operation);
        expectation.sequences = InSequence::create_handle().into_iter().collect();

        Self {
            mock,
            expectation,
            times_set: false,
        }
    }

    /// Attach a description to the expectation that is shown in diagnostics.
    pub fn description<S: Into<String>>(mut self, value: S) -> Self {
        self.expectation.description = Some(value.into());

        self
    }

    /// Set the argument pattern of the expectation.
    pub fn with<M>(mut self, matcher: M) -> Self
    where
        M: Matcher<A> + Send + 'static,
    {
        self.expectation.matcher = Some(Box::new(matcher));

        self
    }

    /// Make the expectation the next element of `sequence`, replacing all
    /// other sequences.
    pub fn in_sequence(mut self, sequence: &Sequence) -> Self {
        self.expectation.sequences = vec![sequence.create_handle()];

        self
    }

    /// Make the expectation the next element of `sequence` in addition to
    /// the sequences it is already part of.
    pub fn add_sequence(mut self, sequence: &Sequence) -> Self {
        self.expectation.sequences.push(sequence.create_handle());

        self
    }

    /// Remove the expectation from all sequences.
    pub fn no_sequences(mut self) -> Self {
        self.expectation.sequences.clear();

        self
    }

    /// Set the expected number of calls.
    pub fn times<T: Into<TimesRange>>(mut self, range: T) -> Self {
        self.expectation.times.range = range.into();
        self.times_set = true;

        self
    }

    /// Queue an action for the next matching call. Successive calls of this
    /// method queue the actions in call order.
    pub fn will_once<X>(mut self, action: X) -> Self
    where
        X: Action<A, R> + Send + 'static,
    {
        self.expectation.actions.push_once(action);

        self
    }

    /// Set the action for all matching calls after the one-shot actions are
    /// consumed.
    pub fn will_repeatedly<X>(mut self, action: X)
    where
        X: Action<A, R> + Clone + Send + 'static,
    {
        self.expectation.actions.set_repeatedly(action);
    }

    fn inferred_times(&self) -> TimesRange {
        let once = self.expectation.actions.declared_once();

        if self.expectation.actions.has_repeatedly() {
            at_least(once)
        } else {
            exactly(once.max(1))
        }
    }
}

impl<A, R> Drop for ExpectationBuilder<'_, A, R>
where
    A: 'static,
    R: 'static,
{
    fn drop(&mut self) {
        if !self.times_set {
            self.expectation.times.range = self.inferred_times();
        }

        let operation = self.expectation.operation;
        let expectation = replace(&mut self.expectation, Expectation::new(operation));

        let desc = expectation.to_string();
        for seq_handle in &expectation.sequences {
            seq_handle.set_description(desc.clone());

            if expectation.times.is_ready() {
                seq_handle.set_ready();
            }
        }

        self.mock.register(Box::new(expectation));
    }
}
