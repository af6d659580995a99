//! The [`expectation`](self) module contains the record of a single call
//! expectation and its type erased form stored inside a mock.

use std::any::Any;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

use crate::action::ActionQueue;
use crate::error::Violation;
use crate::matcher::{Describe, Matcher};
use crate::{OperationId, SequenceHandle, Times};

/// Result of offering a call to an [`Expectation`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Match {
    /// The expectation accepted the call.
    Accepted,

    /// The arguments do not match the pattern of the expectation.
    Mismatch,

    /// The arguments match, but the expectation was already called the
    /// maximum number of times.
    Saturated,

    /// The arguments match, but one of the sequences of the expectation does
    /// not allow the call yet (or anymore).
    OutOfSequence,
}

/// Record of a single call expectation for the operation with the arguments
/// `A` and the return type `R`.
pub struct Expectation<A, R> {
    /// The operation this expectation belongs to.
    pub operation: OperationId,

    /// Expected and observed number of calls.
    pub times: Times,

    /// Optional description, for example the source location of the declaration.
    pub description: Option<String>,

    /// Argument pattern. `None` matches any arguments.
    pub matcher: Option<Box<dyn Matcher<A> + Send>>,

    /// Responses for the matching calls.
    pub actions: ActionQueue<A, R>,

    /// Handles of the sequences this expectation is part of.
    pub sequences: Vec<SequenceHandle>,
}

impl<A, R> Expectation<A, R> {
    /// Create a new expectation for `operation` that matches any arguments
    /// and may be called any number of times.
    #[must_use]
    pub fn new(operation: OperationId) -> Self {
        Self {
            operation,
            times: Times::default(),
            description: None,
            matcher: None,
            actions: ActionQueue::new(),
            sequences: Vec::new(),
        }
    }

    /// Returns `true` if `args` match the argument pattern.
    pub fn matches(&self, args: &A) -> bool {
        self.matcher.as_ref().map_or(true, |m| m.matches(args))
    }

    /// Offer a call with `args` to this expectation.
    ///
    /// If the call is accepted the call count is incremented and the
    /// sequences of the expectation are updated. The caller is expected to
    /// execute the next action afterwards.
    pub fn try_match(&mut self, args: &A) -> Match {
        if !self.matches(args) {
            return Match::Mismatch;
        }

        if self.times.is_done() {
            return Match::Saturated;
        }

        if !self.sequences.iter().all(SequenceHandle::is_active) {
            return Match::OutOfSequence;
        }

        for seq_handle in &self.sequences {
            seq_handle.activate();
        }

        self.times.increment();
        if self.times.is_ready() {
            for seq_handle in &self.sequences {
                seq_handle.set_ready();
            }
        }

        Match::Accepted
    }

    /// Descriptions of unsatisfied expectations that block this one in its sequences.
    #[must_use]
    pub fn unsatisfied(&self) -> Vec<String> {
        self.sequences
            .iter()
            .flat_map(SequenceHandle::unsatisfied)
            .collect()
    }
}

impl<A, R> Display for Expectation<A, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.operation)?;

        if let Some(m) = &self.matcher {
            write!(f, "({})", Describe(&**m))?;
        } else {
            write!(f, "(..)")?;
        }

        if let Some(d) = &self.description {
            write!(f, " {d}")?;
        }

        Ok(())
    }
}

impl<A, R> Debug for Expectation<A, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Expectation")
            .field("operation", &self.operation)
            .field("times", &self.times)
            .field("description", &self.description)
            .field("actions", &self.actions)
            .field("sequences", &self.sequences.len())
            .finish_non_exhaustive()
    }
}

/// Type erased call expectation, as stored inside a mock.
pub trait ErasedExpectation: Display + Send {
    /// The operation this expectation belongs to.
    fn operation(&self) -> OperationId;

    /// Expected and observed number of calls.
    fn times(&self) -> &Times;

    /// Returns `true` if this expectation is ready, `false` otherwise.
    ///
    /// Ready means that the expectation was executed the minimum amount of times.
    fn is_ready(&self) -> bool {
        self.times().is_ready()
    }

    /// Mark this expectation as done in all its sequences.
    ///
    /// Done means that this expectation has been finished and will not called again.
    fn set_done(&self);

    /// Check the observed call count against the expected one.
    ///
    /// # Errors
    /// Returns a [`Violation::CardinalityViolation`] if the call count is
    /// outside of the expected range.
    fn verify(&self, mock: &str) -> Result<(), Violation> {
        let times = self.times();
        if times.is_satisfied() {
            Ok(())
        } else {
            Err(Violation::CardinalityViolation {
                mock: mock.to_owned(),
                expectation: self.to_string(),
                expected: times.range,
                observed: times.count,
            })
        }
    }

    /// Access to the concrete type, used to restore the typed expectation.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<A, R> ErasedExpectation for Expectation<A, R>
where
    A: 'static,
    R: 'static,
{
    fn operation(&self) -> OperationId {
        self.operation
    }

    fn times(&self) -> &Times {
        &self.times
    }

    fn set_done(&self) {
        for seq_handle in &self.sequences {
            seq_handle.set_done();
        }
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
