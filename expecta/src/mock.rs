//! The [`mock`](self) module contains the dispatcher and verifier of a single
//! mocked object.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::mem::take;
use std::sync::Arc;
use std::thread::panicking;
use std::time::Duration;

use parking_lot::{Mutex, MutexGuard};

use crate::builder::ExpectationBuilder;
use crate::config::Config;
use crate::expectation::{ErasedExpectation, Expectation, Match};
use crate::leniency::Severity;
use crate::on_call::{DefaultAction, ErasedDefaultAction, OnCallBuilder};
use crate::{Leniency, Operation, VerificationError, Violation};

/// Lifecycle of a [`Mock`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum MockState {
    /// Expectations are declared, no call was dispatched yet.
    Recording,

    /// At least one call was dispatched.
    Active,

    /// The expectations are checked.
    Verifying,

    /// The expectations were checked and discarded.
    Closed,
}

/// Outcome of [`Mock::dispatch`].
#[derive(Debug)]
pub enum Dispatch<A, R> {
    /// An expectation accepted the call and its action produced the result.
    Answered(R),

    /// An expectation accepted the call, but it has no action left. The
    /// arguments are handed back.
    Exhausted(A),

    /// No expectation accepted the call.
    Unmatched {
        /// The arguments of the call.
        args: A,

        /// The violation that was reported for the call.
        violation: Violation,
    },
}

/// Dispatcher and verifier of the calls to a single mocked object.
///
/// A [`Mock`] owns the expectations and default actions of the object. Each
/// call is offered to the expectations of the called operation, newest first.
/// The first expectation that accepts the call answers it. Expectations that
/// already reached their maximum call count are skipped, so older
/// expectations take over once newer ones are saturated.
///
/// Calls no expectation accepted are handled according to the [`Leniency`]
/// of the mock. Cardinality violations are only detected during
/// verification, which happens either explicitly by [`verify`](Self::verify)
/// or [`checkpoint`](Self::checkpoint), or implicitly when the last handle of
/// the mock is dropped.
///
/// [`Mock`] is a cheap handle, clones share the same state.
#[derive(Clone)]
pub struct Mock {
    shared: Arc<Mutex<Shared>>,
}

impl Mock {
    /// Create a new mock with the leniency from the process [`Config`].
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self::with_leniency(name, Config::current().default_leniency)
    }

    /// Create a new mock that fails on every unexpected call.
    pub fn strict<S: Into<String>>(name: S) -> Self {
        Self::with_leniency(name, Leniency::Strict)
    }

    /// Create a new mock that warns about unexpected calls.
    pub fn naggy<S: Into<String>>(name: S) -> Self {
        Self::with_leniency(name, Leniency::Naggy)
    }

    /// Create a new mock that silently accepts unexpected calls.
    pub fn nice<S: Into<String>>(name: S) -> Self {
        Self::with_leniency(name, Leniency::Nice)
    }

    /// Create a new mock with the passed `leniency`.
    pub fn with_leniency<S: Into<String>>(name: S, leniency: Leniency) -> Self {
        let name = name.into();

        tracing::trace!(mock = %name, %leniency, "mock created");

        Self {
            shared: Arc::new(Mutex::new(Shared {
                name,
                leniency,
                state: MockState::Recording,
                expectations: Vec::new(),
                defaults: Vec::new(),
                failures: Vec::new(),
                warnings: Vec::new(),
                check_on_drop: true,
            })),
        }
    }

    /// Name of the mocked object.
    #[must_use]
    pub fn name(&self) -> String {
        self.lock().name.clone()
    }

    /// Policy for unexpected calls.
    #[must_use]
    pub fn leniency(&self) -> Leniency {
        self.lock().leniency
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> MockState {
        self.lock().state
    }

    /// Unexpected calls that were reported as warnings so far.
    #[must_use]
    pub fn warnings(&self) -> Vec<Violation> {
        self.lock().warnings.clone()
    }

    /// Declare a new call expectation for `operation`.
    ///
    /// The expectation is registered when the returned builder is dropped.
    pub fn expect<A, R>(&self, operation: &Operation<A, R>) -> ExpectationBuilder<'_, A, R>
    where
        A: 'static,
        R: 'static,
    {
        ExpectationBuilder::new(self, operation.id())
    }

    /// Declare a new default action for `operation`.
    pub fn on_call<A, R>(&self, operation: &Operation<A, R>) -> OnCallBuilder<'_, A, R>
    where
        A: 'static,
        R: 'static,
    {
        OnCallBuilder::new(self, operation.id())
    }

    /// Dispatch a call of `operation` with `args` to the expectations.
    ///
    /// This never panics on an unexpected call, the violation is reported
    /// according to the leniency of the mock and returned to the caller.
    pub fn dispatch<A, R>(&self, operation: &Operation<A, R>, args: A) -> Dispatch<A, R>
    where
        A: 'static,
        R: 'static,
    {
        let id = operation.id();
        let mut guard = self.lock();
        let shared = &mut *guard;

        if shared.state == MockState::Recording {
            shared.state = MockState::Active;
        }

        let mut tried = Vec::new();
        let mut out_of_sequence = None;

        for ex in shared.expectations.iter_mut().rev() {
            if ex.operation() != id {
                continue;
            }

            let Some(ex) = ex.as_any_mut().downcast_mut::<Expectation<A, R>>() else {
                continue;
            };

            match ex.try_match(&args) {
                Match::Accepted => {
                    tracing::debug!(mock = %shared.name, expectation = %ex, call = ex.times.count, "call accepted");

                    return match ex.actions.exec(args) {
                        Ok(ret) => Dispatch::Answered(ret),
                        Err(args) => Dispatch::Exhausted(args),
                    };
                }
                Match::Mismatch => tried.push(format!("{ex}: arguments do not match")),
                Match::Saturated => tried.push(format!(
                    "{ex}: saturated, already called {}",
                    ex.times.range
                )),
                Match::OutOfSequence => {
                    tried.push(format!("{ex}: out of sequence"));

                    if out_of_sequence.is_none() {
                        out_of_sequence = Some((ex.to_string(), ex.unsatisfied()));
                    }
                }
            }
        }

        let violation = match out_of_sequence {
            Some((expectation, unsatisfied)) => Violation::OutOfSequenceCall {
                mock: shared.name.clone(),
                operation: id,
                expectation,
                unsatisfied,
            },
            None => Violation::UnexpectedCall {
                mock: shared.name.clone(),
                operation: id,
                tried,
            },
        };

        shared.report(&violation);

        Dispatch::Unmatched { args, violation }
    }

    /// Handle a call of `operation` with `args` and return its result.
    ///
    /// Calls that are not answered by an expectation are answered by the
    /// newest matching default action, or by [`Default::default`].
    ///
    /// # Panics
    /// Panics if no expectation accepted the call and the mock is strict.
    pub fn invoke<A, R>(&self, operation: &Operation<A, R>, args: A) -> R
    where
        A: 'static,
        R: Default + 'static,
    {
        self.invoke_or_else(operation, args, R::default)
    }

    /// Like [`invoke`](Self::invoke), but calls `default` for results that
    /// are neither answered by an expectation nor by a default action.
    ///
    /// # Panics
    /// Panics if no expectation accepted the call and the mock is strict.
    pub fn invoke_or_else<A, R, F>(&self, operation: &Operation<A, R>, args: A, default: F) -> R
    where
        A: 'static,
        R: 'static,
        F: FnOnce() -> R,
    {
        let args = match self.dispatch(operation, args) {
            Dispatch::Answered(ret) => return ret,
            Dispatch::Exhausted(args) => args,
            Dispatch::Unmatched { args, violation } => {
                if self.leniency().unexpected_call_severity() == Severity::Fatal {
                    panic!("{violation}");
                }

                args
            }
        };

        self.default_action(operation, args)
            .unwrap_or_else(|_| default())
    }

    /// Verify all expectations and discard them.
    ///
    /// The mock is closed afterwards: calls are no longer accepted by any
    /// expectation. Use [`checkpoint`](Self::checkpoint) to continue with a
    /// new set of expectations.
    ///
    /// # Errors
    /// Returns all failures since the last verification: unexpected calls of
    /// a strict mock and expectations with an unsatisfied call count.
    pub fn verify(&self) -> Result<(), VerificationError> {
        self.lock().verify()
    }

    /// Verify and discard all expectations, then accept new ones.
    ///
    /// # Panics
    /// Panics if the verification failed.
    pub fn checkpoint(&self) {
        let ret = {
            let mut shared = self.lock();
            let ret = shared.verify();
            shared.state = MockState::Recording;

            ret
        };

        if let Err(err) = ret {
            panic!("{err}");
        }
    }

    /// Discard all expectations without verifying them.
    pub fn release(self) {
        let mut shared = self.lock();

        tracing::trace!(mock = %shared.name, "mock released");

        shared.check_on_drop = false;
        shared.expectations.clear();
        shared.state = MockState::Closed;
    }

    pub(crate) fn register(&self, expectation: Box<dyn ErasedExpectation>) {
        let mut shared = self.lock();

        tracing::trace!(mock = %shared.name, expectation = %expectation, times = %expectation.times().range, "expectation registered");

        if shared.state == MockState::Closed {
            shared.state = MockState::Recording;
        }

        shared.expectations.push(expectation);
    }

    pub(crate) fn register_default(&self, default: Box<dyn ErasedDefaultAction>) {
        self.lock().defaults.push(default);
    }

    #[cfg(test)]
    pub(crate) fn expected_times(&self) -> Vec<crate::TimesRange> {
        self.lock()
            .expectations
            .iter()
            .map(|ex| ex.times().range)
            .collect()
    }

    fn default_action<A, R>(&self, operation: &Operation<A, R>, args: A) -> Result<R, A>
    where
        A: 'static,
        R: 'static,
    {
        let id = operation.id();
        let mut shared = self.lock();

        for default in shared.defaults.iter_mut().rev() {
            if default.operation() != id {
                continue;
            }

            let Some(default) = default.as_any_mut().downcast_mut::<DefaultAction<A, R>>() else {
                continue;
            };

            if default.matches(&args) {
                return Ok(default.exec(args));
            }
        }

        Err(args)
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        match self.shared.try_lock_for(LOCK_TIMEOUT) {
            Some(guard) => guard,
            None => panic!(
                "Unable to lock the mocked object: Deadlock? Is the mock called from inside one of its actions?"
            ),
        }
    }
}

impl Debug for Mock {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let shared = self.lock();

        f.debug_struct("Mock")
            .field("name", &shared.name)
            .field("leniency", &shared.leniency)
            .field("state", &shared.state)
            .field("expectations", &shared.expectations.len())
            .finish_non_exhaustive()
    }
}

const LOCK_TIMEOUT: Duration = Duration::from_secs(1);

struct Shared {
    name: String,
    leniency: Leniency,
    state: MockState,
    expectations: Vec<Box<dyn ErasedExpectation>>,
    defaults: Vec<Box<dyn ErasedDefaultAction>>,
    failures: Vec<Violation>,
    warnings: Vec<Violation>,
    check_on_drop: bool,
}

impl Shared {
    fn report(&mut self, violation: &Violation) {
        match self.leniency.unexpected_call_severity() {
            Severity::Fatal => {
                tracing::error!(mock = %self.name, "{violation}");

                self.failures.push(violation.clone());
            }
            Severity::Warning => {
                if Config::current().verbose {
                    tracing::warn!(mock = %self.name, "{violation}");
                } else {
                    tracing::warn!(mock = %self.name, "{}", violation.summary());
                }

                self.warnings.push(violation.clone());
            }
            Severity::Silent => {
                tracing::trace!(mock = %self.name, "{violation}");
            }
        }
    }

    fn verify(&mut self) -> Result<(), VerificationError> {
        self.state = MockState::Verifying;

        let mut violations = take(&mut self.failures);
        for ex in &self.expectations {
            match ex.verify(&self.name) {
                Ok(()) => ex.set_done(),
                Err(violation) => violations.push(violation),
            }
        }

        self.expectations.clear();
        self.state = MockState::Closed;

        tracing::trace!(mock = %self.name, violations = violations.len(), "mock verified");

        if violations.is_empty() {
            Ok(())
        } else {
            Err(VerificationError {
                mock: self.name.clone(),
                violations,
            })
        }
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        if !self.check_on_drop || panicking() {
            return;
        }

        if self.state == MockState::Closed && self.failures.is_empty() {
            return;
        }

        if let Err(err) = self.verify() {
            panic!("{err}");
        }
    }
}
