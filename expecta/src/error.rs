//! The [`error`](self) module contains the violations the engine detects and
//! the error that aggregates them at verification time.

use std::fmt::Write;

use thiserror::Error;

use crate::{OperationId, TimesRange};

/// A single deviation between the declared expectations and the observed calls.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    /// A call matched no eligible expectation.
    #[error("{mock}: unexpected call to {operation}{}", render_tried(.tried))]
    UnexpectedCall {
        /// Name of the mock instance.
        mock: String,
        /// The called operation.
        operation: OperationId,
        /// Every expectation of the operation with the reason it was rejected.
        tried: Vec<String>,
    },

    /// A call matched the pattern of an expectation, but the order of one of
    /// its sequences was violated.
    #[error(
        "{mock}: call to {operation} matched `{expectation}` out of sequence{}",
        render_unsatisfied(.unsatisfied)
    )]
    OutOfSequenceCall {
        /// Name of the mock instance.
        mock: String,
        /// The called operation.
        operation: OperationId,
        /// The expectation whose pattern matched the call.
        expectation: String,
        /// Earlier expectations of the sequence that are not satisfied yet.
        unsatisfied: Vec<String>,
    },

    /// The observed call count of an expectation is outside of its bounds.
    #[error(
        "{mock}: expected `{expectation}` to be called {expected}, but it was called {observed} {}",
        times_word(.observed)
    )]
    CardinalityViolation {
        /// Name of the mock instance.
        mock: String,
        /// The expectation that was violated.
        expectation: String,
        /// The declared bounds.
        expected: TimesRange,
        /// The observed number of calls.
        observed: usize,
    },
}

impl Violation {
    /// Returns `true` for violations caused by a call that no expectation accepted.
    #[must_use]
    pub fn is_unexpected(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedCall { .. } | Self::OutOfSequenceCall { .. }
        )
    }

    /// Name of the mock instance the violation belongs to.
    #[must_use]
    pub fn mock(&self) -> &str {
        match self {
            Self::UnexpectedCall { mock, .. }
            | Self::OutOfSequenceCall { mock, .. }
            | Self::CardinalityViolation { mock, .. } => mock,
        }
    }

    /// One line summary without the list of tried or blocking expectations.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::UnexpectedCall { operation, .. } => format!("uninteresting call to {operation}"),
            Self::OutOfSequenceCall {
                operation,
                expectation,
                ..
            } => format!("call to {operation} matched `{expectation}` out of sequence"),
            Self::CardinalityViolation {
                expectation,
                expected,
                observed,
                ..
            } => format!("`{expectation}` called {observed}, expected {expected}"),
        }
    }
}

/// All failures of a single mock instance, reported together.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Mocked object `{mock}` {}", render_violations(.violations))]
pub struct VerificationError {
    /// Name of the mock instance.
    pub mock: String,

    /// The collected violations, in the order they were detected.
    pub violations: Vec<Violation>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn times_word(count: &usize) -> &'static str {
    if *count == 1 {
        "time"
    } else {
        "times"
    }
}

fn render_tried(tried: &[String]) -> String {
    if tried.is_empty() {
        return "\nNo expectations were declared for this operation".into();
    }

    let mut s = String::from("\nTried the following expectations:");
    for ex in tried {
        let _ = write!(s, "\n- {ex}");
    }

    s
}

fn render_unsatisfied(unsatisfied: &[String]) -> String {
    let mut s = String::new();
    if !unsatisfied.is_empty() {
        s.push_str("\nThe sequence has unsatisfied expectations:");
        for ex in unsatisfied {
            let _ = write!(s, "\n- {ex}");
        }
    }

    s
}

fn render_violations(violations: &[Violation]) -> String {
    let mut s = format!("has {} unfulfilled expectation(s):", violations.len());
    for v in violations {
        let _ = write!(s, "\n- {v}");
    }

    s
}
