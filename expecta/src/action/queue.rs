use std::collections::VecDeque;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use super::{Action, OnceAction, RepeatableAction};

/// Ordered list of responses of a single call expectation.
///
/// The n-th matching call receives the n-th one-shot action. After all
/// one-shot actions are consumed the repeating action answers every further
/// call. If there is none, the queue has no answer and the caller falls back
/// to the default response of the operation.
pub struct ActionQueue<T, R> {
    once: VecDeque<Box<dyn OnceAction<T, R> + Send>>,
    repeatedly: Option<Box<dyn RepeatableAction<T, R> + Send>>,
    declared_once: usize,
}

impl<T, R> ActionQueue<T, R> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            once: VecDeque::new(),
            repeatedly: None,
            declared_once: 0,
        }
    }

    /// Append a one-shot action to the end of the queue.
    pub fn push_once<A>(&mut self, action: A)
    where
        A: Action<T, R> + Send + 'static,
    {
        self.once.push_back(Box::new(action));
        self.declared_once += 1;
    }

    /// Set the action that answers all calls after the one-shot actions are
    /// exhausted. A previously set repeating action is replaced.
    pub fn set_repeatedly<A>(&mut self, action: A)
    where
        A: Action<T, R> + Clone + Send + 'static,
    {
        self.repeatedly = Some(Box::new(action));
    }

    /// Number of one-shot actions that were declared, consumed or not.
    #[must_use]
    pub fn declared_once(&self) -> usize {
        self.declared_once
    }

    /// Number of one-shot actions not consumed yet.
    #[must_use]
    pub fn remaining_once(&self) -> usize {
        self.once.len()
    }

    /// Returns `true` if a repeating action was set.
    #[must_use]
    pub fn has_repeatedly(&self) -> bool {
        self.repeatedly.is_some()
    }

    /// Returns `true` if the queue has no answer for the next call.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.once.is_empty() && self.repeatedly.is_none()
    }

    /// Execute the action for the next call.
    ///
    /// # Errors
    /// Hands the arguments back if the queue is exhausted, so the caller can
    /// pass them on to a default action.
    pub fn exec(&mut self, args: T) -> Result<R, T> {
        if let Some(action) = self.once.pop_front() {
            Ok(action.exec_once(args))
        } else if let Some(action) = &mut self.repeatedly {
            Ok(action.exec_again(args))
        } else {
            Err(args)
        }
    }
}

impl<T, R> Default for ActionQueue<T, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> Debug for ActionQueue<T, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ActionQueue")
            .field("declared_once", &self.declared_once)
            .field("remaining_once", &self.once.len())
            .field("repeatedly", &self.repeatedly.is_some())
            .finish()
    }
}
