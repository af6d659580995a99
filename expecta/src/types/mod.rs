//! The [`types`](self) module defines value types that are convenient to use
//! inside a [`Matcher`](crate::Matcher) of a call expectation.

pub mod duration;

pub use duration::Duration;
