#![warn(
    unused,
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::no_effect_underscore_binding,
    clippy::similar_names
)]

//! Proc macros of the `expecta` crate. Use them through the re-exports of
//! `expecta`, the generated code refers to its runtime types.

use expect_call::CallMode;
use proc_macro::TokenStream;

mod expect_call;
mod misc;
mod mock;

/// Generate a mock type that implements the listed traits by forwarding every
/// method without body to an `expecta::Mock`.
///
/// ```ignore
/// mock! {
///     #[derive(Clone)]
///     pub struct MockStack<T>;
///
///     impl<T> Stack<T> for MockStack<T> {
///         fn push(&self, value: T);
///         fn pop(&self) -> T;
///
///         #[expecta(no_default)]
///         fn top(&self) -> Option<T>;
///     }
/// }
/// ```
#[proc_macro]
pub fn mock(input: TokenStream) -> TokenStream {
    mock::exec(input.into()).into()
}

/// Declare a call expectation at a generated mock:
/// `expect_call!(mock as Trait, method(matcher, _))`.
#[proc_macro]
pub fn expect_call(input: TokenStream) -> TokenStream {
    expect_call::exec(input.into(), CallMode::Expect).into()
}

/// Declare a default action at a generated mock:
/// `on_call!(mock as Trait, method(matcher, _))`.
#[proc_macro]
pub fn on_call(input: TokenStream) -> TokenStream {
    expect_call::exec(input.into(), CallMode::OnCall).into()
}
