//! The [`operation`](self) module defines how a mocked method is identified.

use std::any::type_name;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::marker::PhantomData;

/// Erased identity of a mocked operation.
///
/// Two operations are the same only if the interface, the method name and the
/// full signature are equal. Methods that share a name but differ in their
/// argument or return types (or live in different interfaces) are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationId {
    interface: &'static str,
    method: &'static str,
    signature: &'static str,
}

impl OperationId {
    /// Name of the interface (trait or type) that declares the operation.
    #[must_use]
    pub fn interface(&self) -> &'static str {
        self.interface
    }

    /// Name of the method.
    #[must_use]
    pub fn method(&self) -> &'static str {
        self.method
    }

    /// Type signature of the operation in the form `fn(Args) -> Ret`.
    #[must_use]
    pub fn signature(&self) -> &'static str {
        self.signature
    }
}

impl Display for OperationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}::{}", self.interface, self.method)
    }
}

/// Typed handle of a mocked operation taking the arguments `A` and returning `R`.
///
/// `A` follows the argument convention of the crate: `()` for no arguments,
/// the bare type for one argument and a tuple for more.
pub struct Operation<A, R> {
    id: OperationId,
    _marker: PhantomData<fn(A) -> R>,
}

impl<A, R> Operation<A, R>
where
    A: 'static,
    R: 'static,
{
    /// Create the handle for `interface::method`.
    #[must_use]
    pub fn new(interface: &'static str, method: &'static str) -> Self {
        Self {
            id: OperationId {
                interface,
                method,
                signature: type_name::<fn(A) -> R>(),
            },
            _marker: PhantomData,
        }
    }
}

impl<A, R> Operation<A, R> {
    /// Erased identity of the operation.
    #[must_use]
    pub fn id(&self) -> OperationId {
        self.id
    }
}

impl<A, R> Clone for Operation<A, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, R> Copy for Operation<A, R> {}

impl<A, R> Debug for Operation<A, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_tuple("Operation").field(&self.id).finish()
    }
}

impl<A, R> Display for Operation<A, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.id, f)
    }
}
