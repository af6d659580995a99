//! Shared cells whose value is read at call time by
//! [`ReturnPointee`](crate::action::ReturnPointee).

use std::borrow::Borrow;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex as StdMutex, PoisonError};

use parking_lot::{Mutex, RwLock};

/// Something that can be asked for the value it currently refers to.
pub trait Pointee<T> {
    /// Read the current value.
    fn current(&self) -> T;
}

impl<T: Clone> Pointee<T> for Arc<Mutex<T>> {
    fn current(&self) -> T {
        self.lock().clone()
    }
}

impl<T: Clone> Pointee<T> for Arc<RwLock<T>> {
    fn current(&self) -> T {
        self.read().clone()
    }
}

/// A poisoned lock still yields its last value.
impl<T: Clone> Pointee<T> for Arc<StdMutex<T>> {
    fn current(&self) -> T {
        self.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

macro_rules! impl_atomic {
    ($atomic:ty => $value:ty) => {
        impl Pointee<$value> for Arc<$atomic> {
            fn current(&self) -> $value {
                self.load(Ordering::SeqCst)
            }
        }
    };
}

impl_atomic!(AtomicBool => bool);
impl_atomic!(AtomicUsize => usize);
impl_atomic!(AtomicI64 => i64);

/// Wraps an owned value so it can be used wherever a [`Pointee`] is expected.
#[derive(Debug, Clone)]
pub struct Borrowed<T>(pub T);

impl<T, X> Pointee<T> for Borrowed<X>
where
    X: Borrow<T>,
    T: Clone,
{
    fn current(&self) -> T {
        self.0.borrow().clone()
    }
}
