//! Contains a generated example for the mocked types.

#![allow(missing_docs)]

use crate::mock;

/// Simple interface to generate a mocked version for.
pub trait Connection {
    /// Open the connection.
    fn open(&self) -> bool;

    /// Send `len` bytes of `data`.
    fn send(&self, data: &str, len: usize) -> bool;

    /// Close the connection.
    fn close(&self);
}

mock! {
    /// Mocked version of the [`Connection`] trait.
    #[derive(Debug, Clone)]
    pub struct MockConnection;

    impl Connection for MockConnection {
        fn open(&self) -> bool;
        fn send(&self, data: &str, len: usize) -> bool;
        fn close(&self);
    }
}
