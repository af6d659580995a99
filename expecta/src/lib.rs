//! `expecta` is a call expectation engine for mocked interfaces.
//!
//! A [`Mock`] owns the expectations declared for the operations of a mocked
//! object, dispatches the calls of the code under test to them and verifies
//! the observed call counts when the mock goes out of scope. The [`mock!`]
//! macro generates mock types that implement a trait by forwarding every
//! method to a [`Mock`].
//!
//! ```
//! use expecta::{action::Return, expect_call, matcher::eq, mock};
//!
//! pub trait Connection {
//!     fn open(&self) -> bool;
//!     fn send(&self, data: &str, len: usize) -> bool;
//!     fn close(&self);
//! }
//!
//! mock! {
//!     pub struct MockConnection;
//!
//!     impl Connection for MockConnection {
//!         fn open(&self) -> bool;
//!         fn send(&self, data: &str, len: usize) -> bool;
//!         fn close(&self);
//!     }
//! }
//!
//! let conn = MockConnection::strict();
//! expect_call!(conn as Connection, open()).will_once(Return(true));
//! expect_call!(conn as Connection, send(eq("Hello World!"), eq(12usize))).will_once(Return(true));
//! expect_call!(conn as Connection, close());
//!
//! assert!(conn.open());
//! assert!(conn.send("Hello World!", 12));
//! conn.close();
//! ```

extern crate self as expecta;

pub mod action;
pub mod builder;
pub mod config;
pub mod error;
pub mod example;
pub mod expectation;
pub mod leniency;
pub mod matcher;
pub mod mock;
pub mod on_call;
pub mod operation;
pub mod pointee;
pub mod scope;
pub mod sequence;
pub mod times;
pub mod types;

pub use expecta_macros::{expect_call, mock, on_call};

pub use action::Action;
pub use builder::ExpectationBuilder;
pub use config::Config;
pub use error::{VerificationError, Violation};
pub use leniency::Leniency;
pub use matcher::Matcher;
pub use mock::{Dispatch, Mock, MockState};
pub use on_call::OnCallBuilder;
pub use operation::{Operation, OperationId};
pub use pointee::Pointee;
pub use sequence::{InSequence, Sequence, SequenceHandle};
pub use times::{Times, TimesRange};
