//! `yamf` is a runtime mock object library.
//!
//! A [`MockObject`] creates its [`MockMethod`]s on first access. Every method
//! records its calls, hands them to the declared expectations and returns a
//! canned value. Unmet expectations are reported by `verify`.
//!
//! ```rust
//! use yamf::{args, expect_call, MockObject};
//!
//! let mock = MockObject::new();
//! expect_call!(mock, add(5))?;
//! expect_call!(mock, add(6))?;
//!
//! mock.member("add").call(args!(6));
//! mock.member("add").call(args!(5));
//! mock.verify()?;
//! # Ok::<(), yamf::Error>(())
//! ```

pub mod array;
pub mod config;
pub mod delegate;
pub mod error;
pub mod expectation;
pub mod matcher;
pub mod method;
pub mod module;
pub mod object;
pub mod times;
pub mod types;

pub use yamf_macros::{args, call, expect_call, expect_no_call};

pub use array::{FanOut, MockArray};
pub use config::{Config, Policy};
pub use delegate::Delegate;
pub use error::{Error, Failure, Report, Result};
pub use expectation::{CallExpectation, CallNotExpected, Expectation};
pub use matcher::Matcher;
pub use method::MockMethod;
pub use module::{Function, MockModule, Namespace, Target};
pub use object::MockObject;
pub use times::{Times, TimesRange};
pub use types::{ArgValue, Args, Value};
