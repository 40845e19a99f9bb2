//! The [`matcher`](self) module contains the argument matchers that decide
//! whether a call is accepted by a call expectation.

mod any;
mod closure;
mod exact;

use std::fmt::{Formatter, Result as FmtResult};

pub use any::{any, Any};
pub use closure::{closure, Closure};
pub use exact::{exact, Exact};

/// A matcher is used to check if the passed argument matches a pre-defined
/// expectation. It is mostly used to verify the arguments to an expected call.
pub trait Matcher<T> {
    /// Returns `true` if the passed `value` matches the expectations, `false`
    /// otherwise.
    fn matches(&self, value: &T) -> bool;

    /// Write a human readable representation of the matcher to the passed
    /// formatter.
    ///
    /// # Errors
    /// Returns an error if writing to the formatter failed.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult;
}

