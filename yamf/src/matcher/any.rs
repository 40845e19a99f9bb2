use std::fmt::{Formatter, Result as FmtResult};

use crate::Matcher;

/// Create a new [`Any`] matcher.
pub fn any() -> Any {
    Any
}

/// Matcher that accepts every call.
#[must_use]
#[derive(Debug, Default, Clone, Copy)]
pub struct Any;

impl<T> Matcher<T> for Any {
    fn matches(&self, _value: &T) -> bool {
        true
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "(..)")
    }
}
