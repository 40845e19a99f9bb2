use std::fmt::{Formatter, Result as FmtResult};

use crate::{Args, Matcher};

/// Create a new [`Exact`] matcher that accepts calls with exactly the passed
/// arguments.
pub fn exact(args: Args) -> Exact {
    Exact(args)
}

/// Matcher that compares the positional and the named arguments of a call
/// with the declared ones.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct Exact(pub Args);

impl Matcher<Args> for Exact {
    fn matches(&self, value: &Args) -> bool {
        self.0 == *value
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}
