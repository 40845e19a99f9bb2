use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::Matcher;

/// Create a new [`Closure`] matcher from the passed predicate.
pub fn closure<F>(f: F) -> Closure<F> {
    Closure(f)
}

/// Matcher that delegates the decision to a predicate.
#[must_use]
pub struct Closure<F>(pub F);

impl<T, F> Matcher<T> for Closure<F>
where
    F: Fn(&T) -> bool,
{
    fn matches(&self, value: &T) -> bool {
        self.0(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "(<closure>)")
    }
}

impl<F> Debug for Closure<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Closure")
    }
}
