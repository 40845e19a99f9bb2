//! The [`times`](self) module contains the call count rules that define how
//! often a call expectation must be matched.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{
    Bound, Range, RangeBounds, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Type to keep track of the number of matching calls of a specific call
/// expectation.
#[derive(Default, Debug)]
pub struct Times {
    /// Number of matching calls received so far.
    pub count: AtomicUsize,

    /// Expected number of calls.
    pub range: TimesRange,
}

impl Times {
    /// Create a new [`Times`] instance from the passed `range`.
    pub fn new<R: Into<TimesRange>>(range: R) -> Self {
        Self {
            count: AtomicUsize::default(),
            range: range.into(),
        }
    }

    /// Increment the current call count.
    pub fn increment(&self) -> usize {
        self.count.fetch_add(1, Ordering::Relaxed)
    }

    /// Number of calls received so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    /// Return `true` if the received count lies within the expected range.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.range.contains(self.count())
    }
}

/// Defines the range of expected calls with a lower and a upper limit.
///
/// Similar to [`RangeBounds`] from the standard library but as struct instead
/// of trait.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TimesRange {
    lower: Bound<usize>,
    upper: Bound<usize>,
}

impl TimesRange {
    /// Range that requires at least `count` calls.
    #[must_use]
    pub fn at_least(count: usize) -> Self {
        (count..).into()
    }

    /// Returns `true` if `count` lies within this range.
    #[must_use]
    pub fn contains(&self, count: usize) -> bool {
        (self.lower, self.upper).contains(&count)
    }

    /// Returns `true` if no call count lies within this range.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self.upper {
            Bound::Unbounded => false,
            Bound::Included(x) => x < self.min(),
            Bound::Excluded(x) => x <= self.min(),
        }
    }

    pub(crate) fn min(&self) -> usize {
        match self.lower {
            Bound::Unbounded => 0,
            Bound::Included(x) => x,
            Bound::Excluded(x) => x.saturating_add(1),
        }
    }

    pub(crate) fn max(&self) -> Option<usize> {
        match self.upper {
            Bound::Unbounded => None,
            Bound::Included(x) => Some(x),
            Bound::Excluded(x) => Some(x.saturating_sub(1)),
        }
    }
}

impl Default for TimesRange {
    fn default() -> Self {
        Self {
            lower: Bound::Unbounded,
            upper: Bound::Unbounded,
        }
    }
}

impl Display for TimesRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.is_empty() {
            return write!(f, "a number of times in an empty range");
        }

        match (self.min(), self.max()) {
            (0, None) => write!(f, "any number of times"),
            (min, None) => write!(f, "at least {min} times"),
            (min, Some(max)) if min == max => write!(f, "exactly {min} times"),
            (0, Some(max)) => write!(f, "at most {max} times"),
            (min, Some(max)) => write!(f, "between {min} and {max} times"),
        }
    }
}

impl From<usize> for TimesRange {
    fn from(value: usize) -> Self {
        Self {
            lower: Bound::Included(value),
            upper: Bound::Included(value),
        }
    }
}

macro_rules! impl_from_range_bounds {
    ($x:ty) => {
        impl From<$x> for TimesRange {
            fn from(value: $x) -> Self {
                Self {
                    lower: value.start_bound().cloned(),
                    upper: value.end_bound().cloned(),
                }
            }
        }
    };
}

impl_from_range_bounds!(Range<usize>);
impl_from_range_bounds!(RangeFrom<usize>);
impl_from_range_bounds!(RangeFull);
impl_from_range_bounds!(RangeInclusive<usize>);
impl_from_range_bounds!(RangeTo<usize>);
impl_from_range_bounds!(RangeToInclusive<usize>);
