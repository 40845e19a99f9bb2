//! The [`expectation`](self) module contains the call expectations that can be
//! declared on a [`MockMethod`].
//!
//! Every call of a mocked method is dispatched to every expectation of that
//! method. An expectation whose matcher rejects the call is not affected by it
//! at all, so several argument specific expectations can be satisfied in any
//! order.

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{Failure, Report, Result};
use crate::matcher::{any, exact};
use crate::{Args, ArgValue, Matcher, MockMethod, Times, TimesRange};

/// Defines a expectation for a function call on a mocked method.
pub trait Expectation: Display + Send {
    /// Process a call with the passed `args`. Returns `true` if the call was
    /// accepted by this expectation.
    fn on_call(&mut self, args: &Args) -> bool;

    /// Check the expectation against the calls received so far.
    ///
    /// # Errors
    /// Returns a [`Failure`] describing the unmet contract.
    fn verify(&self, method: &str) -> std::result::Result<(), Failure>;

    /// Returns `true` if the expectation requires calls, `false` if it forbids
    /// them.
    fn expects_calls(&self) -> bool;
}

pub(crate) type SharedExpectation = Arc<Mutex<dyn Expectation>>;

/* CallExpectation */

/// State of a must-be-called expectation.
pub(crate) struct CallState {
    matcher: Box<dyn Matcher<Args> + Send>,
    has_matcher: bool,
    matched: usize,
    times: Option<Times>,
    description: Option<String>,
}

impl CallState {
    fn count(&self) -> usize {
        self.times.as_ref().map_or(self.matched, Times::count)
    }

    fn is_satisfied(&self) -> bool {
        self.matched > 0 && self.times.as_ref().map_or(true, Times::is_satisfied)
    }

    fn set_matcher<M>(&mut self, matcher: M)
    where
        M: Matcher<Args> + Send + 'static,
    {
        self.matcher = Box::new(matcher);
        self.has_matcher = true;
    }
}

impl Default for CallState {
    fn default() -> Self {
        Self {
            matcher: Box::new(any()),
            has_matcher: false,
            matched: 0,
            times: None,
            description: None,
        }
    }
}

impl Display for CallState {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.times {
            Some(times) if times.range.is_empty() || times.range.min() > 0 => {
                write!(f, "called {}", times.range)?;
            }
            Some(times) => match times.range.max() {
                Some(max) => write!(f, "called at least once and at most {max} times")?,
                None => write!(f, "called at least once")?,
            },
            None => write!(f, "called at least once")?,
        }

        write!(f, " with ")?;
        self.matcher.fmt(f)
    }
}

impl Expectation for CallState {
    fn on_call(&mut self, args: &Args) -> bool {
        if !self.matcher.matches(args) {
            return false;
        }

        self.matched += 1;
        if let Some(times) = &self.times {
            times.increment();
        }

        true
    }

    fn verify(&self, method: &str) -> std::result::Result<(), Failure> {
        if self.is_satisfied() {
            return Ok(());
        }

        struct Observed<'a>(&'a CallState);

        impl Display for Observed<'_> {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, "called {} times with ", self.0.count())?;
                self.0.matcher.fmt(f)
            }
        }

        Err(Failure {
            method: method.into(),
            expected: self.to_string(),
            observed: Observed(self).to_string(),
            description: self.description.clone(),
        })
    }

    fn expects_calls(&self) -> bool {
        true
    }
}

/// Handle of a must-be-called expectation, returned by
/// [`MockMethod::expect_must_be_called`].
///
/// The expectation is registered on the method as soon as the handle is
/// created; the builder methods refine it in place.
pub struct CallExpectation {
    method: MockMethod,
    state: Arc<Mutex<CallState>>,
}

impl CallExpectation {
    pub(crate) fn new(method: MockMethod, state: Arc<Mutex<CallState>>) -> Self {
        Self { method, state }
    }

    pub(crate) fn new_state() -> Arc<Mutex<CallState>> {
        Arc::new(Mutex::new(CallState::default()))
    }

    /// Only accept calls with exactly the passed arguments.
    ///
    /// If this expectation already has an argument matcher a new sibling
    /// expectation is added to the method instead, and the handle of the
    /// sibling is returned.
    pub fn with_args(self, args: Args) -> Self {
        self.with(exact(args))
    }

    /// Only accept calls that are matched by the passed `matcher`.
    ///
    /// Follows the same sibling rule as [`with_args`](Self::with_args).
    pub fn with<M>(self, matcher: M) -> Self
    where
        M: Matcher<Args> + Send + 'static,
    {
        let (has_matcher, description) = {
            let state = self.state.lock();

            (state.has_matcher, state.description.clone())
        };

        if has_matcher {
            let sibling = self.method.add_call_expectation();
            sibling.state.lock().description = description;

            return sibling.with(matcher);
        }

        self.state.lock().set_matcher(matcher);

        self
    }

    /// Expect exactly one matching call.
    pub fn once(self) -> Self {
        self.times(1)
    }

    /// Expect a number of matching calls within `range`.
    ///
    /// A plain number expects exactly that many calls.
    pub fn times<R: Into<TimesRange>>(self, range: R) -> Self {
        self.state.lock().times = Some(Times::new(range));

        self
    }

    /// Expect at least `count` matching calls.
    pub fn at_least_times(self, count: usize) -> Self {
        self.times(TimesRange::at_least(count))
    }

    /// Attach a description that is reported if the expectation fails.
    pub fn describe<S: Into<String>>(self, value: S) -> Self {
        self.state.lock().description = Some(value.into());

        self
    }

    /// Set the canned return value of the method this expectation belongs to.
    pub fn returns<T: ArgValue>(self, value: T) -> Self {
        self.method.set_return_value(value);

        self
    }

    /// The method this expectation was declared on.
    #[must_use]
    pub fn method(&self) -> &MockMethod {
        &self.method
    }

    /// Returns `true` if the expectation would pass verification now.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.state.lock().is_satisfied()
    }

    /// Number of matching calls received so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.state.lock().count()
    }

    /// Verify only this expectation.
    ///
    /// # Errors
    /// Returns [`Error::VerificationFailed`](crate::Error::VerificationFailed)
    /// if the expectation is not met.
    pub fn verify(&self) -> Result<()> {
        verify_one(&self.method, &*self.state.lock())
    }
}

impl Display for CallExpectation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.method.name(), self.state.lock())
    }
}

impl Debug for CallExpectation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let state = self.state.lock();

        f.debug_struct("CallExpectation")
            .field("method", &self.method.name())
            .field("expected", &state.to_string())
            .field("count", &state.count())
            .field("description", &state.description)
            .finish()
    }
}

/* CallNotExpected */

/// State of a must-not-be-called expectation.
#[derive(Default)]
pub(crate) struct NoCallState {
    calls: usize,
    description: Option<String>,
}

impl Display for NoCallState {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "never called")
    }
}

impl Expectation for NoCallState {
    fn on_call(&mut self, _args: &Args) -> bool {
        self.calls += 1;

        true
    }

    fn verify(&self, method: &str) -> std::result::Result<(), Failure> {
        if self.calls == 0 {
            return Ok(());
        }

        Err(Failure {
            method: method.into(),
            expected: self.to_string(),
            observed: format!("called {} times", self.calls),
            description: self.description.clone(),
        })
    }

    fn expects_calls(&self) -> bool {
        false
    }
}

/// Handle of a must-not-be-called expectation, returned by
/// [`MockMethod::expect_must_not_be_called`].
///
/// Once the method was called the expectation is violated for good.
pub struct CallNotExpected {
    method: MockMethod,
    state: Arc<Mutex<NoCallState>>,
}

impl CallNotExpected {
    pub(crate) fn new(method: MockMethod, state: Arc<Mutex<NoCallState>>) -> Self {
        Self { method, state }
    }

    pub(crate) fn new_state() -> Arc<Mutex<NoCallState>> {
        Arc::new(Mutex::new(NoCallState::default()))
    }

    /// Attach a description that is reported if the expectation fails.
    pub fn describe<S: Into<String>>(self, value: S) -> Self {
        self.state.lock().description = Some(value.into());

        self
    }

    /// The method this expectation was declared on.
    #[must_use]
    pub fn method(&self) -> &MockMethod {
        &self.method
    }

    /// Returns `true` if the method was called at least once.
    #[must_use]
    pub fn is_violated(&self) -> bool {
        self.state.lock().calls > 0
    }

    /// Verify only this expectation.
    ///
    /// # Errors
    /// Returns [`Error::VerificationFailed`](crate::Error::VerificationFailed)
    /// if the method was called.
    pub fn verify(&self) -> Result<()> {
        verify_one(&self.method, &*self.state.lock())
    }
}

impl Display for CallNotExpected {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.method.name(), self.state.lock())
    }
}

impl Debug for CallNotExpected {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let state = self.state.lock();

        f.debug_struct("CallNotExpected")
            .field("method", &self.method.name())
            .field("calls", &state.calls)
            .field("description", &state.description)
            .finish()
    }
}

fn verify_one(method: &MockMethod, expectation: &dyn Expectation) -> Result<()> {
    expectation
        .verify(method.name())
        .map_err(Report::from)
        .or_else(Report::into_result)
}
