//! The [`method`](self) module implements [`MockMethod`], the mocked function
//! that records calls and drives its expectations.

use std::cell::RefCell;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex};
use tracing::{debug, trace};

use crate::delegate::BoxedDelegate;
use crate::error::{Error, Report, Result};
use crate::expectation::SharedExpectation;
use crate::{ArgValue, Args, CallExpectation, CallNotExpected, Config, Delegate, Value};

const ANONYMOUS: &str = "<anonymous>";

/// A mocked method.
///
/// [`MockMethod`] is a cheap handle: clones share the same expectations,
/// history, delegate and return value. Calling the method never fails; unmet
/// expectations are only reported by [`verify`](Self::verify).
#[derive(Clone)]
pub struct MockMethod {
    shared: Arc<Shared>,
}

struct Shared {
    label: Option<String>,
    config: Config,
    state: Mutex<State>,
    delegate: ReentrantMutex<RefCell<BoxedDelegate>>,
}

#[derive(Default)]
struct State {
    expectations: Vec<SharedExpectation>,
    history: Vec<Args>,
    return_value: Option<Value>,
}

impl MockMethod {
    /// Create a new anonymous method.
    #[must_use]
    pub fn new() -> Self {
        Self::create(None, Config::default())
    }

    /// Create a new method with the passed `label`.
    #[must_use]
    pub fn named<S: Into<String>>(label: S) -> Self {
        Self::create(Some(label.into()), Config::default())
    }

    pub(crate) fn create(label: Option<String>, config: Config) -> Self {
        Self {
            shared: Arc::new(Shared {
                label,
                config,
                state: Mutex::default(),
                delegate: ReentrantMutex::new(RefCell::new(BoxedDelegate::noop())),
            }),
        }
    }

    /// Name of the method as used in failure messages.
    #[must_use]
    pub fn name(&self) -> &str {
        self.shared.label.as_deref().unwrap_or(ANONYMOUS)
    }

    /// Label of the method, `None` for anonymous methods.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.shared.label.as_deref()
    }

    /// Declare that this method must be called.
    ///
    /// Every call of this function adds a new, independent expectation.
    ///
    /// # Errors
    /// Returns [`Error::Misuse`] if the method was already declared as
    /// must-not-be-called.
    pub fn expect_must_be_called(&self) -> Result<CallExpectation> {
        self.reject_mixed(true)?;

        debug!(method = self.name(), "expect must be called");

        Ok(self.add_call_expectation())
    }

    /// Declare that this method must not be called at all.
    ///
    /// # Errors
    /// Returns [`Error::Misuse`] if the method was already declared as
    /// must-be-called.
    pub fn expect_must_not_be_called(&self) -> Result<CallNotExpected> {
        self.reject_mixed(false)?;

        debug!(method = self.name(), "expect must not be called");

        let state = CallNotExpected::new_state();
        self.shared.state.lock().expectations.push(state.clone());

        Ok(CallNotExpected::new(self.clone(), state))
    }

    /// Adds a call expectation without checking for mixed declarations.
    pub(crate) fn add_call_expectation(&self) -> CallExpectation {
        let state = CallExpectation::new_state();
        self.shared.state.lock().expectations.push(state.clone());

        CallExpectation::new(self.clone(), state)
    }

    fn reject_mixed(&self, expects_calls: bool) -> Result<()> {
        let mixed = self
            .expectations()
            .iter()
            .any(|ex| ex.lock().expects_calls() != expects_calls);

        if mixed {
            return Err(Error::misuse(format!(
                "Method {} can not be expected to be called and not to be called at the same time",
                self.name()
            )));
        }

        Ok(())
    }

    /// Set the value that is returned by every following call.
    pub fn set_return_value<T: ArgValue>(&self, value: T) {
        self.shared.state.lock().return_value = Some(Value::new(value));
    }

    /// Reset the return value to `None`.
    pub fn clear_return_value(&self) {
        self.shared.state.lock().return_value = None;
    }

    /// Current return value.
    #[must_use]
    pub fn return_value(&self) -> Option<Value> {
        self.shared.state.lock().return_value.clone()
    }

    /// Set the delegate that is executed with the arguments of every following
    /// call, after the expectations have processed the call.
    ///
    /// The result of the delegate is discarded; the call still returns the
    /// return value of this method.
    pub fn set_delegate<D: Delegate + 'static>(&self, delegate: D) {
        let guard = self.shared.delegate.lock();
        let Ok(mut current) = guard.try_borrow_mut() else {
            panic!(
                "Unable to replace delegate of method {}: it is currently executed",
                self.name()
            );
        };

        *current = BoxedDelegate::new(delegate);
    }

    /// Arguments of all calls received so far, in call order.
    #[must_use]
    pub fn history(&self) -> Vec<Args> {
        self.shared.state.lock().history.clone()
    }

    /// Number of calls received so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.shared.state.lock().history.len()
    }

    /// Call the method.
    ///
    /// The call is recorded, passed to every expectation in declaration order
    /// and then to the delegate. Returns the current return value.
    ///
    /// # Panics
    /// Panics if the delegate of this method calls this method again.
    pub fn call(&self, args: Args) -> Option<Value> {
        let (expectations, ret) = {
            let mut state = self.shared.state.lock();

            trace!(method = self.name(), %args, "call");

            state.history.push(args.clone());

            (state.expectations.clone(), state.return_value.clone())
        };

        // Matchers run with the state unlocked.
        for ex in &expectations {
            ex.lock().on_call(&args);
        }

        let guard = self.shared.delegate.lock();
        let Ok(mut delegate) = guard.try_borrow_mut() else {
            panic!("Unable to lock delegate of method {}: Deadlock? Make sure that the delegate does not call its own method.", self.name());
        };

        delegate.exec(&args);

        ret
    }

    fn expectations(&self) -> Vec<SharedExpectation> {
        self.shared.state.lock().expectations.clone()
    }

    /// Verify all expectations of this method.
    ///
    /// # Errors
    /// Returns [`Error::VerificationFailed`] if any expectation is not met.
    pub fn verify(&self) -> Result<()> {
        self.report().into_result()
    }

    /// Verify all expectations and panic if one is not met.
    ///
    /// # Panics
    /// Panics with the verification report if any expectation is not met.
    pub fn checkpoint(&self) {
        if let Err(err) = self.verify() {
            panic!("{err}");
        }
    }

    pub(crate) fn report(&self) -> Report {
        let mut report = Report::default();

        let expectations = self.expectations();
        for ex in &expectations {
            if let Err(failure) = ex.lock().verify(self.name()) {
                report.push(failure);

                if self.shared.config.is_fail_fast() {
                    break;
                }
            }
        }

        debug!(
            method = self.name(),
            expectations = expectations.len(),
            failures = report.failures().len(),
            "verify"
        );

        report
    }
}

impl Default for MockMethod {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for MockMethod {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }
}

impl Eq for MockMethod {}

impl Debug for MockMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let state = self.shared.state.lock();

        f.debug_struct("MockMethod")
            .field("name", &self.name())
            .field("expectations", &state.expectations.len())
            .field("calls", &state.history.len())
            .field("return_value", &state.return_value)
            .finish()
    }
}
