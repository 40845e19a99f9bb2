//! The [`delegate`](self) module defines the callable a mocked method forwards
//! every call to after its expectations have seen the call.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::Args;

/// Callable that is invoked with the exact arguments of every call of a mocked
/// method. Its result is discarded.
///
/// This is similar to [`FnMut`] of the standard library and is implemented for
/// every `FnMut(&Args) + Send` closure.
pub trait Delegate: Send {
    /// Execute the delegate with the passed arguments.
    fn exec(&mut self, args: &Args);
}

impl<X> Delegate for X
where
    X: FnMut(&Args) + Send,
{
    fn exec(&mut self, args: &Args) {
        self(args);
    }
}

/// Boxed [`Delegate`] as stored by a mocked method.
pub(crate) struct BoxedDelegate(Box<dyn Delegate + 'static>);

impl BoxedDelegate {
    pub(crate) fn new<D: Delegate + 'static>(delegate: D) -> Self {
        Self(Box::new(delegate))
    }

    /// Delegate that does nothing.
    pub(crate) fn noop() -> Self {
        Self::new(|_: &Args| ())
    }

    pub(crate) fn exec(&mut self, args: &Args) {
        self.0.exec(args);
    }
}

impl Debug for BoxedDelegate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Delegate")
    }
}
