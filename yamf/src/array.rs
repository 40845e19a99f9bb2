//! The [`array`](self) module implements [`MockArray`], a fixed number of
//! independent mock objects behind one handle.

use std::ops::Index;
use std::slice::Iter;

use crate::error::{Error, Report, Result};
use crate::{
    ArgValue, Args, CallExpectation, CallNotExpected, Config, Delegate, MockMethod, MockObject,
    Value,
};

/// Array of independent [`MockObject`]s.
///
/// Calls made through [`member`](Self::member) are fanned out to every mock,
/// while indexing gives access to a single mock for per-instance setup.
#[derive(Debug, Clone)]
pub struct MockArray {
    config: Config,
    mocks: Vec<MockObject>,
}

impl MockArray {
    /// Create a new array of `count` mocks.
    ///
    /// # Errors
    /// Returns [`Error::Misuse`] if `count` is zero.
    pub fn new(count: usize) -> Result<Self> {
        Self::with_config(count, Config::default())
    }

    /// Create a new array of `count` mocks that all use `config`.
    ///
    /// # Errors
    /// Returns [`Error::Misuse`] if `count` is zero.
    pub fn with_config(count: usize, config: Config) -> Result<Self> {
        if count == 0 {
            return Err(Error::misuse("Mock count must be greater than zero"));
        }

        Ok(Self {
            config,
            mocks: (0..count).map(|_| MockObject::with_config(config)).collect(),
        })
    }

    /// Number of mocks in the array.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mocks.len()
    }

    /// Always `false`, an array holds at least one mock.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mocks.is_empty()
    }

    /// Get the mock at `index`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index` is out of range.
    pub fn get(&self, index: usize) -> Result<&MockObject> {
        self.mocks.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.mocks.len(),
        })
    }

    /// Iterate over the mocks.
    pub fn iter(&self) -> Iter<'_, MockObject> {
        self.mocks.iter()
    }

    /// Get the method `name` of every mock as one [`FanOut`].
    #[must_use]
    pub fn member(&self, name: &str) -> FanOut {
        FanOut {
            methods: self.mocks.iter().map(|mock| mock.member(name)).collect(),
        }
    }

    /// Call every mock of the array. The arguments are ignored and the array
    /// is returned.
    pub fn call(&self, args: Args) -> &Self {
        for mock in &self.mocks {
            mock.call(args.clone());
        }

        self
    }

    /// Verify every mock of the array.
    ///
    /// # Errors
    /// Returns [`Error::VerificationFailed`] if any mock has an unmet
    /// expectation.
    pub fn verify(&self) -> Result<()> {
        let mut report = Report::default();
        for mock in &self.mocks {
            report.extend(mock.report());

            if self.config.is_fail_fast() && !report.is_empty() {
                break;
            }
        }

        report.into_result()
    }

    /// Verify all mocks and panic if one has an unmet expectation.
    ///
    /// # Panics
    /// Panics with the verification report if any expectation is not met.
    pub fn checkpoint(&self) {
        if let Err(err) = self.verify() {
            panic!("{err}");
        }
    }
}

impl Index<usize> for MockArray {
    type Output = MockObject;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(mock) => mock,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a> IntoIterator for &'a MockArray {
    type Item = &'a MockObject;
    type IntoIter = Iter<'a, MockObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The same method of every mock in a [`MockArray`].
#[derive(Debug, Clone)]
pub struct FanOut {
    methods: Vec<MockMethod>,
}

impl FanOut {
    /// Call the method of every mock with the same arguments, in array order.
    /// Returns the return value of every call.
    pub fn call(&self, args: Args) -> Vec<Option<Value>> {
        self.methods
            .iter()
            .map(|method| method.call(args.clone()))
            .collect()
    }

    /// The methods, one per mock.
    #[must_use]
    pub fn methods(&self) -> &[MockMethod] {
        &self.methods
    }

    /// Declare on every mock that this method must be called. Returns one
    /// handle per mock, in array order.
    ///
    /// # Errors
    /// Returns [`Error::Misuse`] if the method of any mock was already
    /// declared as must-not-be-called.
    pub fn expect_must_be_called(&self) -> Result<Vec<CallExpectation>> {
        self.methods
            .iter()
            .map(MockMethod::expect_must_be_called)
            .collect()
    }

    /// Declare on every mock that this method must not be called.
    ///
    /// # Errors
    /// Returns [`Error::Misuse`] if the method of any mock was already
    /// declared as must-be-called.
    pub fn expect_must_not_be_called(&self) -> Result<Vec<CallNotExpected>> {
        self.methods
            .iter()
            .map(MockMethod::expect_must_not_be_called)
            .collect()
    }

    /// Set the same return value on every mock.
    pub fn set_return_value<T: ArgValue + Clone>(&self, value: T) {
        for method in &self.methods {
            method.set_return_value(value.clone());
        }
    }

    /// Set a copy of `delegate` on every mock.
    pub fn set_delegate<D: Delegate + Clone + 'static>(&self, delegate: D) {
        for method in &self.methods {
            method.set_delegate(delegate.clone());
        }
    }
}
