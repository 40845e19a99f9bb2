//! The [`object`](self) module implements [`MockObject`], a stand-in object
//! whose methods are created on first access.

use std::collections::HashMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;
use std::thread::panicking;

use parking_lot::Mutex;
use tracing::debug;

use crate::error::{Report, Result};
use crate::{Args, Config, MockMethod};

/// A mock object.
///
/// Methods are created on first access through [`member`](Self::member) and
/// live as long as the object. [`MockObject`] is a cheap handle: clones share
/// the same methods.
///
/// # Example
///
/// ```rust
/// use yamf::{Args, MockObject};
///
/// let mock = MockObject::new();
/// mock.member("fetch").expect_must_be_called()?.with_args(Args::new().arg(5)).once();
///
/// mock.member("fetch").call(Args::new().arg(5));
/// mock.verify()?;
/// # Ok::<(), yamf::Error>(())
/// ```
#[derive(Clone)]
pub struct MockObject {
    shared: Arc<Shared>,
}

struct Shared {
    config: Config,
    methods: Mutex<Methods>,
}

#[derive(Default)]
struct Methods {
    ordered: Vec<MockMethod>,
    by_name: HashMap<String, usize>,
}

impl MockObject {
    /// Create a new mock object with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a new mock object with the passed `config`.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            shared: Arc::new(Shared {
                config,
                methods: Mutex::default(),
            }),
        }
    }

    /// Settings of this object.
    #[must_use]
    pub fn config(&self) -> Config {
        self.shared.config
    }

    /// Get the method `name`, creating it on first access.
    ///
    /// Accessing the same name again returns a handle to the same method.
    #[must_use]
    pub fn member(&self, name: &str) -> MockMethod {
        let mut methods = self.shared.methods.lock();
        let Methods { ordered, by_name } = &mut *methods;

        let index = *by_name.entry(name.to_owned()).or_insert_with(|| {
            debug!(method = name, "create mock method");

            ordered.push(MockMethod::create(Some(name.to_owned()), self.shared.config));

            ordered.len() - 1
        });

        ordered[index].clone()
    }

    /// Call the object itself. The arguments are ignored and the object is
    /// returned, so a mock object can stand in for a factory or constructor.
    pub fn call(&self, _args: Args) -> &Self {
        self
    }

    /// Names of all methods created so far, in creation order.
    #[must_use]
    pub fn methods(&self) -> Vec<String> {
        self.shared
            .methods
            .lock()
            .ordered
            .iter()
            .map(|m| m.name().to_owned())
            .collect()
    }

    /// Verify the expectations of all methods, in creation order.
    ///
    /// With [`Policy::FailFast`](crate::Policy::FailFast) the first unmet
    /// expectation is reported, with [`Policy::CollectAll`](crate::Policy::CollectAll)
    /// all of them.
    ///
    /// # Errors
    /// Returns [`Error::VerificationFailed`](crate::Error::VerificationFailed)
    /// if any expectation is not met.
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
        self.shared.report()
    }
}

impl Shared {
    fn report(&self) -> Report {
        // Clone the handles so no method is verified while the map is locked.
        let methods = self.methods.lock().ordered.clone();

        let mut report = Report::default();
        for method in &methods {
            report.extend(method.report());

            if self.config.is_fail_fast() && !report.is_empty() {
                break;
            }
        }

        report
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        if self.config.verify_on_drop && !panicking() {
            if let Err(err) = self.report().into_result() {
                panic!("{err}");
            }
        }
    }
}

impl Default for MockObject {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for MockObject {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }
}

impl Eq for MockObject {}

impl Debug for MockObject {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("MockObject")
            .field("config", &self.shared.config)
            .field("methods", &self.methods())
            .finish()
    }
}
