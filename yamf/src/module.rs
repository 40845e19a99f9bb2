//! The [`module`](self) module contains the [`Namespace`] binding table and
//! the [`MockModule`] adapter that installs mocked methods into it.
//!
//! Code under test calls its collaborators through a [`Namespace`] instead of
//! calling them directly. A test then replaces single bindings of the
//! namespace with mocked methods:
//!
//! ```rust
//! use yamf::{Args, MockModule, Namespace};
//!
//! let fs = Namespace::global("fs");
//! fs.bind("cwd", |_| Some(yamf::Value::new("/home")));
//!
//! let module = MockModule::new("fs");
//! module.member("cwd").expect_must_be_called()?.returns("/tmp");
//!
//! let cwd = fs.call("cwd", Args::new())?;
//! assert_eq!(cwd.and_then(|v| v.get::<&str>()), Some("/tmp"));
//! module.verify()?;
//! # Ok::<(), yamf::Error>(())
//! ```
//!
//! Installing a mocked method overwrites the previous binding. Nothing is
//! restored automatically: keep the value returned by [`Namespace::bind`] and
//! bind it again if the original is needed later.

use std::collections::HashMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::{Args, Config, MockMethod, MockObject, Value};

/// Function that can be bound to a name in a [`Namespace`].
pub type Function = Arc<dyn Fn(Args) -> Option<Value> + Send + Sync>;

/// Named table of bindings, used to inject collaborators into code under test.
pub struct Namespace {
    name: String,
    bindings: Mutex<HashMap<String, Function>>,
}

impl Namespace {
    /// Create a new empty namespace.
    #[must_use]
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            bindings: Mutex::default(),
        }
    }

    /// Get the process wide namespace `name`, creating it on first access.
    #[must_use]
    pub fn global(name: &str) -> Arc<Self> {
        NAMESPACES
            .lock()
            .entry(name.to_owned())
            .or_insert_with(|| Arc::new(Self::new(name)))
            .clone()
    }

    /// Name of the namespace.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bind `f` to `name`. Returns the previous binding, if any.
    pub fn bind<S, F>(&self, name: S, f: F) -> Option<Function>
    where
        S: Into<String>,
        F: Fn(Args) -> Option<Value> + Send + Sync + 'static,
    {
        self.bind_function(name, Arc::new(f))
    }

    /// Bind an already shared function to `name`. Returns the previous
    /// binding, if any.
    pub fn bind_function<S: Into<String>>(&self, name: S, f: Function) -> Option<Function> {
        let name = name.into();

        debug!(namespace = %self.name, name = %name, "bind");

        self.bindings.lock().insert(name, f)
    }

    /// Remove the binding of `name`. Returns the removed binding, if any.
    pub fn unbind(&self, name: &str) -> Option<Function> {
        self.bindings.lock().remove(name)
    }

    /// Get the function bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Function> {
        self.bindings.lock().get(name).cloned()
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn is_bound(&self, name: &str) -> bool {
        self.bindings.lock().contains_key(name)
    }

    /// Call the function bound to `name`.
    ///
    /// # Errors
    /// Returns [`Error::Unbound`] if nothing is bound to `name`.
    pub fn call(&self, name: &str, args: Args) -> Result<Option<Value>> {
        let f = self.get(name).ok_or_else(|| Error::Unbound {
            namespace: self.name.clone(),
            name: name.to_owned(),
        })?;

        Ok(f(args))
    }
}

impl Debug for Namespace {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut names = self.bindings.lock().keys().cloned().collect::<Vec<_>>();
        names.sort();

        f.debug_struct("Namespace")
            .field("name", &self.name)
            .field("bindings", &names)
            .finish()
    }
}

static NAMESPACES: Lazy<Mutex<HashMap<String, Arc<Namespace>>>> =
    Lazy::new(|| Default::default());

/// Namespace a [`MockModule`] installs its methods into, either given by name
/// (looked up with [`Namespace::global`]) or by reference.
#[derive(Debug, Clone)]
pub enum Target {
    /// Name of a process wide namespace.
    Name(String),

    /// Direct reference to a namespace.
    Namespace(Arc<Namespace>),
}

impl Target {
    fn resolve(self) -> Arc<Namespace> {
        match self {
            Self::Name(name) => Namespace::global(&name),
            Self::Namespace(namespace) => namespace,
        }
    }
}

impl From<&str> for Target {
    fn from(value: &str) -> Self {
        Self::Name(value.to_owned())
    }
}

impl From<String> for Target {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

impl From<Arc<Namespace>> for Target {
    fn from(value: Arc<Namespace>) -> Self {
        Self::Namespace(value)
    }
}

impl From<&Arc<Namespace>> for Target {
    fn from(value: &Arc<Namespace>) -> Self {
        Self::Namespace(value.clone())
    }
}

/// Mock object whose methods are installed into a [`Namespace`] on access.
#[derive(Debug)]
pub struct MockModule {
    namespace: Arc<Namespace>,
    mock: MockObject,
}

impl MockModule {
    /// Create a new mock module for the passed `target` namespace.
    #[must_use]
    pub fn new<T: Into<Target>>(target: T) -> Self {
        Self::with_config(target, Config::default())
    }

    /// Create a new mock module with the passed `config`.
    #[must_use]
    pub fn with_config<T: Into<Target>>(target: T, config: Config) -> Self {
        Self {
            namespace: target.into().resolve(),
            mock: MockObject::with_config(config),
        }
    }

    /// Get the method `name` and install it as binding `name` of the namespace,
    /// overwriting the previous binding.
    #[must_use]
    pub fn member(&self, name: &str) -> MockMethod {
        let method = self.mock.member(name);

        let installed = method.clone();
        self.namespace.bind(name, move |args| installed.call(args));

        method
    }

    /// The namespace the methods are installed into.
    #[must_use]
    pub fn namespace(&self) -> &Arc<Namespace> {
        &self.namespace
    }

    /// The underlying mock object.
    #[must_use]
    pub fn mock(&self) -> &MockObject {
        &self.mock
    }

    /// Verify the expectations of all installed methods.
    ///
    /// # Errors
    /// Returns [`Error::VerificationFailed`] if any expectation is not met.
    pub fn verify(&self) -> Result<()> {
        self.mock.verify()
    }

    /// Verify all expectations and panic if one is not met.
    ///
    /// # Panics
    /// Panics with the verification report if any expectation is not met.
    pub fn checkpoint(&self) {
        self.mock.checkpoint();
    }
}
