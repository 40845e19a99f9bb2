//! The [`config`](self) module contains the runtime settings of mock objects.

/// Defines how failures are gathered by one verification pass.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum Policy {
    /// Stop at the first unmet expectation and report only that one.
    #[default]
    FailFast,

    /// Check every expectation and report all unmet ones together.
    CollectAll,
}

/// Settings of a [`MockObject`](crate::MockObject). Every method of the object
/// inherits the settings of the object.
#[must_use]
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct Config {
    /// How failures are gathered by [`verify`](crate::MockObject::verify).
    pub policy: Policy,

    /// Verify when the last handle of the mock object is dropped and panic on
    /// failure. Disabled by default.
    pub verify_on_drop: bool,
}

impl Config {
    /// Create a new [`Config`] with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the failure [`Policy`].
    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;

        self
    }

    /// Enable or disable verification on drop.
    pub fn verify_on_drop(mut self, value: bool) -> Self {
        self.verify_on_drop = value;

        self
    }

    pub(crate) fn is_fail_fast(&self) -> bool {
        self.policy == Policy::FailFast
    }
}
