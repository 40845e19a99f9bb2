//! The [`error`](self) module defines the [`Error`] type returned by fallible
//! declarations and by verification.

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

/// Main error type of `yamf`.
#[derive(Error, Debug)]
pub enum Error {
    /// One or more declared expectations were not met.
    #[error("Verification failed: {0}")]
    VerificationFailed(Report),

    /// A declaration or an adapter was used in an unsupported way.
    #[error("Misuse: {0}")]
    Misuse(String),

    /// Index of a mock array is out of range.
    #[error("Index {index} is out of range for mock array of length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,

        /// Number of mocks in the array.
        len: usize,
    },

    /// The called name has no binding in the namespace.
    #[error("Name `{name}` is not bound in namespace `{namespace}`")]
    Unbound {
        /// Name of the namespace.
        namespace: String,

        /// Name that was looked up.
        name: String,
    },
}

impl Error {
    /// Create a misuse error.
    #[must_use]
    pub fn misuse(message: impl Into<String>) -> Self {
        Self::Misuse(message.into())
    }

    /// Returns the verification report if this is a [`Error::VerificationFailed`].
    #[must_use]
    pub fn report(&self) -> Option<&Report> {
        match self {
            Self::VerificationFailed(report) => Some(report),
            _ => None,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// A single unmet expectation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Failure {
    /// Name of the method the expectation was declared on.
    pub method: String,

    /// Human readable contract of the expectation.
    pub expected: String,

    /// What was actually observed.
    pub observed: String,

    /// Optional description of the declaration (e.g. its source location).
    pub description: Option<String>,
}

impl Display for Failure {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "Method `{}` was {}, but expected to be {}",
            self.method, self.observed, self.expected
        )?;

        if let Some(desc) = &self.description {
            write!(f, " ({desc})")?;
        }

        Ok(())
    }
}

/// Collection of [`Failure`]s gathered by one verification pass.
///
/// With the default fail-fast policy the report contains exactly one failure.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Report(Vec<Failure>);

impl Report {
    /// Failures in the order they were found.
    #[must_use]
    pub fn failures(&self) -> &[Failure] {
        &self.0
    }

    /// Returns `true` if no failure was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn push(&mut self, failure: Failure) {
        self.0.push(failure);
    }

    pub(crate) fn extend(&mut self, other: Report) {
        self.0.extend(other.0);
    }

    pub(crate) fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(Error::VerificationFailed(self))
        }
    }
}

impl From<Failure> for Report {
    fn from(failure: Failure) -> Self {
        Self(vec![failure])
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.0.as_slice() {
            [] => write!(f, "no failures"),
            [failure] => write!(f, "{failure}"),
            failures => {
                write!(f, "{} expectations were not met", failures.len())?;
                for failure in failures {
                    write!(f, "\n  - {failure}")?;
                }

                Ok(())
            }
        }
    }
}
