use std::collections::BTreeMap;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

use super::{ArgValue, Value};

/// Arguments of a single call: an ordered list of positional values plus a
/// mapping of named values.
///
/// Two [`Args`] are equal if both the positional lists and the named mappings
/// are equal. The order in which named values were added does not matter.
#[derive(Clone, Default, PartialEq)]
pub struct Args {
    positional: Vec<Value>,
    named: BTreeMap<String, Value>,
}

impl Args {
    /// Create an empty argument list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    #[must_use]
    pub fn arg<T: ArgValue>(mut self, value: T) -> Self {
        self.positional.push(Value::new(value));

        self
    }

    /// Add (or replace) a named argument.
    #[must_use]
    pub fn named<K: Into<String>, T: ArgValue>(mut self, key: K, value: T) -> Self {
        self.named.insert(key.into(), Value::new(value));

        self
    }

    /// The positional arguments in call order.
    #[must_use]
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// The named arguments, ordered by name.
    #[must_use]
    pub fn keywords(&self) -> &BTreeMap<String, Value> {
        &self.named
    }

    /// Get the positional argument at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    /// Get the named argument `key`.
    #[must_use]
    pub fn get_named(&self, key: &str) -> Option<&Value> {
        self.named.get(key)
    }

    /// Number of positional and named arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    /// Returns `true` if there are neither positional nor named arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}

impl Display for Args {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "(")?;

        let mut first = true;
        for value in &self.positional {
            if !std::mem::take(&mut first) {
                write!(f, ", ")?;
            }
            write!(f, "{value:?}")?;
        }

        for (key, value) in &self.named {
            if !std::mem::take(&mut first) {
                write!(f, ", ")?;
            }
            write!(f, "{key} = {value:?}")?;
        }

        write!(f, ")")
    }
}

impl Debug for Args {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(self, f)
    }
}
