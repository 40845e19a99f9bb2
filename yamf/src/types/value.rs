use std::any::Any;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

/// Any type that can be stored in a [`Value`].
///
/// Implemented for every `'static` type that is [`Debug`], [`PartialEq`],
/// [`Send`] and [`Sync`].
pub trait ArgValue: Any + Debug + Send + Sync {
    /// Returns `true` if `other` has the same concrete type and compares equal.
    fn eq_value(&self, other: &dyn ArgValue) -> bool;

    /// Upcast to [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl<T> ArgValue for T
where
    T: Any + Debug + PartialEq + Send + Sync,
{
    fn eq_value(&self, other: &dyn ArgValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Type erased, cheaply clonable value.
///
/// Two values are equal if they hold the same concrete type and the held
/// values compare equal. Values of different types never compare equal, so
/// `Value::new("a")` (a `&str`) is not equal to `Value::new(String::from("a"))`.
#[derive(Clone)]
pub struct Value(Arc<dyn ArgValue>);

impl Value {
    /// Wrap `value`. Wrapping a [`Value`] returns a clone of it instead of
    /// nesting it.
    pub fn new<T: ArgValue>(value: T) -> Self {
        if let Some(value) = (&value as &dyn Any).downcast_ref::<Self>() {
            return value.clone();
        }

        Self(Arc::new(value))
    }

    /// Returns a reference to the held value if it is of type `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref()
    }

    /// Returns `true` if the held value is of type `T`.
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.0.as_any().is::<T>()
    }

    /// Returns a clone of the held value if it is of type `T`.
    #[must_use]
    pub fn get<T: Any + Clone>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_value(&*other.0)
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&*self.0, f)
    }
}
