//! The [`types`](self) module defines the values that are passed to and
//! returned from mocked methods.

pub mod args;
pub mod value;

pub use args::Args;
pub use value::{ArgValue, Value};
