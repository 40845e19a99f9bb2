#![warn(
    unused,
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]
#![allow(clippy::module_name_repetitions)]

use expect_call::CallMode;
use proc_macro::TokenStream;

mod args;
mod call;
mod expect_call;
mod misc;

/// Build an `Args` value. Positional arguments are written as plain
/// expressions, named arguments as `name = value`.
///
/// `args!(5, "a", name = 1)` expands to
/// `Args::new().arg(5).arg("a").named("name", 1)`.
#[proc_macro]
pub fn args(input: TokenStream) -> TokenStream {
    args::exec(input.into()).into()
}

/// Declare a must-be-called expectation: `expect_call!(mock, method(args..))`.
///
/// `method(..)` or a bare `method` accepts any arguments. Evaluates to
/// `Result<CallExpectation, Error>`.
#[proc_macro]
pub fn expect_call(input: TokenStream) -> TokenStream {
    expect_call::exec(input.into(), CallMode::MustBeCalled).into()
}

/// Declare a must-not-be-called expectation: `expect_no_call!(mock, method)`.
///
/// Evaluates to `Result<CallNotExpected, Error>`.
#[proc_macro]
pub fn expect_no_call(input: TokenStream) -> TokenStream {
    expect_call::exec(input.into(), CallMode::MustNotBeCalled).into()
}

/// Call a mocked method: `call!(mock, method(args..))`.
#[proc_macro]
pub fn call(input: TokenStream) -> TokenStream {
    call::exec(input.into()).into()
}
