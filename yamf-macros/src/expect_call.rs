use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse2, Error};

use crate::misc::MethodCall;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CallMode {
    MustBeCalled,
    MustNotBeCalled,
}

pub fn exec(input: TokenStream, mode: CallMode) -> TokenStream {
    let call: MethodCall = match parse2(input) {
        Ok(call) => call,
        Err(err) => {
            return err.to_compile_error();
        }
    };

    let tokens = match render(&call, mode) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    };

    #[cfg(feature = "debug")]
    println!("\nexpect_call!:\n{tokens:#}\n");

    tokens
}

fn render(call: &MethodCall, mode: CallMode) -> syn::Result<TokenStream> {
    let desc = quote!(format!("at {}:{}", file!(), line!()));
    let member = call.member();
    let args = call.args.as_ref().filter(|args| !args.is_wildcard());

    match mode {
        CallMode::MustBeCalled => {
            let with_args = match args {
                Some(args) => {
                    let args = args.render()?;

                    Some(quote!(.with_args(#args)))
                }
                None => None,
            };

            Ok(quote! {
                #member
                    .expect_must_be_called()
                    .map(|ex| ex.describe(#desc)#with_args)
            })
        }
        CallMode::MustNotBeCalled => {
            if let Some(args) = args.filter(|args| !args.0.is_empty()) {
                return Err(Error::new_spanned(
                    &args.0,
                    "`expect_no_call!` does not take arguments",
                ));
            }

            Ok(quote! {
                #member
                    .expect_must_not_be_called()
                    .map(|ex| ex.describe(#desc))
            })
        }
    }
}
