use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse2, Error};

use crate::misc::MethodCall;

pub fn exec(input: TokenStream) -> TokenStream {
    let call: MethodCall = match parse2(input) {
        Ok(call) => call,
        Err(err) => return err.to_compile_error(),
    };

    let Some(args) = &call.args else {
        return Error::new_spanned(&call.method, "Expect method call with arguments")
            .to_compile_error();
    };

    let args = match args.render() {
        Ok(args) => args,
        Err(err) => return err.to_compile_error(),
    };
    let member = call.member();

    let tokens = quote!(#member.call(#args));

    #[cfg(feature = "debug")]
    println!("\ncall!:\n{tokens:#}\n");

    tokens
}
