use proc_macro2::TokenStream;
use syn::parse2;

use crate::misc::ArgList;

pub fn exec(input: TokenStream) -> TokenStream {
    let args: ArgList = match parse2(input) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error(),
    };

    let tokens = args.render().unwrap_or_else(|err| err.to_compile_error());

    #[cfg(feature = "debug")]
    println!("\nargs!:\n{tokens:#}\n");

    tokens
}
