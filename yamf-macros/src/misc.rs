use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token::Comma,
    Error, Expr, Result as ParseResult, Token,
};

/// Comma separated list of positional (`expr`) and named (`name = expr`)
/// arguments.
pub(crate) struct ArgList(pub Punctuated<Expr, Comma>);

impl ArgList {
    /// Returns `true` if the list is exactly `..`.
    pub(crate) fn is_wildcard(&self) -> bool {
        let mut iter = self.0.iter();

        matches!(
            (iter.next(), iter.next()),
            (Some(Expr::Range(r)), None) if r.start.is_none() && r.end.is_none()
        )
    }

    /// Render the list as `Args` builder expression.
    pub(crate) fn render(&self) -> ParseResult<TokenStream> {
        if self.is_wildcard() {
            return Err(Error::new_spanned(
                &self.0,
                "`..` is only allowed as the only argument of `expect_call!`",
            ));
        }

        let krate = ident_yamf();
        let items = self.0.iter().map(|arg| {
            if let Some((name, value)) = named_arg(arg) {
                quote!(.named(#name, #value))
            } else {
                quote!(.arg(#arg))
            }
        });

        Ok(quote!(#krate::Args::new() #( #items )*))
    }
}

impl Parse for ArgList {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        Ok(Self(Punctuated::parse_terminated(input)?))
    }
}

fn named_arg(expr: &Expr) -> Option<(String, &Expr)> {
    let Expr::Assign(assign) = expr else {
        return None;
    };
    let Expr::Path(path) = &*assign.left else {
        return None;
    };
    let ident = path.path.get_ident()?;

    Some((ident.to_string(), &assign.right))
}

/// `<object>, <method>(<args>)` or `<object>, <method>`.
pub(crate) struct MethodCall {
    pub obj: Expr,
    pub method: Ident,
    pub args: Option<ArgList>,
}

impl Parse for MethodCall {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let obj = input.parse()?;

        input.parse::<Token![,]>()?;

        let call: Expr = input.parse()?;
        input.parse::<Option<Token![,]>>()?;

        let (func, args) = match call {
            Expr::Call(call) => (*call.func, Some(ArgList(call.args))),
            func => (func, None),
        };

        let method = match &func {
            Expr::Path(p) => p.path.get_ident().cloned(),
            _ => None,
        };
        let Some(method) = method else {
            return Err(Error::new_spanned(func, "Expect method identifier"));
        };

        Ok(Self { obj, method, args })
    }
}

impl MethodCall {
    /// Name of the method as string literal.
    pub(crate) fn name(&self) -> String {
        self.method.to_string()
    }

    /// `#obj.member("method")`
    pub(crate) fn member(&self) -> TokenStream {
        let obj = self.obj.to_token_stream();
        let name = self.name();

        quote!(#obj.member(#name))
    }
}

#[cfg(feature = "force-name")]
pub(crate) fn ident_yamf() -> Ident {
    format_ident!("yamf")
}

#[cfg(not(feature = "force-name"))]
pub(crate) fn ident_yamf() -> Ident {
    use proc_macro_crate::{crate_name, FoundCrate};

    match crate_name("yamf") {
        Ok(FoundCrate::Itself) => format_ident!("crate"),
        Ok(FoundCrate::Name(name)) => format_ident!("{name}"),
        Err(_) => format_ident!("yamf"),
    }
}
