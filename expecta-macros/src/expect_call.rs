use proc_macro2::{Ident, TokenStream};
use quote::{quote, ToTokens};
use syn::{
    parenthesized,
    parse::{Parse, ParseStream},
    parse2,
    punctuated::Punctuated,
    token::Comma,
    Error, Expr, Path, Result as ParseResult, Token, Type,
};

use crate::misc::{format_expect_call, format_on_call, ident_expecta};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum CallMode {
    Expect,
    OnCall,
}

pub(crate) fn exec(input: TokenStream, mode: CallMode) -> TokenStream {
    let call: Call = match parse2(input) {
        Ok(call) => call,
        Err(err) => {
            return err.to_compile_error();
        }
    };

    let tokens = call.render(mode);

    #[cfg(feature = "debug")]
    println!("\n{mode:?}:\n{tokens:#}\n");

    tokens
}

/// `target [as Interface], method(arg_matcher, ..)`
struct Call {
    target: Expr,
    interface: Option<Path>,
    method: Ident,
    args: Punctuated<Expr, Comma>,
}

impl Call {
    fn render(&self, mode: CallMode) -> TokenStream {
        let ident_expecta = ident_expecta();
        let target = &self.target;
        let interface = self.interface.as_ref();

        let with = if self.args.is_empty() {
            quote!(.with(#ident_expecta::matcher::no_args()))
        } else {
            let args = self.args.iter().map(|arg| {
                if is_wildcard(arg) {
                    quote!(#ident_expecta::matcher::any())
                } else {
                    arg.to_token_stream()
                }
            });

            quote!(.with(#ident_expecta::matcher::multi((#( #args ),*))))
        };

        match mode {
            CallMode::Expect => {
                let builder = format_expect_call(&self.method, interface);

                quote! {
                    #target.#builder()
                        .description(format!("at {}:{}", file!(), line!()))
                        #with
                }
            }
            CallMode::OnCall => {
                let builder = format_on_call(&self.method, interface);

                quote!(#target.#builder()#with)
            }
        }
    }
}

fn is_wildcard(arg: &Expr) -> bool {
    match arg {
        Expr::Infer(_) => true,
        Expr::Verbatim(tokens) => tokens.to_string() == "_",
        _ => false,
    }
}

impl Parse for Call {
    fn parse(input: ParseStream) -> ParseResult<Self> {
        let (target, interface) = match input.parse::<Expr>()? {
            Expr::Cast(cast) => match *cast.ty {
                Type::Path(ty) => (*cast.expr, Some(ty.path)),
                ty => return Err(Error::new_spanned(ty, "expected interface path")),
            },
            target => (target, None),
        };

        input.parse::<Token![,]>()?;

        let method = input.parse::<Ident>()?;

        let content;
        parenthesized!(content in input);
        let args = content.parse_terminated(Expr::parse, Token![,])?;

        if !input.is_empty() {
            return Err(input.error("unexpected tokens after method call"));
        }

        Ok(Self {
            target,
            interface,
            method,
            args,
        })
    }
}
