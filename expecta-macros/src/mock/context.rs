use std::collections::HashMap;

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{FnArg, Pat, PatIdent, ReturnType, Type};

use crate::misc::{format_expect_call, format_on_call, ident_expecta, IterEx, TypeEx};

use super::parsed::{Impl, MockedMethod, Parsed};

/// Data that is shared by all generated items of one mock! block.
pub(crate) struct Context {
    pub ident_expecta: Ident,
    pub ident_mock: Ident,
    pub method_count: HashMap<String, usize>,
}

impl Context {
    pub(crate) fn new(parsed: &Parsed) -> Self {
        let mut method_count = HashMap::<String, usize>::new();
        for impl_ in &parsed.impls {
            for method in &impl_.methods {
                *method_count.entry(method.ident().to_string()).or_default() += 1;
            }
        }

        Self {
            ident_expecta: ident_expecta(),
            ident_mock: parsed.ty.ident.clone(),
            method_count,
        }
    }
}

/// Data that is needed to render a single mocked method.
pub(crate) struct MethodContext {
    /// Name of the interface the method belongs to.
    pub interface: String,

    /// Name of the method.
    pub method: String,

    /// Type of the argument tuple inside the engine.
    pub args_type: TokenStream,

    /// Expression that builds the argument tuple from the method arguments.
    pub args_value: TokenStream,

    /// Return type of the method.
    pub ret: Type,

    /// Builder methods that are generated for the method.
    pub ident_expect: Ident,
    pub ident_on_call: Ident,

    /// Short builder methods, only generated if the method name is unique.
    pub ident_expect_short: Option<Ident>,
    pub ident_on_call_short: Option<Ident>,
}

impl MethodContext {
    pub(crate) fn new(context: &Context, impl_: &Impl, method: &MockedMethod) -> Self {
        let ident = method.ident();
        let trait_ = impl_.trait_.as_ref();

        let interface = trait_.map_or_else(
            || context.ident_mock.to_string(),
            |t| {
                t.segments
                    .iter()
                    .map(|s| s.ident.to_string())
                    .collect::<Vec<_>>()
                    .join("::")
            },
        );

        let mut types = Vec::new();
        let mut values = Vec::new();
        for (index, input) in method.sig.inputs.iter().enumerate() {
            let FnArg::Typed(t) = input else {
                continue;
            };

            let name = arg_name(&t.pat, index);

            types.push(t.ty.to_owned_arg());
            values.push(match &*t.ty {
                Type::Reference(_) => quote!(::std::borrow::ToOwned::to_owned(#name)),
                _ => quote!(#name),
            });
        }

        let ret = match &method.sig.output {
            ReturnType::Default => Type::Verbatim(quote!(())),
            ReturnType::Type(_, t) => (**t).clone(),
        };

        let is_unique = context
            .method_count
            .get(&ident.to_string())
            .is_some_and(|count| *count == 1);
        let has_short = is_unique && trait_.is_some();

        Self {
            interface,
            method: ident.to_string(),
            args_type: types.parenthesis(),
            args_value: values.parenthesis(),
            ret,
            ident_expect: format_expect_call(ident, trait_),
            ident_on_call: format_on_call(ident, trait_),
            ident_expect_short: has_short.then(|| format_expect_call(ident, None)),
            ident_on_call_short: has_short.then(|| format_on_call(ident, None)),
        }
    }

    /// Expression that creates the operation handle of the method.
    pub(crate) fn operation(&self, ident_expecta: &Ident) -> TokenStream {
        let Self {
            interface,
            method,
            args_type,
            ret,
            ..
        } = self;

        quote!(#ident_expecta::Operation::<#args_type, #ret>::new(#interface, #method))
    }
}

/// Name the argument at `index` is bound to inside the generated method.
pub(crate) fn arg_name(pat: &Pat, index: usize) -> Ident {
    match pat {
        Pat::Ident(PatIdent {
            ident, subpat: None, ..
        }) => ident.clone(),
        _ => format_ident!("arg{index}"),
    }
}
