use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{parse_quote, GenericParam, WherePredicate};

use super::context::{Context, MethodContext};
use super::expectation_builder::ExpectationBuilder;
use super::mock::Mock;
use super::mock_method::MockMethod;
use super::parsed::{Impl, Parsed};

/// Everything the mock! macro generates for one parsed block.
pub(crate) struct Mocked {
    context: Context,
    parsed: Parsed,
}

impl Mocked {
    pub(crate) fn new(parsed: Parsed) -> Self {
        let context = Context::new(&parsed);

        Self { context, parsed }
    }

    fn render_impl(&self, impl_: &Impl) -> TokenStream {
        let Context { ident_expecta, .. } = &self.context;
        let Impl {
            generics,
            trait_,
            self_ty,
            methods,
            passthrough,
        } = impl_;

        let contexts = methods
            .iter()
            .map(|method| MethodContext::new(&self.context, impl_, method))
            .collect::<Vec<_>>();

        /* the engine stores arguments and results as `'static` values */
        let mut generics_builder = generics.clone();
        let type_params = generics
            .params
            .iter()
            .filter_map(|p| match p {
                GenericParam::Type(t) => Some(t.ident.clone()),
                _ => None,
            })
            .collect::<Vec<_>>();
        for t in &type_params {
            let predicate: WherePredicate = parse_quote!(#t: 'static);
            generics_builder
                .make_where_clause()
                .predicates
                .push(predicate);
        }

        /* unanswered calls of generic results fall back to `Default` */
        let mut generics_trait = generics_builder.clone();
        if !type_params.is_empty() {
            for (context, method) in contexts.iter().zip(methods) {
                if method.no_default {
                    continue;
                }

                let ret = &context.ret;
                let predicate: WherePredicate = parse_quote!(#ret: ::std::default::Default);
                generics_trait.make_where_clause().predicates.push(predicate);
            }
        }

        let builders = contexts
            .iter()
            .map(|context| ExpectationBuilder::render(ident_expecta, context));
        let methods = contexts
            .iter()
            .zip(methods)
            .map(|(context, method)| MockMethod::render(ident_expecta, context, method));

        let (ga_builder_impl, _, ga_builder_where) = generics_builder.split_for_impl();
        let (ga_trait_impl, _, ga_trait_where) = generics_trait.split_for_impl();
        let trait_ = trait_.as_ref().map(|t| quote!(#t for));

        quote! {
            impl #ga_builder_impl #self_ty #ga_builder_where {
                #( #builders )*
            }

            impl #ga_trait_impl #trait_ #self_ty #ga_trait_where {
                #( #passthrough )*
                #( #methods )*
            }
        }
    }
}

impl ToTokens for Mocked {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        Mock::new(&self.context, &self.parsed.ty).to_tokens(tokens);

        for impl_ in &self.parsed.impls {
            tokens.extend(self.render_impl(impl_));
        }
    }
}
