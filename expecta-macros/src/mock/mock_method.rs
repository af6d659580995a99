use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{FnArg, Pat, PatIdent, PatType};

use super::context::{arg_name, MethodContext};
use super::parsed::MockedMethod;

pub(crate) struct MockMethod;

impl MockMethod {
    /// Render the implementation of a mocked method that forwards the call
    /// to the engine.
    pub(crate) fn render(
        ident_expecta: &Ident,
        context: &MethodContext,
        method: &MockedMethod,
    ) -> TokenStream {
        let MockedMethod {
            attrs,
            vis,
            sig,
            no_default,
        } = method;

        /* bind every argument to a plain name, the patterns are applied by the engine */
        let mut sig = sig.clone();
        for (index, input) in sig.inputs.iter_mut().enumerate() {
            if let FnArg::Typed(PatType { pat, .. }) = input {
                let ident = arg_name(pat, index);

                **pat = Pat::Ident(PatIdent {
                    attrs: Vec::new(),
                    by_ref: None,
                    mutability: None,
                    ident,
                    subpat: None,
                });
            }
        }

        let operation = context.operation(ident_expecta);
        let args = &context.args_value;

        let invoke = if *no_default {
            quote! {
                #ident_expecta::Mock::invoke_or_else(&self.mock, &__expecta_operation, #args, || {
                    panic!("No default action specified for call to {}", __expecta_operation)
                })
            }
        } else {
            quote! {
                #ident_expecta::Mock::invoke(&self.mock, &__expecta_operation, #args)
            }
        };

        quote! {
            #( #attrs )*
            #vis #sig {
                let __expecta_operation = #operation;

                #invoke
            }
        }
    }
}
