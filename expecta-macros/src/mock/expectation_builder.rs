use proc_macro2::{Ident, TokenStream};
use quote::quote;

use super::context::MethodContext;

pub(crate) struct ExpectationBuilder;

impl ExpectationBuilder {
    /// Render the methods of the mocked type that declare expectations and
    /// default actions for one mocked method.
    pub(crate) fn render(ident_expecta: &Ident, context: &MethodContext) -> TokenStream {
        let MethodContext {
            interface,
            method,
            args_type,
            ret,
            ident_expect,
            ident_on_call,
            ident_expect_short,
            ident_on_call_short,
            ..
        } = context;

        let operation = context.operation(ident_expecta);

        let doc_expect = format!("Declare a new call expectation for `{interface}::{method}`.");
        let doc_on_call = format!("Declare a new default action for `{interface}::{method}`.");

        let mut tokens = quote! {
            #[doc = #doc_expect]
            pub fn #ident_expect(&self) -> #ident_expecta::ExpectationBuilder<'_, #args_type, #ret> {
                self.mock.expect(&#operation)
            }

            #[doc = #doc_on_call]
            pub fn #ident_on_call(&self) -> #ident_expecta::OnCallBuilder<'_, #args_type, #ret> {
                self.mock.on_call(&#operation)
            }
        };

        if let Some(ident) = ident_expect_short {
            tokens.extend(quote! {
                #[doc = #doc_expect]
                pub fn #ident(&self) -> #ident_expecta::ExpectationBuilder<'_, #args_type, #ret> {
                    self.#ident_expect()
                }
            });
        }

        if let Some(ident) = ident_on_call_short {
            tokens.extend(quote! {
                #[doc = #doc_on_call]
                pub fn #ident(&self) -> #ident_expecta::OnCallBuilder<'_, #args_type, #ret> {
                    self.#ident_on_call()
                }
            });
        }

        tokens
    }
}
