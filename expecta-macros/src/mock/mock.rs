use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{Fields, FieldsNamed, ItemStruct};

use crate::misc::AttribsEx;

use super::context::Context;

/// Generates the mock type itself, its constructors and helpers.
pub(crate) struct Mock<'a> {
    context: &'a Context,
    ty: &'a ItemStruct,
}

impl<'a> Mock<'a> {
    pub(crate) fn new(context: &'a Context, ty: &'a ItemStruct) -> Self {
        Self { context, ty }
    }
}

impl ToTokens for Mock<'_> {
    #[allow(clippy::too_many_lines)]
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self { context, ty } = self;
        let Context {
            ident_expecta,
            ident_mock,
            ..
        } = context;

        let type_params = ty.generics.type_params().map(|p| &p.ident);
        let fields: FieldsNamed = syn::parse_quote!({
            mock: #ident_expecta::Mock,
            _marker: ::std::marker::PhantomData<fn() -> (#( #type_params, )*)>,
        });

        let mut ty = (*ty).clone().remove_expecta_attrs();
        ty.fields = Fields::Named(fields);
        ty.semi_token = None;

        let (ga_impl, ga_types, ga_where) = ty.generics.split_for_impl();
        let name = ident_mock.to_string();

        tokens.extend(quote! {
            #ty

            impl #ga_impl #ident_mock #ga_types #ga_where {
                /// Create a new mocked object that uses the leniency configured
                /// for the current process.
                pub fn new() -> Self {
                    Self::with_leniency(#ident_expecta::Config::current().default_leniency)
                }

                /// Create a new mocked object that fails on every unexpected call.
                pub fn strict() -> Self {
                    Self::with_leniency(#ident_expecta::Leniency::Strict)
                }

                /// Create a new mocked object that warns about unexpected calls.
                pub fn naggy() -> Self {
                    Self::with_leniency(#ident_expecta::Leniency::Naggy)
                }

                /// Create a new mocked object that silently accepts unexpected calls.
                pub fn nice() -> Self {
                    Self::with_leniency(#ident_expecta::Leniency::Nice)
                }

                /// Create a new mocked object with the passed `leniency`.
                pub fn with_leniency(leniency: #ident_expecta::Leniency) -> Self {
                    Self::from_mock(#ident_expecta::Mock::with_leniency(#name, leniency))
                }

                /// Create a new mocked object that uses the passed engine instance.
                pub fn from_mock(mock: #ident_expecta::Mock) -> Self {
                    Self {
                        mock,
                        _marker: ::std::marker::PhantomData,
                    }
                }

                /// Get the engine instance of this mocked object.
                pub fn mock_handle(&self) -> &#ident_expecta::Mock {
                    &self.mock
                }

                /// Verify and discard all expectations, then accept new ones.
                ///
                /// # Panics
                /// Panics if the verification failed.
                pub fn checkpoint(&self) {
                    self.mock.checkpoint();
                }

                /// Verify all expectations and discard them.
                ///
                /// # Errors
                /// Returns the failures that were collected since the last verification.
                pub fn verify(&self) -> ::std::result::Result<(), #ident_expecta::VerificationError> {
                    self.mock.verify()
                }
            }

            impl #ga_impl ::std::default::Default for #ident_mock #ga_types #ga_where {
                fn default() -> Self {
                    Self::new()
                }
            }
        });
    }
}
