use proc_macro2::Ident;
use syn::{
    parse::{Parse, ParseStream, Result as ParseResult},
    parse2,
    spanned::Spanned,
    token::Brace,
    Attribute, Error, Fields, GenericParam, Generics, ImplItem, ItemImpl, ItemStruct, Path,
    Signature, Token, Type, Visibility,
};

use crate::misc::{AttribsEx, MethodEx};

/// Parsed code inside the mock! macro
pub(crate) struct Parsed {
    pub ty: ItemStruct,
    pub impls: Vec<Impl>,
}

/// Parsed `impl` block of the mock! macro
pub(crate) struct Impl {
    pub generics: Generics,
    pub trait_: Option<Path>,
    pub self_ty: Type,
    pub methods: Vec<MockedMethod>,
    pub passthrough: Vec<ImplItem>,
}

/// Method without body that is forwarded to the engine.
pub(crate) struct MockedMethod {
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub sig: Signature,
    pub no_default: bool,
}

impl Parse for Parsed {
    fn parse(input: ParseStream) -> ParseResult<Self> {
        let ty = input.parse::<ItemStruct>()?;

        if !matches!(ty.fields, Fields::Unit) {
            return Err(Error::new(
                ty.fields.span(),
                "The mocked type must be declared as unit struct, the fields are generated!",
            ));
        }

        if let Some(lt) = ty.generics.lifetimes().next() {
            return Err(Error::new(
                lt.span(),
                "Lifetime parameters on the mocked type are not supported!",
            ));
        }

        /* `Default` is always implemented by the generated code */
        let ty = ty.remove_derive("Default");

        let mut impls = Vec::new();
        while !input.is_empty() {
            let impl_ = input.parse::<ItemImpl>()?;

            match &*impl_.self_ty {
                Type::Path(p)
                    if p.qself.is_none()
                        && p.path.segments.len() == 1
                        && p.path.segments[0].ident == ty.ident => {}
                t => {
                    return Err(Error::new(
                        t.span(),
                        "Implementing traits for a different type than the mocked one is not supported!",
                    ))
                }
            }

            impls.push(Impl::new(impl_)?);
        }

        Ok(Self { ty, impls })
    }
}

impl Impl {
    fn new(impl_: ItemImpl) -> ParseResult<Self> {
        if let Some(lt) = impl_
            .generics
            .params
            .iter()
            .find(|p| matches!(p, GenericParam::Lifetime(_)))
        {
            return Err(Error::new(
                lt.span(),
                "Lifetime parameters on mocked implementations are not supported!",
            ));
        }

        let ItemImpl {
            generics,
            trait_,
            self_ty,
            items,
            ..
        } = impl_;

        let trait_ = match trait_ {
            Some((Some(bang), _, _)) => {
                return Err(Error::new(
                    bang.span(),
                    "Negative implementations can not be mocked!",
                ))
            }
            Some((None, path, _)) => Some(path),
            None => None,
        };

        let mut methods = Vec::new();
        let mut passthrough = Vec::new();

        for item in items {
            match item {
                ImplItem::Verbatim(ts) => methods.push(parse2::<MockedMethod>(ts)?),
                item @ (ImplItem::Fn(_) | ImplItem::Type(_) | ImplItem::Const(_)) => {
                    passthrough.push(item);
                }
                item => {
                    return Err(Error::new(
                        item.span(),
                        "Unsupported item in mocked implementation!",
                    ))
                }
            }
        }

        Ok(Self {
            generics,
            trait_,
            self_ty: *self_ty,
            methods,
            passthrough,
        })
    }
}

impl Parse for MockedMethod {
    fn parse(input: ParseStream) -> ParseResult<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis = input.parse::<Visibility>()?;
        let sig = input.parse::<Signature>()?;

        if input.peek(Brace) {
            return Err(input.error("Unexpected method body!"));
        }

        input.parse::<Token![;]>()?;

        sig.check_mockable()?;

        let no_default = attrs.has_expecta_attr("no_default");
        let attrs = attrs.remove_expecta_attrs();

        Ok(Self {
            attrs,
            vis,
            sig,
            no_default,
        })
    }
}

impl MockedMethod {
    pub(crate) fn ident(&self) -> &Ident {
        &self.sig.ident
    }
}
