use syn::{punctuated::Punctuated, token::Comma, Attribute, ItemStruct, Meta, Path};

pub(crate) trait AttribsEx: Sized {
    /// `true` if one of the attributes is `#[expecta(.., ident, ..)]`.
    fn has_expecta_attr(&self, ident: &str) -> bool;

    /// Drop all `#[expecta(..)]` attributes, rustc does not know them.
    fn remove_expecta_attrs(self) -> Self;

    /// Remove `ident` from all `#[derive(..)]` lists.
    fn remove_derive(self, ident: &str) -> Self;
}

fn paths(attr: &Attribute) -> Option<Punctuated<Path, Comma>> {
    attr.parse_args_with(Punctuated::<Path, Comma>::parse_terminated)
        .ok()
}

impl AttribsEx for Vec<Attribute> {
    fn has_expecta_attr(&self, ident: &str) -> bool {
        self.iter()
            .filter(|attr| attr.path().is_ident("expecta"))
            .filter_map(paths)
            .any(|paths| paths.iter().any(|p| p.is_ident(ident)))
    }

    fn remove_expecta_attrs(mut self) -> Self {
        self.retain(|attr| !attr.path().is_ident("expecta"));

        self
    }

    fn remove_derive(self, ident: &str) -> Self {
        self.into_iter()
            .filter_map(|mut attr| {
                if !attr.path().is_ident("derive") {
                    return Some(attr);
                }

                let Some(derives) = paths(&attr) else {
                    return Some(attr);
                };

                let derives = derives
                    .into_iter()
                    .filter(|p| !p.is_ident(ident))
                    .collect::<Punctuated<Path, Comma>>();

                if derives.is_empty() {
                    return None;
                }

                if let Meta::List(list) = &mut attr.meta {
                    list.tokens = quote::ToTokens::into_token_stream(derives);
                }

                Some(attr)
            })
            .collect()
    }
}

impl AttribsEx for ItemStruct {
    fn has_expecta_attr(&self, ident: &str) -> bool {
        self.attrs.has_expecta_attr(ident)
    }

    fn remove_expecta_attrs(mut self) -> Self {
        self.attrs = self.attrs.remove_expecta_attrs();

        self
    }

    fn remove_derive(mut self, ident: &str) -> Self {
        self.attrs = self.attrs.remove_derive(ident);

        self
    }
}
