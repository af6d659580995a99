mod attribs_ex;
mod iter_ex;
mod method_ex;
mod type_ex;

use convert_case::{Case, Casing};
use proc_macro2::Ident;
use quote::format_ident;
use syn::Path;

pub(crate) use attribs_ex::AttribsEx;
pub(crate) use iter_ex::IterEx;
pub(crate) use method_ex::MethodEx;
pub(crate) use type_ex::TypeEx;

pub(crate) fn format_expect_call(method: &Ident, as_trait: Option<&Path>) -> Ident {
    format_builder(method, as_trait, "expect")
}

pub(crate) fn format_on_call(method: &Ident, as_trait: Option<&Path>) -> Ident {
    format_builder(method, as_trait, "on_call")
}

fn format_builder(method: &Ident, as_trait: Option<&Path>, kind: &str) -> Ident {
    if let Some(t) = as_trait {
        format_ident!("as_{}_{}_{}", format_trait(t), kind, method)
    } else {
        format_ident!("{}_{}", kind, method)
    }
}

fn format_trait(t: &Path) -> String {
    t.segments
        .iter()
        .map(|s| s.ident.to_string())
        .collect::<Vec<_>>()
        .join("_")
        .replace(|c: char| !c.is_alphanumeric(), "_")
        .to_case(Case::Snake)
}

#[cfg(feature = "force-name")]
pub(crate) fn ident_expecta() -> Ident {
    format_ident!("expecta")
}

#[cfg(not(feature = "force-name"))]
pub(crate) fn ident_expecta() -> Ident {
    use proc_macro_crate::{crate_name, FoundCrate};

    match crate_name("expecta") {
        Ok(FoundCrate::Name(name)) => format_ident!("{name}"),
        Ok(FoundCrate::Itself) | Err(_) => format_ident!("expecta"),
    }
}
