use proc_macro2::TokenStream;
use quote::{quote, ToTokens};

pub(crate) trait IterEx {
    /// Render the items the way the engine expects call arguments: `()` for
    /// no item, the bare item for one and a tuple for more.
    fn parenthesis(self) -> TokenStream;
}

impl<X> IterEx for X
where
    X: IntoIterator,
    X::Item: ToTokens,
{
    fn parenthesis(self) -> TokenStream {
        let items = self.into_iter().collect::<Vec<_>>();

        match items.as_slice() {
            [] => quote!(()),
            [item] => item.to_token_stream(),
            items => quote!((#( #items ),*)),
        }
    }
}
