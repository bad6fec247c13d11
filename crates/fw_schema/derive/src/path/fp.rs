//! Fully-qualified paths of `core` items, immune to shadowing at the
//! expansion site.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

/// `::core::option::Option`
pub(crate) struct OptionFP;

/// `::core::result::Result`
pub(crate) struct ResultFP;

/// `::core::any::type_name`
pub(crate) struct TypeNameFP;

impl ToTokens for OptionFP {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        quote!(::core::option::Option).to_tokens(tokens);
    }
}

impl ToTokens for ResultFP {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        quote!(::core::result::Result).to_tokens(tokens);
    }
}

impl ToTokens for TypeNameFP {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        quote!(::core::any::type_name).to_tokens(tokens);
    }
}
