// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod trait_schema;

// -----------------------------------------------------------------------------
// Internal API

#[cfg(feature = "auto_register")]
pub(crate) use auto_register::auto_register_tokens;

use auto_register::get_auto_register_impl;
use trait_schema::impl_trait_schema;

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::SchemaStruct;

/// Generate every item `#[derive(Schema)]` expands to.
pub(crate) fn impl_schema(info: &SchemaStruct) -> TokenStream {
    let schema_trait_tokens = impl_trait_schema(info);
    let auto_register_tokens = get_auto_register_impl(info);

    quote! {
        const _: () = {
            #schema_trait_tokens

            #auto_register_tokens
        };
    }
}
