use proc_macro2::TokenStream;

use crate::derive_data::SchemaStruct;

/// Generate `auto_register` implementation
pub(crate) fn get_auto_register_impl(info: &SchemaStruct) -> TokenStream {
    match info.attrs().auto_register {
        #[cfg(feature = "auto_register")]
        Some(span) => auto_register_tokens(info.fw_schema_path(), info.ident(), span),
        _ => crate::utils::empty(),
    }
}

/// Submits `<ty as __RegisterType>::__register` to the inventory.
#[cfg(feature = "auto_register")]
pub(crate) fn auto_register_tokens(
    fw_schema_path: &syn::Path,
    ty: &impl quote::ToTokens,
    span: proc_macro2::Span,
) -> TokenStream {
    let auto_register_ = crate::path::auto_register_(fw_schema_path);

    quote::quote_spanned! { span =>
        #auto_register_::inventory::submit!{
            #auto_register_::__AutoRegisterFunc(
                <#ty as #auto_register_::__RegisterType>::__register
            )
        }
    }
}
