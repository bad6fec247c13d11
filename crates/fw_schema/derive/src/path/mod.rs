//! This independent module is used to provide the required paths,
//! so that changes to the `fw_schema` layout stay local to this file.
//!
//! The only special case is the path of `fw_schema` itself,
//! see the [`fw_schema`] function doc.

use proc_macro2::TokenStream;
use quote::quote;

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `fw_schema` crate.
///
/// 1. For crates that depend on `fw_schema`, `::fw_schema` is returned.
/// 2. For crates that depend on `fieldwire`, `::fieldwire::schema` is returned.
/// 3. For crates that depend on `fw`, `::fw::schema` is returned.
/// 4. Otherwise `::fw_schema` is returned, which may be incorrect.
///
/// This reads the caller's `Cargo.toml`, so the path is obtained once per
/// expansion and passed around.
pub(crate) fn fw_schema() -> syn::Path {
    fw_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("fw_schema"))
}

// -----------------------------------------------------------------------------
// Internal API

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(fw_schema_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_schema_path::__macro_exports::auto_register
    }
}

#[inline(always)]
pub(crate) fn schema_(fw_schema_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_schema_path::Schema
    }
}

#[inline(always)]
pub(crate) fn schema_info_(fw_schema_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_schema_path::info::SchemaInfo
    }
}

#[inline(always)]
pub(crate) fn field_info_(fw_schema_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_schema_path::info::FieldInfo
    }
}

#[inline(always)]
pub(crate) fn schema_info_cell_(fw_schema_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_schema_path::impls::SchemaInfoCell
    }
}

#[inline(always)]
pub(crate) fn field_type_(fw_schema_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_schema_path::value::FieldType
    }
}

#[inline(always)]
pub(crate) fn field_value_(fw_schema_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_schema_path::value::FieldValue
    }
}

#[inline(always)]
pub(crate) fn field_value_error_(fw_schema_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_schema_path::value::FieldValueError
    }
}
