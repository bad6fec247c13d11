//! See following macros:
//!
//! - [`Schema`](derive_schema)
//! - [`impl_auto_register`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static SCHEMA_ATTRIBUTE_NAME: &str = "schema";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Schema Derivation
///
/// `#[derive(Schema)]` implements `Schema` for a non-generic struct with
/// named fields. Fields are described in declaration order and every field
/// type must implement `FieldType`.
///
/// ```rust, ignore
/// #[derive(Schema)]
/// struct Account {
///     #[schema(rename = "CustomFieldName")]
///     id: i32,
///     name: String,
/// }
/// ```
///
/// ## Wire Names
///
/// A field's wire name is its identifier, without the `r#` prefix of raw
/// identifiers. `rename` replaces it:
///
/// ```rust, ignore
/// #[derive(Schema)]
/// struct A {
///     #[schema(rename = "Type")]
///     r#type: String,
/// }
/// ```
///
/// Wire names must be unique within the type, non-empty, free of `:` and `,`
/// and must not start with whitespace. Violations are compile errors.
///
/// `rename` can only be applied to fields, at most once per field.
///
/// ## Skipping Fields
///
/// `skip` leaves a field out of the schema. It is never encoded nor decoded
/// and its type does not need to implement `FieldType`.
///
/// ```rust, ignore
/// #[derive(Schema)]
/// struct A {
///     name: String,
///     #[schema(skip)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// `skip` cannot be combined with `rename`.
///
/// ## Auto Registration
///
/// `auto_register` adds the type to `SchemaRegistry::auto_register`.
///
/// ```rust, ignore
/// #[derive(Schema)]
/// #[schema(auto_register)]
/// struct A { /* ... */ }
/// ```
///
/// This attribute is a no-op when the `auto_register` feature is disabled.
///
/// This attribute can only be applied at the type level.
#[proc_macro_derive(Schema, attributes(schema))]
pub fn derive_schema(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::SchemaStruct::from_derive_input(&ast) {
        Ok(info) => impls::impl_schema(&info).into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Add the type to the automatic registry.
///
/// If the feature is not enabled, this macro will not do anything.
///
/// The type must implement `Schema`.
///
/// ## Example
///
/// ```ignore
/// impl_auto_register!(foo::Account);
/// ```
///
/// This does not conflict with the `schema(auto_register)` attribute.
#[proc_macro]
pub fn impl_auto_register(_input: TokenStream) -> TokenStream {
    #[cfg(not(feature = "auto_register"))]
    return utils::empty().into();

    #[cfg(feature = "auto_register")]
    {
        let type_path = parse_macro_input!(_input as syn::Type);

        let fw_schema_path = path::fw_schema();
        let tokens = impls::auto_register_tokens(
            &fw_schema_path,
            &type_path,
            proc_macro2::Span::call_site(),
        );

        TokenStream::from(quote::quote! {
            const _: () = {
                #tokens
            };
        })
    }
}
