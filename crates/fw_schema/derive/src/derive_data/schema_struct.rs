use std::collections::HashMap;

use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Ident, LitStr, Type};

use super::wire_name::check_wire_name;
use super::{FieldAttributes, TypeAttributes};

const UNSUPPORTED_SHAPE: &str = "`Schema` can only be derived for structs with named fields";

/// A parsed `#[derive(Schema)]` input.
pub(crate) struct SchemaStruct<'a> {
    ident: &'a Ident,
    attrs: TypeAttributes,
    fields: Vec<SchemaField<'a>>,
    fw_schema_path: syn::Path,
}

/// A field that takes part in the schema. Skipped fields are not kept.
pub(crate) struct SchemaField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    /// Declared name, without the `r#` prefix.
    pub name: String,
    pub rename: Option<LitStr>,
}

impl SchemaField<'_> {
    pub(crate) fn wire_name(&self) -> String {
        match &self.rename {
            Some(lit) => lit.value(),
            None => self.name.clone(),
        }
    }

    fn wire_name_span(&self) -> Span {
        match &self.rename {
            Some(lit) => lit.span(),
            None => self.ident.span(),
        }
    }
}

impl<'a> SchemaStruct<'a> {
    pub(crate) fn from_derive_input(ast: &'a DeriveInput) -> syn::Result<Self> {
        let named = match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                Fields::Unnamed(_) | Fields::Unit => {
                    return Err(syn::Error::new(ast.ident.span(), UNSUPPORTED_SHAPE));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(data.enum_token.span(), UNSUPPORTED_SHAPE));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(data.union_token.span(), UNSUPPORTED_SHAPE));
            }
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new(
                ast.generics.span(),
                "`Schema` cannot be derived for generic types",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        let mut fields = Vec::with_capacity(named.named.len());
        for field in &named.named {
            let field_attrs = FieldAttributes::parse_attrs(&field.attrs)?;
            if field_attrs.skip.is_some() {
                continue;
            }

            let Some(ident) = field.ident.as_ref() else {
                return Err(syn::Error::new(field.span(), UNSUPPORTED_SHAPE));
            };

            fields.push(SchemaField {
                ident,
                ty: &field.ty,
                name: ident.unraw().to_string(),
                rename: field_attrs.rename,
            });
        }

        check_wire_names(&fields)?;

        Ok(Self {
            ident: &ast.ident,
            attrs,
            fields,
            fw_schema_path: crate::path::fw_schema(),
        })
    }

    #[inline]
    pub(crate) fn ident(&self) -> &Ident {
        self.ident
    }

    #[inline]
    pub(crate) fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub(crate) fn fields(&self) -> &[SchemaField<'a>] {
        &self.fields
    }

    #[inline]
    pub(crate) fn fw_schema_path(&self) -> &syn::Path {
        &self.fw_schema_path
    }
}

/// Rejects invalid and duplicate wire names. All problems are reported at once.
fn check_wire_names(fields: &[SchemaField]) -> syn::Result<()> {
    let mut errors: Option<syn::Error> = None;
    let mut push = |err: syn::Error| match &mut errors {
        Some(errors) => errors.combine(err),
        None => errors = Some(err),
    };

    let mut seen: HashMap<String, &Ident> = HashMap::with_capacity(fields.len());
    for field in fields {
        let wire_name = field.wire_name();

        if let Err(reason) = check_wire_name(&wire_name) {
            push(syn::Error::new(field.wire_name_span(), reason));
            continue;
        }

        if let Some(first) = seen.get(&wire_name) {
            push(syn::Error::new(
                field.wire_name_span(),
                format!("wire name `{wire_name}` is already used by field `{first}`"),
            ));
        } else {
            seen.insert(wire_name, field.ident);
        }
    }

    match errors {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
