use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr};

use crate::SCHEMA_ATTRIBUTE_NAME;

const RENAME: &str = "rename";
const SKIP: &str = "skip";
const AUTO_REGISTER: &str = "auto_register";

/// Attributes applied to the type, e.g. `#[schema(auto_register)]`.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// Span of the `auto_register` flag, if present.
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(SCHEMA_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }
        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident(AUTO_REGISTER) {
            if self.auto_register.is_some() {
                return Err(meta.error("`auto_register` is already set"));
            }
            self.auto_register = Some(meta.path.span());
            Ok(())
        } else if meta.path.is_ident(RENAME) || meta.path.is_ident(SKIP) {
            Err(meta.error("this attribute can only be applied to fields"))
        } else {
            Err(meta.error("unsupported type attribute, expected `auto_register`"))
        }
    }
}

/// Attributes applied to a field, e.g. `#[schema(rename = "Name")]`.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    /// The wire name override.
    pub rename: Option<LitStr>,
    /// Span of the `skip` flag, if present.
    pub skip: Option<Span>,
}

impl FieldAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(SCHEMA_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }

        if let (Some(span), Some(_)) = (this.skip, &this.rename) {
            return Err(syn::Error::new(span, "`skip` cannot be combined with `rename`"));
        }

        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident(RENAME) {
            if self.rename.is_some() {
                return Err(meta.error("`rename` is already set for this field"));
            }
            self.rename = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident(SKIP) {
            if self.skip.is_some() {
                return Err(meta.error("`skip` is already set for this field"));
            }
            self.skip = Some(meta.path.span());
            Ok(())
        } else if meta.path.is_ident(AUTO_REGISTER) {
            Err(meta.error("this attribute can only be applied to the type"))
        } else {
            Err(meta.error("unsupported field attribute, expected `rename = \"...\"` or `skip`"))
        }
    }
}
