use proc_macro2::{Literal, TokenStream};
use quote::quote;

use crate::derive_data::{SchemaField, SchemaStruct};
use crate::path::fp::{OptionFP, ResultFP, TypeNameFP};

/// Generate implementation code for `Schema`.
pub(crate) fn impl_trait_schema(info: &SchemaStruct) -> TokenStream {
    let fw_schema_path = info.fw_schema_path();
    let schema_ = crate::path::schema_(fw_schema_path);
    let schema_info_ = crate::path::schema_info_(fw_schema_path);
    let info_cell_ = crate::path::schema_info_cell_(fw_schema_path);
    let field_type_ = crate::path::field_type_(fw_schema_path);
    let field_value_ = crate::path::field_value_(fw_schema_path);
    let field_value_error_ = crate::path::field_value_error_(fw_schema_path);

    let fields = info.fields();
    let field_len = fields.len();
    let field_info_tokens = fields
        .iter()
        .map(|field| field_info_tokens(fw_schema_path, field))
        .collect::<Vec<_>>();

    let mut get_arms = Vec::with_capacity(field_len);
    let mut set_arms = Vec::with_capacity(field_len);
    for (index, field) in fields.iter().enumerate() {
        let index = Literal::usize_unsuffixed(index);
        let ident = field.ident;
        let ty = field.ty;

        get_arms.push(quote! {
            #index => #OptionFP::Some(<#ty as #field_type_>::to_field_value(&self.#ident)),
        });
        set_arms.push(quote! {
            #index => {
                self.#ident = <#ty as #field_type_>::from_field_value(__value)?;
                #ResultFP::Ok(())
            }
        });
    }

    let real_ident = info.ident();

    quote! {
        impl #schema_ for #real_ident {
            fn schema_info() -> &'static #schema_info_ {
                static CELL: #info_cell_ = #info_cell_::new();
                CELL.get_or_init(|| {
                    #schema_info_::new::<Self>(&[
                        #(#field_info_tokens,)*
                    ])
                })
            }

            #[inline]
            fn reflect_schema_info(&self) -> &'static #schema_info_ {
                <Self as #schema_>::schema_info()
            }

            fn field_value(&self, __index: usize) -> #OptionFP<#field_value_<'_>> {
                match __index {
                    #(#get_arms)*
                    _ => #OptionFP::None,
                }
            }

            fn set_field_value(
                &mut self,
                __index: usize,
                __value: #field_value_<'_>,
            ) -> #ResultFP<(), #field_value_error_> {
                match __index {
                    #(#set_arms)*
                    _ => #ResultFP::Err(#field_value_error_::IndexOutOfBounds {
                        index: __index,
                        len: #field_len,
                        type_path: #TypeNameFP::<Self>(),
                    }),
                }
            }
        }
    }
}

/// `FieldInfo::new::<Ty>("name")`, followed by `.with_wire_name("..")` for
/// renamed fields.
fn field_info_tokens(fw_schema_path: &syn::Path, field: &SchemaField) -> TokenStream {
    let field_info_ = crate::path::field_info_(fw_schema_path);
    let ty = field.ty;
    let name = &field.name;

    let rename_tokens = match &field.rename {
        Some(lit) => quote! { .with_wire_name(#lit) },
        None => crate::utils::empty(),
    };

    quote! {
        #field_info_::new::<#ty>(#name) #rename_tokens
    }
}
