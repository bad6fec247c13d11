use thiserror::Error;

/// A [`SchemaInfo`](crate::info::SchemaInfo) could not be built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchemaError {
    #[error("wire name `{wire_name}` is used by more than one field of `{type_path}`")]
    DuplicateWireName {
        type_path: &'static str,
        wire_name: &'static str,
    },

    #[error(
        "wire name `{wire_name}` of `{type_path}` is empty, starts with whitespace or contains `:` or `,`"
    )]
    InvalidWireName {
        type_path: &'static str,
        wire_name: &'static str,
    },
}
