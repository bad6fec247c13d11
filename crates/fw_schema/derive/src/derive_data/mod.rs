//! Provide some tools for parsing the derive input.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod schema_struct;
mod wire_name;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, TypeAttributes};
pub(crate) use schema_struct::{SchemaField, SchemaStruct};
