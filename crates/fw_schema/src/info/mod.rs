//! Static descriptions of record types.
//!
//! A [`SchemaInfo`] lists a type's fields in declaration order. Each
//! [`FieldInfo`] knows its declared name, its wire name and its
//! [`FieldKind`](crate::value::FieldKind).
//!
//! Descriptions are normally produced by `#[derive(Schema)]`; the builder API
//! is public for hand-written [`Schema`](crate::Schema) impls.

// -----------------------------------------------------------------------------
// Modules

mod error;
mod field_info;
mod schema_info;

// -----------------------------------------------------------------------------
// Exports

pub use error::SchemaError;
pub use field_info::{FieldInfo, is_valid_wire_name};
pub use schema_info::SchemaInfo;
