//! Built-in [`FieldType`](crate::value::FieldType) implementations and the
//! per-type schema cache used by derived impls.

mod cell;
mod primitives;

pub use cell::SchemaInfoCell;
