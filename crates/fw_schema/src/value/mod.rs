//! Values exchanged between a record and the text codec.
//!
//! - [`FieldKind`]: the closed set of kinds the codec knows how to convert.
//! - [`FieldValue`]: a borrowed view of one field's value, tagged by kind.
//! - [`FieldType`]: implemented by every type that can be a record field.
//! - [`FieldValueError`]: a value could not be stored into a field.
//!
//! Implementations for primitives and `String` live in [`crate::impls`].
//! Other types opt in with [`impl_opaque_field!`](crate::impl_opaque_field)
//! or a manual [`FieldType`] impl.

// -----------------------------------------------------------------------------
// Modules

mod error;
mod field_type;
mod field_value;
mod kind;

// -----------------------------------------------------------------------------
// Exports

pub use error::FieldValueError;
pub use field_type::FieldType;
pub use field_value::FieldValue;
pub use kind::FieldKind;
