use thiserror::Error;

use crate::value::FieldKind;

/// A [`FieldValue`](crate::value::FieldValue) could not be stored into a field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FieldValueError {
    #[error("value {value} is out of range for `{type_path}`")]
    OutOfRange {
        value: i64,
        type_path: &'static str,
    },

    #[error("expected {expected} value, received {received} value")]
    MismatchedKind {
        expected: FieldKind,
        received: FieldKind,
    },

    #[error("field index {index} is out of bounds for `{type_path}` with {len} fields")]
    IndexOutOfBounds {
        index: usize,
        len: usize,
        type_path: &'static str,
    },
}
