use alloc::string::String;
use core::num::ParseIntError;

use thiserror::Error;

use crate::value::FieldValueError;

/// An error returned by [`decode`](crate::text::decode).
///
/// Fields set by tokens before the failing one keep their new values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("value `{value}` of field `{wire_name}` is not a valid integer")]
    InvalidInteger {
        wire_name: &'static str,
        value: String,
        source: ParseIntError,
    },

    #[error("cannot store the value of field `{wire_name}`: {source}")]
    InvalidValue {
        wire_name: &'static str,
        source: FieldValueError,
    },

    #[error("token `{token}` has no `:` between wire name and value")]
    MissingSeparator { token: String },

    #[error("`{type_path}` has no field with wire name `{wire_name}`")]
    UnknownField {
        type_path: &'static str,
        wire_name: String,
    },
}

impl DecodeError {
    /// Returns `true` for a value that does not convert to its field's kind
    /// or does not fit the field.
    #[inline]
    pub const fn is_format_error(&self) -> bool {
        matches!(self, Self::InvalidInteger { .. } | Self::InvalidValue { .. })
    }

    /// The wire name of the field the error refers to, if any.
    pub fn wire_name(&self) -> Option<&str> {
        match self {
            Self::InvalidInteger { wire_name, .. } | Self::InvalidValue { wire_name, .. } => {
                Some(*wire_name)
            }
            Self::UnknownField { wire_name, .. } => Some(wire_name.as_str()),
            Self::MissingSeparator { .. } => None,
        }
    }
}
