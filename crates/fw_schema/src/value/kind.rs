use core::fmt;

/// The kind of a record field, as far as the text codec is concerned.
///
/// Decoding picks one conversion per kind:
///
/// - [`Integer`](Self::Integer): the raw text is parsed as a base-10 `i64`.
/// - [`Text`](Self::Text): the raw text is stored unchanged.
/// - [`Unsupported`](Self::Unsupported): the raw text is dropped and the field
///   receives [`FieldValue::Absent`](crate::value::FieldValue::Absent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Integer,
    Text,
    Unsupported,
}

impl FieldKind {
    /// Returns `true` if the decoder can rebuild a value of this kind from text.
    #[inline]
    pub const fn is_decodable(self) -> bool {
        !matches!(self, Self::Unsupported)
    }

    /// Lowercase name, as used in error messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Text => "text",
            Self::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for FieldKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
