use core::fmt;

use crate::value::FieldKind;

/// A borrowed view of a single field's value.
///
/// Records hand these out when encoding ([`Schema::field_value`]) and receive
/// them when decoding ([`Schema::set_field_value`]).
///
/// The `Display` output is the value's wire rendering: decimal integers, text
/// verbatim, the inner `Display` for opaque values and nothing for `Absent`.
///
/// # Examples
///
/// ```
/// use fw_schema::value::{FieldKind, FieldValue};
///
/// assert_eq!(FieldValue::Integer(-7).to_string(), "-7");
/// assert_eq!(FieldValue::Text("John").to_string(), "John");
/// assert_eq!(FieldValue::Absent.to_string(), "");
/// assert_eq!(FieldValue::Opaque(&1.5_f64).kind(), FieldKind::Unsupported);
/// ```
///
/// [`Schema::field_value`]: crate::Schema::field_value
/// [`Schema::set_field_value`]: crate::Schema::set_field_value
#[derive(Clone, Copy)]
pub enum FieldValue<'a> {
    Integer(i64),
    Text(&'a str),
    /// A value of an unsupported kind. Only produced while encoding.
    Opaque(&'a dyn fmt::Display),
    /// The "no value" sentinel.
    Absent,
}

impl<'a> FieldValue<'a> {
    /// Returns the kind this value belongs to.
    ///
    /// `Opaque` and `Absent` are both [`FieldKind::Unsupported`].
    #[inline]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Integer(_) => FieldKind::Integer,
            Self::Text(_) => FieldKind::Text,
            Self::Opaque(_) | Self::Absent => FieldKind::Unsupported,
        }
    }

    #[inline]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_text(&self) -> Option<&'a str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => fmt::Display::fmt(value, f),
            Self::Text(value) => f.write_str(value),
            Self::Opaque(value) => fmt::Display::fmt(*value, f),
            Self::Absent => Ok(()),
        }
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => f.debug_tuple("Integer").field(value).finish(),
            Self::Text(value) => f.debug_tuple("Text").field(value).finish(),
            Self::Opaque(value) => f
                .debug_tuple("Opaque")
                .field(&format_args!("{value}"))
                .finish(),
            Self::Absent => f.write_str("Absent"),
        }
    }
}

/// Opaque values are never equal, not even to themselves.
impl PartialEq for FieldValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Absent, Self::Absent) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::ToString;

    use super::FieldValue;
    use crate::value::FieldKind;

    #[test]
    fn wire_rendering() {
        assert_eq!(FieldValue::Integer(42).to_string(), "42");
        assert_eq!(FieldValue::Integer(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(FieldValue::Text("a:b, c").to_string(), "a:b, c");
        assert_eq!(FieldValue::Opaque(&true).to_string(), "true");
        assert_eq!(FieldValue::Absent.to_string(), "");
    }

    #[test]
    fn kinds_and_accessors() {
        assert_eq!(FieldValue::Integer(1).kind(), FieldKind::Integer);
        assert_eq!(FieldValue::Text("").kind(), FieldKind::Text);
        assert_eq!(FieldValue::Absent.kind(), FieldKind::Unsupported);

        assert_eq!(FieldValue::Integer(3).as_integer(), Some(3));
        assert_eq!(FieldValue::Text("x").as_integer(), None);
        assert_eq!(FieldValue::Text("x").as_text(), Some("x"));
        assert!(FieldValue::Absent.is_absent());
    }

    #[test]
    fn equality_and_debug() {
        assert_eq!(FieldValue::Text("x"), FieldValue::Text("x"));
        assert_ne!(FieldValue::Integer(1), FieldValue::Text("1"));
        assert_ne!(FieldValue::Opaque(&1), FieldValue::Opaque(&1));
        assert_eq!(format!("{:?}", FieldValue::Opaque(&2.5_f32)), "Opaque(2.5)");
    }
}
