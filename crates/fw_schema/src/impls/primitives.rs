use alloc::string::String;
use core::any::type_name;

use crate::value::{FieldKind, FieldType, FieldValue, FieldValueError};

// -----------------------------------------------------------------------------
// Integer

macro_rules! impl_integer_field {
    ($($ty:ty),+ $(,)?) => {$(
        impl FieldType for $ty {
            const KIND: FieldKind = FieldKind::Integer;

            #[inline]
            fn to_field_value(&self) -> FieldValue<'_> {
                FieldValue::Integer(i64::from(*self))
            }

            fn from_field_value(value: FieldValue<'_>) -> Result<Self, FieldValueError> {
                match value {
                    FieldValue::Integer(n) => <$ty>::try_from(n).map_err(|_| {
                        FieldValueError::OutOfRange {
                            value: n,
                            type_path: type_name::<$ty>(),
                        }
                    }),
                    FieldValue::Absent => Ok(0),
                    other => Err(FieldValueError::MismatchedKind {
                        expected: FieldKind::Integer,
                        received: other.kind(),
                    }),
                }
            }
        }
    )+};
}

// `u64`, `usize` and `isize` are left out: they do not convert losslessly
// into `i64` on every target.
impl_integer_field!(i8, i16, i32, i64, u8, u16, u32);

// -----------------------------------------------------------------------------
// Text

impl FieldType for String {
    const KIND: FieldKind = FieldKind::Text;

    #[inline]
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self.as_str())
    }

    fn from_field_value(value: FieldValue<'_>) -> Result<Self, FieldValueError> {
        match value {
            FieldValue::Text(text) => Ok(String::from(text)),
            FieldValue::Absent => Ok(String::new()),
            other => Err(FieldValueError::MismatchedKind {
                expected: FieldKind::Text,
                received: other.kind(),
            }),
        }
    }
}

// -----------------------------------------------------------------------------
// Unsupported

crate::impl_opaque_field!(bool, char, f32, f64);

/// `None` renders as nothing and is what the decoder restores.
impl<T: FieldType> FieldType for Option<T> {
    const KIND: FieldKind = FieldKind::Unsupported;

    #[inline]
    fn to_field_value(&self) -> FieldValue<'_> {
        match self {
            Some(value) => value.to_field_value(),
            None => FieldValue::Absent,
        }
    }

    fn from_field_value(value: FieldValue<'_>) -> Result<Self, FieldValueError> {
        match value {
            FieldValue::Absent => Ok(None),
            value => T::from_field_value(value).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use crate::value::{FieldKind, FieldType, FieldValue, FieldValueError};

    #[test]
    fn integer_kinds() {
        assert_eq!(<i8 as FieldType>::KIND, FieldKind::Integer);
        assert_eq!(<u32 as FieldType>::KIND, FieldKind::Integer);
        assert_eq!(<i64 as FieldType>::KIND, FieldKind::Integer);
        assert_eq!(u32::MAX.to_field_value(), FieldValue::Integer(4_294_967_295));
        assert_eq!((-5_i16).to_field_value(), FieldValue::Integer(-5));
    }

    #[test]
    fn integer_narrowing() {
        assert_eq!(u8::from_field_value(FieldValue::Integer(255)), Ok(255));
        assert_eq!(
            u8::from_field_value(FieldValue::Integer(256)),
            Err(FieldValueError::OutOfRange {
                value: 256,
                type_path: "u8",
            })
        );
        assert!(u32::from_field_value(FieldValue::Integer(-1)).is_err());
        assert_eq!(i32::from_field_value(FieldValue::Absent), Ok(0));
        assert_eq!(
            i32::from_field_value(FieldValue::Text("1")),
            Err(FieldValueError::MismatchedKind {
                expected: FieldKind::Integer,
                received: FieldKind::Text,
            })
        );
    }

    #[test]
    fn text() {
        let name = String::from("John");
        assert_eq!(<String as FieldType>::KIND, FieldKind::Text);
        assert_eq!(name.to_field_value(), FieldValue::Text("John"));
        assert_eq!(String::from_field_value(FieldValue::Text("")), Ok(String::new()));
        assert!(String::from_field_value(FieldValue::Integer(1)).is_err());
    }

    #[test]
    fn opaque_primitives() {
        assert_eq!(<bool as FieldType>::KIND, FieldKind::Unsupported);
        assert_eq!(<f64 as FieldType>::KIND, FieldKind::Unsupported);
        assert_eq!(true.to_field_value().to_string(), "true");
        assert_eq!('x'.to_field_value().to_string(), "x");
        assert_eq!(bool::from_field_value(FieldValue::Absent), Ok(false));
        assert_eq!(f32::from_field_value(FieldValue::Absent), Ok(0.0));
        assert!(char::from_field_value(FieldValue::Integer(1)).is_err());
    }

    #[test]
    fn option() {
        assert_eq!(<Option<i32> as FieldType>::KIND, FieldKind::Unsupported);
        assert_eq!(Some(3_i32).to_field_value(), FieldValue::Integer(3));
        assert_eq!(None::<String>.to_field_value(), FieldValue::Absent);
        assert_eq!(Option::<i32>::from_field_value(FieldValue::Absent), Ok(None));
        assert_eq!(
            Option::<i32>::from_field_value(FieldValue::Integer(9)),
            Ok(Some(9))
        );
    }
}
