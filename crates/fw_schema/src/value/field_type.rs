use crate::value::{FieldKind, FieldValue, FieldValueError};

/// A type that can be stored in a record field.
///
/// The implementation decides the field's [`FieldKind`] and converts between
/// the field and a [`FieldValue`].
///
/// `from_field_value` must accept [`FieldValue::Absent`] and return the
/// type's "no value" (usually its `Default`), because the decoder sends
/// `Absent` to every field of kind [`FieldKind::Unsupported`].
///
/// # Examples
///
/// ```
/// use fw_schema::value::{FieldKind, FieldType, FieldValue};
///
/// assert_eq!(<i32 as FieldType>::KIND, FieldKind::Integer);
/// assert_eq!(7_u8.to_field_value(), FieldValue::Integer(7));
/// assert_eq!(i16::from_field_value(FieldValue::Integer(-3)), Ok(-3));
/// assert!(i8::from_field_value(FieldValue::Integer(300)).is_err());
/// assert_eq!(String::from_field_value(FieldValue::Absent), Ok(String::new()));
/// ```
pub trait FieldType: 'static {
    /// The kind every value of this type belongs to.
    const KIND: FieldKind;

    /// Borrows the value for encoding.
    fn to_field_value(&self) -> FieldValue<'_>;

    /// Builds a value from a decoded [`FieldValue`].
    fn from_field_value(value: FieldValue<'_>) -> Result<Self, FieldValueError>
    where
        Self: Sized;
}

/// Implements [`FieldType`] with [`FieldKind::Unsupported`] for types that
/// are `Display + Default`.
///
/// The field is rendered with its `Display` impl and reset to `Default` on
/// decode.
///
/// # Examples
///
/// ```
/// use core::fmt;
/// use fw_schema::impl_opaque_field;
/// use fw_schema::value::{FieldKind, FieldType, FieldValue};
///
/// #[derive(Default, Debug, PartialEq)]
/// struct Celsius(f32);
///
/// impl fmt::Display for Celsius {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}C", self.0)
///     }
/// }
///
/// impl_opaque_field!(Celsius);
///
/// assert_eq!(<Celsius as FieldType>::KIND, FieldKind::Unsupported);
/// assert_eq!(Celsius(21.5).to_field_value().to_string(), "21.5C");
/// assert_eq!(Celsius::from_field_value(FieldValue::Absent), Ok(Celsius(0.0)));
/// ```
#[macro_export]
macro_rules! impl_opaque_field {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::value::FieldType for $ty {
            const KIND: $crate::value::FieldKind = $crate::value::FieldKind::Unsupported;

            #[inline]
            fn to_field_value(&self) -> $crate::value::FieldValue<'_> {
                $crate::value::FieldValue::Opaque(self)
            }

            fn from_field_value(
                value: $crate::value::FieldValue<'_>,
            ) -> ::core::result::Result<Self, $crate::value::FieldValueError> {
                match value {
                    $crate::value::FieldValue::Absent => {
                        ::core::result::Result::Ok(<Self as ::core::default::Default>::default())
                    }
                    other => ::core::result::Result::Err(
                        $crate::value::FieldValueError::MismatchedKind {
                            expected: $crate::value::FieldKind::Unsupported,
                            received: other.kind(),
                        },
                    ),
                }
            }
        }
    )+};
}
