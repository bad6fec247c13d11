use alloc::string::ToString;

use crate::Schema;
use crate::info::FieldInfo;
use crate::text::{DecodeError, NAME_SEPARATOR, PAIR_SEPARATOR};
use crate::value::{FieldKind, FieldValue};

/// What the decoder does with a wire name the schema does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnknownFieldPolicy {
    /// Skip the token.
    #[default]
    Ignore,
    /// Fail with [`DecodeError::UnknownField`].
    Deny,
}

/// Decodes wire text into existing records.
///
/// # Examples
///
/// ```
/// use fw_schema::derive::Schema;
/// use fw_schema::text::{DecodeError, WireDecoder};
///
/// #[derive(Schema, Default)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let mut point = Point::default();
/// WireDecoder::new().decode(&mut point, "y:2, z:9, x:1").unwrap();
/// assert_eq!((point.x, point.y), (1, 2));
///
/// let strict = WireDecoder::new().deny_unknown_fields();
/// let err = strict.decode(&mut point, "z:9").unwrap_err();
/// assert!(matches!(err, DecodeError::UnknownField { .. }));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WireDecoder {
    unknown_fields: UnknownFieldPolicy,
}

impl WireDecoder {
    /// Creates a decoder that ignores unknown wire names.
    #[inline]
    pub const fn new() -> Self {
        Self {
            unknown_fields: UnknownFieldPolicy::Ignore,
        }
    }

    #[inline]
    pub const fn with_unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
        self.unknown_fields = policy;
        self
    }

    /// Shorthand for `with_unknown_fields(UnknownFieldPolicy::Deny)`.
    #[inline]
    pub const fn deny_unknown_fields(self) -> Self {
        self.with_unknown_fields(UnknownFieldPolicy::Deny)
    }

    #[inline]
    pub const fn unknown_fields(&self) -> UnknownFieldPolicy {
        self.unknown_fields
    }

    /// Applies the `name:value` tokens of `text` to `target`, left to right.
    ///
    /// Stops at the first failing token. Tokens before it stay applied.
    pub fn decode<T: Schema + ?Sized>(&self, target: &mut T, text: &str) -> Result<(), DecodeError> {
        let info = target.reflect_schema_info();

        for token in tokens(text) {
            let Some((wire_name, raw)) = token.split_once(NAME_SEPARATOR) else {
                return Err(DecodeError::MissingSeparator {
                    token: token.to_string(),
                });
            };

            let Some((index, field)) = info.field_with_index(wire_name) else {
                match self.unknown_fields {
                    UnknownFieldPolicy::Ignore => {
                        log::debug!(
                            "`{}` has no field with wire name `{wire_name}`, skipped",
                            info.type_path(),
                        );
                        continue;
                    }
                    UnknownFieldPolicy::Deny => {
                        return Err(DecodeError::UnknownField {
                            type_path: info.type_path(),
                            wire_name: wire_name.to_string(),
                        });
                    }
                }
            };

            let value = parse_value(field, raw)?;
            target
                .set_field_value(index, value)
                .map_err(|source| DecodeError::InvalidValue {
                    wire_name: field.wire_name(),
                    source,
                })?;

            log::trace!("`{}`: applied `{wire_name}`", info.type_path());
        }

        Ok(())
    }
}

/// Decodes wire text into `target`, ignoring unknown wire names.
///
/// # Examples
///
/// ```
/// use fw_schema::{derive::Schema, text};
///
/// #[derive(Schema, Default)]
/// #[allow(non_snake_case)]
/// struct MyClass {
///     #[schema(rename = "CustomFieldName")]
///     I: i32,
///     Name: String,
/// }
///
/// let mut value = MyClass::default();
/// text::decode(&mut value, "CustomFieldName:42, Name:John").unwrap();
/// assert_eq!(value.I, 42);
/// assert_eq!(value.Name, "John");
///
/// let err = text::decode(&mut value, "CustomFieldName:x").unwrap_err();
/// assert!(err.is_format_error());
/// ```
#[inline]
pub fn decode<T: Schema + ?Sized>(target: &mut T, text: &str) -> Result<(), DecodeError> {
    WireDecoder::new().decode(target, text)
}

/// Splits wire text into non-empty tokens with leading whitespace removed.
fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(PAIR_SEPARATOR)
        .map(str::trim_start)
        .filter(|token| !token.is_empty())
}

fn parse_value<'a>(field: &FieldInfo, raw: &'a str) -> Result<FieldValue<'a>, DecodeError> {
    match field.kind() {
        FieldKind::Integer => raw
            .trim()
            .parse::<i64>()
            .map(FieldValue::Integer)
            .map_err(|source| DecodeError::InvalidInteger {
                wire_name: field.wire_name(),
                value: raw.to_string(),
                source,
            }),
        FieldKind::Text => Ok(FieldValue::Text(raw)),
        FieldKind::Unsupported => Ok(FieldValue::Absent),
    }
}
