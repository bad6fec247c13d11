use alloc::string::{String, ToString};
use core::fmt::{self, Write};

use crate::Schema;
use crate::text::{NAME_SEPARATOR, PAIR_DELIMITER};

/// Renders a record as wire text.
///
/// Fields appear in declaration order, renamed fields under their override.
///
/// # Examples
///
/// ```
/// use fw_schema::{derive::Schema, text};
///
/// #[derive(Schema)]
/// struct Point {
///     x: i32,
///     #[schema(rename = "Y")]
///     y: i32,
/// }
///
/// assert_eq!(text::encode(&Point { x: 1, y: -2 }), "x:1, Y:-2");
/// ```
pub fn encode<T: Schema + ?Sized>(value: &T) -> String {
    WireText::new(value).to_string()
}

/// Appends the wire text of a record to `out`.
pub fn encode_into<T: Schema + ?Sized>(value: &T, out: &mut String) {
    // Writing into a `String` cannot fail.
    let _ = write!(out, "{}", WireText::new(value));
}

/// A `Display` adapter that writes a record as wire text.
///
/// # Examples
///
/// ```
/// use fw_schema::{derive::Schema, text::WireText};
///
/// #[derive(Schema)]
/// struct Tag {
///     name: String,
/// }
///
/// let tag = Tag { name: "blue".into() };
/// assert_eq!(format!("[{}]", WireText::new(&tag)), "[name:blue]");
/// ```
pub struct WireText<'a, T: ?Sized>(&'a T);

impl<'a, T: Schema + ?Sized> WireText<'a, T> {
    #[inline]
    pub const fn new(value: &'a T) -> Self {
        Self(value)
    }
}

impl<T: Schema + ?Sized> fmt::Display for WireText<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.0.reflect_schema_info();

        for (index, field) in info.iter().enumerate() {
            if index > 0 {
                f.write_str(PAIR_DELIMITER)?;
            }
            f.write_str(field.wire_name())?;
            f.write_char(NAME_SEPARATOR)?;

            match self.0.field_value(index) {
                Some(value) => fmt::Display::fmt(&value, f)?,
                None => log::warn!(
                    "`{}` declares field `{}` at index {index} but returned no value for it",
                    info.type_path(),
                    field.name(),
                ),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::derive::Schema;
    use crate::text::{WireText, encode, encode_into};

    #[derive(Schema)]
    #[allow(non_snake_case)]
    struct MyClass {
        #[schema(rename = "CustomFieldName")]
        I: i32,
        Name: String,
    }

    #[derive(Schema)]
    struct Mixed {
        small: u8,
        flag: bool,
        ratio: f64,
        note: Option<String>,
        big: i64,
    }

    #[derive(Schema)]
    struct Empty {}

    #[test]
    fn renamed_field_and_declared_name() {
        let value = MyClass {
            I: 42,
            Name: String::from("John"),
        };
        assert_eq!(encode(&value), "CustomFieldName:42, Name:John");
    }

    #[test]
    fn empty_text_renders_as_nothing() {
        let value = MyClass {
            I: 0,
            Name: String::new(),
        };
        assert_eq!(encode(&value), "CustomFieldName:0, Name:");
    }

    #[test]
    fn delimiters_in_text_are_not_escaped() {
        let value = MyClass {
            I: -1,
            Name: String::from("a, b:c"),
        };
        assert_eq!(encode(&value), "CustomFieldName:-1, Name:a, b:c");
    }

    #[test]
    fn unsupported_kinds_use_display() {
        let value = Mixed {
            small: 255,
            flag: true,
            ratio: 1.5,
            note: None,
            big: i64::MAX,
        };
        assert_eq!(
            encode(&value),
            "small:255, flag:true, ratio:1.5, note:, big:9223372036854775807"
        );
    }

    #[test]
    fn no_fields() {
        assert_eq!(encode(&Empty {}), "");
    }

    #[test]
    fn appends_and_formats() {
        let value = MyClass {
            I: 1,
            Name: String::from("x"),
        };
        let mut out = String::from("> ");
        encode_into(&value, &mut out);
        assert_eq!(out, "> CustomFieldName:1, Name:x");
        assert_eq!(alloc::format!("{}", WireText::new(&value)), "CustomFieldName:1, Name:x");
    }
}
