use crate::info::SchemaInfo;

crate::cfg::std! {
    if {
        use std::sync::OnceLock;
    } else {
        use spin::Once as OnceLock;
    }
}

/// Lazily builds and caches the [`SchemaInfo`] of one non-generic type.
///
/// Meant to be placed in a `static` inside [`Schema::schema_info`], so the
/// description is built once per process and shared by every caller.
///
/// # Examples
///
/// ```
/// use fw_schema::impls::SchemaInfoCell;
/// use fw_schema::info::{FieldInfo, SchemaInfo};
/// use fw_schema::value::{FieldValue, FieldValueError};
/// use fw_schema::Schema;
///
/// struct Point { x: i32, y: i32 }
///
/// impl Schema for Point {
///     fn schema_info() -> &'static SchemaInfo {
///         static CELL: SchemaInfoCell = SchemaInfoCell::new();
///         CELL.get_or_init(|| {
///             SchemaInfo::new::<Self>(&[
///                 FieldInfo::new::<i32>("x"),
///                 FieldInfo::new::<i32>("y"),
///             ])
///         })
///     }
///
///     fn reflect_schema_info(&self) -> &'static SchemaInfo {
///         Self::schema_info()
///     }
///
///     fn field_value(&self, index: usize) -> Option<FieldValue<'_>> {
///         match index {
///             0 => Some(FieldValue::Integer(self.x.into())),
///             1 => Some(FieldValue::Integer(self.y.into())),
///             _ => None,
///         }
///     }
///
///     fn set_field_value(
///         &mut self,
///         index: usize,
///         value: FieldValue<'_>,
///     ) -> Result<(), FieldValueError> {
///         use fw_schema::value::FieldType;
///         match index {
///             0 => self.x = i32::from_field_value(value)?,
///             1 => self.y = i32::from_field_value(value)?,
///             _ => return Err(FieldValueError::IndexOutOfBounds {
///                 index,
///                 len: 2,
///                 type_path: core::any::type_name::<Self>(),
///             }),
///         }
///         Ok(())
///     }
/// }
///
/// assert!(core::ptr::eq(Point::schema_info(), Point::schema_info()));
/// assert_eq!(Point::schema_info().field_len(), 2);
/// ```
///
/// [`Schema::schema_info`]: crate::Schema::schema_info
pub struct SchemaInfoCell(OnceLock<SchemaInfo>);

impl SchemaInfoCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the cached [`SchemaInfo`], building it with `f` on first use.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &SchemaInfo
    where
        F: FnOnce() -> SchemaInfo,
    {
        crate::cfg::std! {
            if {
                self.0.get_or_init(f)
            } else {
                self.0.call_once(f)
            }
        }
    }
}

impl Default for SchemaInfoCell {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
