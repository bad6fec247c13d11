use core::any::Any;

use crate::info::{FieldInfo, SchemaInfo};
use crate::value::{FieldValue, FieldValueError};

/// A record type whose fields can be read and written by declaration index.
///
/// Usually implemented with `#[derive(Schema)]`:
///
/// ```
/// use fw_schema::derive::Schema;
/// use fw_schema::value::FieldValue;
/// use fw_schema::Schema as _;
///
/// #[derive(Schema, Default)]
/// struct Account {
///     #[schema(rename = "CustomFieldName")]
///     id: i32,
///     name: String,
///     #[schema(skip)]
///     cache: Vec<u8>,
/// }
///
/// let mut account = Account::default();
/// account.set_field_value(1, FieldValue::Text("John")).unwrap();
///
/// assert_eq!(account.name, "John");
/// assert_eq!(account.field_value(0), Some(FieldValue::Integer(0)));
/// assert_eq!(account.field_value(2), None);
/// assert_eq!(Account::schema_info().field_len(), 2);
/// ```
///
/// # Derive attributes
///
/// - `#[schema(rename = "...")]` on a field sets its wire name.
/// - `#[schema(skip)]` on a field leaves it out of the schema.
/// - `#[schema(auto_register)]` on the type adds it to
///   [`SchemaRegistry::auto_register`](crate::registry::SchemaRegistry::auto_register).
///
/// The derive accepts non-generic structs with named fields. Every field type
/// must implement [`FieldType`](crate::value::FieldType).
///
/// Wire names are checked when the derive expands. Two fields with the same
/// wire name are a compile error, whether both are renamed:
///
/// ```compile_fail
/// # use fw_schema::derive::Schema;
/// #[derive(Schema)]
/// struct Account {
///     #[schema(rename = "id")]
///     a: i32,
///     #[schema(rename = "id")]
///     b: i32,
/// }
/// ```
///
/// or a rename collides with another field's identifier:
///
/// ```compile_fail
/// # use fw_schema::derive::Schema;
/// #[derive(Schema)]
/// struct Account {
///     name: String,
///     #[schema(rename = "name")]
///     label: String,
/// }
/// ```
///
/// A wire name containing a separator is rejected:
///
/// ```compile_fail
/// # use fw_schema::derive::Schema;
/// #[derive(Schema)]
/// struct Account {
///     #[schema(rename = "a:b")]
///     id: i32,
/// }
/// ```
///
/// So are `skip` combined with `rename`, and generic structs:
///
/// ```compile_fail
/// # use fw_schema::derive::Schema;
/// #[derive(Schema)]
/// struct Account {
///     #[schema(skip, rename = "id")]
///     id: i32,
/// }
/// ```
///
/// ```compile_fail
/// # use fw_schema::derive::Schema;
/// #[derive(Schema)]
/// struct Wrapper<T> {
///     value: T,
/// }
/// ```
///
/// # Manual impls
///
/// Index `i` refers to `schema_info().field_at(i)`. `field_value` returns
/// `None` and `set_field_value` returns
/// [`FieldValueError::IndexOutOfBounds`] for indices past the last field.
/// See [`SchemaInfoCell`](crate::impls::SchemaInfoCell) for a complete
/// example.
pub trait Schema: Any {
    /// Returns the description of this type.
    fn schema_info() -> &'static SchemaInfo
    where
        Self: Sized;

    /// Returns the description of the value's type. Usable on `dyn Schema`.
    fn reflect_schema_info(&self) -> &'static SchemaInfo;

    /// Borrows the value of the field at `index`.
    fn field_value(&self, index: usize) -> Option<FieldValue<'_>>;

    /// Stores `value` into the field at `index`.
    fn set_field_value(
        &mut self,
        index: usize,
        value: FieldValue<'_>,
    ) -> Result<(), FieldValueError>;

    /// Borrows the value of the field with the given wire name.
    fn wire_value(&self, wire_name: &str) -> Option<FieldValue<'_>> {
        let index = self.reflect_schema_info().index_of(wire_name)?;
        self.field_value(index)
    }

    /// Returns the field descriptions paired with their current values, in
    /// declaration order.
    fn fields_with_values(&self) -> FieldsWithValues<'_, Self>
    where
        Self: Sized,
    {
        FieldsWithValues {
            record: self,
            fields: self.reflect_schema_info().iter(),
            index: 0,
        }
    }
}

/// Iterator returned by [`Schema::fields_with_values`].
pub struct FieldsWithValues<'a, T: ?Sized> {
    record: &'a T,
    fields: core::slice::Iter<'static, FieldInfo>,
    index: usize,
}

impl<'a, T: Schema + ?Sized> Iterator for FieldsWithValues<'a, T> {
    type Item = (&'static FieldInfo, Option<FieldValue<'a>>);

    fn next(&mut self) -> Option<Self::Item> {
        let field = self.fields.next()?;
        let value = self.record.field_value(self.index);
        self.index += 1;
        Some((field, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.fields.size_hint()
    }
}

impl<T: Schema + ?Sized> ExactSizeIterator for FieldsWithValues<'_, T> {}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::Schema;
    use crate::derive::Schema;
    use crate::value::{FieldValue, FieldValueError};

    #[derive(Schema, Default, Debug, PartialEq)]
    struct Account {
        #[schema(rename = "CustomFieldName")]
        id: i32,
        name: String,
        #[schema(skip)]
        scratch: Vec<u8>,
        ratio: f32,
    }

    #[test]
    fn derived_schema() {
        let info = Account::schema_info();
        assert_eq!(info.type_name(), "Account");
        assert_eq!(
            info.wire_names().collect::<Vec<_>>(),
            ["CustomFieldName", "name", "ratio"]
        );
        assert!(core::ptr::eq(info, Account::default().reflect_schema_info()));
    }

    #[test]
    fn indexed_access() {
        let mut account = Account::default();
        account.set_field_value(0, FieldValue::Integer(42)).unwrap();
        account.set_field_value(1, FieldValue::Text("John")).unwrap();

        assert_eq!(account.id, 42);
        assert_eq!(account.name, "John");
        assert_eq!(account.field_value(1), Some(FieldValue::Text("John")));
        assert_eq!(account.wire_value("CustomFieldName"), Some(FieldValue::Integer(42)));
        assert_eq!(account.wire_value("id"), None);
        assert_eq!(account.field_value(3), None);
        assert!(account.scratch.is_empty());
    }

    #[test]
    fn out_of_bounds_set() {
        let mut account = Account::default();
        let err = account.set_field_value(3, FieldValue::Absent).unwrap_err();
        assert!(matches!(
            err,
            FieldValueError::IndexOutOfBounds { index: 3, len: 3, .. }
        ));
    }

    #[test]
    fn fields_with_values_pairs_in_order() {
        let account = Account {
            id: 7,
            name: String::from("Ann"),
            scratch: Vec::new(),
            ratio: 0.5,
        };
        let pairs = account
            .fields_with_values()
            .map(|(field, value)| (field.wire_name(), value.map(|v| v.as_integer())))
            .collect::<Vec<_>>();

        assert_eq!(
            pairs,
            [
                ("CustomFieldName", Some(Some(7))),
                ("name", Some(None)),
                ("ratio", Some(None)),
            ]
        );
    }

    #[derive(Schema, Default)]
    struct Counters {
        a: i8,
        b: u16,
        c: i64,
        d: String,
    }

    #[derive(Schema)]
    struct Empty {}

    #[test]
    fn generated_accessors_cover_every_field() {
        let mut counters = Counters::default();
        counters.set_field_value(0, FieldValue::Integer(-1)).unwrap();
        counters.set_field_value(1, FieldValue::Integer(2)).unwrap();
        counters.set_field_value(2, FieldValue::Integer(-3)).unwrap();
        counters.set_field_value(3, FieldValue::Text("four")).unwrap();

        assert_eq!(counters.field_value(0), Some(FieldValue::Integer(-1)));
        assert_eq!(counters.field_value(1), Some(FieldValue::Integer(2)));
        assert_eq!(counters.field_value(2), Some(FieldValue::Integer(-3)));
        assert_eq!(counters.field_value(3), Some(FieldValue::Text("four")));
        assert_eq!(counters.field_value(4), None);
        assert_eq!(counters.fields_with_values().len(), 4);

        let mut empty = Empty {};
        assert_eq!(Empty::schema_info().field_len(), 0);
        assert_eq!(empty.field_value(0), None);
        assert!(matches!(
            empty.set_field_value(0, FieldValue::Absent),
            Err(FieldValueError::IndexOutOfBounds { index: 0, len: 0, .. })
        ));
    }

    #[test]
    fn usable_as_trait_object() {
        let account = Account::default();
        let record: &dyn Schema = &account;
        assert_eq!(record.reflect_schema_info().field_len(), 3);
        assert_eq!(record.wire_value("name"), Some(FieldValue::Text("")));
    }
}
