use alloc::boxed::Box;
use core::any::{Any, TypeId, type_name};

use fw_utils::hash::{FixedHashState, HashMap};

use crate::Schema;
use crate::info::{FieldInfo, SchemaError, is_valid_wire_name};

/// Description of a record type: its fields in declaration order and a
/// wire-name index over them.
///
/// Built once per type and shared as `&'static SchemaInfo` through
/// [`Schema::schema_info`].
///
/// # Examples
///
/// ```
/// use fw_schema::info::{FieldInfo, SchemaInfo};
/// # use fw_schema::value::{FieldValue, FieldValueError};
/// # struct Account;
/// # impl fw_schema::Schema for Account {
/// #     fn schema_info() -> &'static SchemaInfo { unimplemented!() }
/// #     fn reflect_schema_info(&self) -> &'static SchemaInfo { unimplemented!() }
/// #     fn field_value(&self, _: usize) -> Option<FieldValue<'_>> { None }
/// #     fn set_field_value(&mut self, _: usize, _: FieldValue<'_>) -> Result<(), FieldValueError> { Ok(()) }
/// # }
///
/// let info = SchemaInfo::new::<Account>(&[
///     FieldInfo::new::<i32>("id").with_wire_name("CustomFieldName"),
///     FieldInfo::new::<String>("name"),
/// ]);
///
/// assert_eq!(info.type_name(), "Account");
/// assert_eq!(info.index_of("CustomFieldName"), Some(0));
/// assert_eq!(info.index_of("id"), None);
/// assert_eq!(info.field("name").map(|f| f.name()), Some("name"));
/// assert_eq!(info.wire_names().collect::<Vec<_>>(), ["CustomFieldName", "name"]);
/// ```
#[derive(Clone, Debug)]
pub struct SchemaInfo {
    ty_id: TypeId,
    type_path: &'static str,
    type_name: &'static str,
    fields: Box<[FieldInfo]>,
    wire_indices: HashMap<&'static str, usize>,
}

impl SchemaInfo {
    /// Creates the description of `T` from its fields in declaration order.
    ///
    /// # Panics
    ///
    /// Panics where [`SchemaInfo::try_new`] would return an error.
    pub fn new<T: Schema>(fields: &[FieldInfo]) -> Self {
        match Self::try_new::<T>(fields) {
            Ok(info) => info,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates the description of `T` from its fields in declaration order.
    ///
    /// Fails if a wire name is invalid (see [`is_valid_wire_name`]) or used by
    /// more than one field.
    pub fn try_new<T: Schema>(fields: &[FieldInfo]) -> Result<Self, SchemaError> {
        let type_path = type_name::<T>();

        let mut wire_indices =
            HashMap::with_capacity_and_hasher(fields.len(), FixedHashState);

        for (index, field) in fields.iter().enumerate() {
            let wire_name = field.wire_name();
            if !is_valid_wire_name(wire_name) {
                return Err(SchemaError::InvalidWireName {
                    type_path,
                    wire_name,
                });
            }
            if wire_indices.insert(wire_name, index).is_some() {
                return Err(SchemaError::DuplicateWireName {
                    type_path,
                    wire_name,
                });
            }
        }

        Ok(Self {
            ty_id: TypeId::of::<T>(),
            type_path,
            type_name: short_type_name(type_path),
            fields: fields.into(),
            wire_indices,
        })
    }

    /// Returns the field with the given wire name.
    #[inline]
    pub fn field(&self, wire_name: &str) -> Option<&FieldInfo> {
        self.index_of(wire_name).map(|index| &self.fields[index])
    }

    /// Returns the declaration index and the description of the field with
    /// the given wire name.
    #[inline]
    pub fn field_with_index(&self, wire_name: &str) -> Option<(usize, &FieldInfo)> {
        let index = self.index_of(wire_name)?;
        Some((index, &self.fields[index]))
    }

    /// Returns the declaration index of the field with the given wire name.
    #[inline]
    pub fn index_of(&self, wire_name: &str) -> Option<usize> {
        self.wire_indices.get(wire_name).copied()
    }

    /// Returns the field at the given declaration index.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldInfo> {
        self.fields.get(index)
    }

    #[inline]
    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    /// Iterates over the fields in declaration order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, FieldInfo> {
        self.fields.iter()
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Iterates over the wire names in declaration order.
    #[inline]
    pub fn wire_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.fields.iter().map(FieldInfo::wire_name)
    }

    /// The full type path, from [`core::any::type_name`].
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// The type path without its module prefix, e.g. `Account` for
    /// `my_crate::model::Account`.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.ty_id
    }

    /// Returns `true` if this describes `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }
}

impl<'a> IntoIterator for &'a SchemaInfo {
    type Item = &'a FieldInfo;
    type IntoIter = core::slice::Iter<'a, FieldInfo>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Strips the module prefix of the outermost path segment and keeps any
/// generic arguments as they are.
fn short_type_name(type_path: &'static str) -> &'static str {
    let head = match type_path.find('<') {
        Some(end) => &type_path[..end],
        None => type_path,
    };
    let start = head.rfind("::").map_or(0, |pos| pos + 2);
    &type_path[start..]
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::{SchemaInfo, short_type_name};
    use crate::info::{FieldInfo, SchemaError};
    use crate::value::{FieldValue, FieldValueError};
    use crate::Schema;

    struct Manual;

    impl Schema for Manual {
        fn schema_info() -> &'static SchemaInfo {
            unreachable!()
        }

        fn reflect_schema_info(&self) -> &'static SchemaInfo {
            unreachable!()
        }

        fn field_value(&self, _: usize) -> Option<FieldValue<'_>> {
            None
        }

        fn set_field_value(&mut self, _: usize, _: FieldValue<'_>) -> Result<(), FieldValueError> {
            Ok(())
        }
    }

    #[test]
    fn declaration_order_and_lookup() {
        let info = SchemaInfo::new::<Manual>(&[
            FieldInfo::new::<i32>("I").with_wire_name("CustomFieldName"),
            FieldInfo::new::<String>("Name"),
        ]);

        assert_eq!(info.field_len(), 2);
        assert_eq!(
            info.wire_names().collect::<Vec<_>>(),
            ["CustomFieldName", "Name"]
        );
        assert_eq!(info.index_of("CustomFieldName"), Some(0));
        assert_eq!(info.index_of("Name"), Some(1));
        assert_eq!(info.index_of("I"), None);
        assert_eq!(
            info.field_with_index("Name").map(|(i, f)| (i, f.name())),
            Some((1, "Name"))
        );
        assert_eq!(info.field_at(1).map(FieldInfo::name), Some("Name"));
        assert!(info.field_at(2).is_none());
        assert!(info.type_is::<Manual>());
        assert_eq!(info.type_name(), "Manual");
        assert!(info.type_path().ends_with("::Manual"));
        assert_eq!((&info).into_iter().count(), 2);
    }

    #[test]
    fn rejects_duplicate_wire_names() {
        let err = SchemaInfo::try_new::<Manual>(&[
            FieldInfo::new::<i32>("a").with_wire_name("b"),
            FieldInfo::new::<i32>("b"),
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            SchemaError::DuplicateWireName { wire_name: "b", .. }
        ));
    }

    #[test]
    fn rejects_invalid_wire_names() {
        for name in ["", " a", "a:b", "a,b"] {
            let err = SchemaInfo::try_new::<Manual>(&[
                FieldInfo::new::<i32>("a").with_wire_name(name)
            ])
            .unwrap_err();
            assert_eq!(
                err,
                SchemaError::InvalidWireName {
                    type_path: core::any::type_name::<Manual>(),
                    wire_name: name,
                }
            );
        }
    }

    #[test]
    #[should_panic(expected = "used by more than one field")]
    fn new_panics_on_error() {
        SchemaInfo::new::<Manual>(&[FieldInfo::new::<i32>("x"), FieldInfo::new::<u8>("x")]);
    }

    #[test]
    fn empty_schema() {
        let info = SchemaInfo::new::<Manual>(&[]);
        assert_eq!(info.field_len(), 0);
        assert!(info.field("anything").is_none());
    }

    #[test]
    fn short_names() {
        assert_eq!(short_type_name("a::b::Account"), "Account");
        assert_eq!(short_type_name("Account"), "Account");
        assert_eq!(short_type_name("a::Wrap<b::C>"), "Wrap<b::C>");
    }
}
