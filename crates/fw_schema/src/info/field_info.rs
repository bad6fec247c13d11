use core::any::{Any, TypeId, type_name};

use crate::text::{NAME_SEPARATOR, PAIR_SEPARATOR};
use crate::value::{FieldKind, FieldType};

/// Returns `true` if `name` can be read back by the decoder.
///
/// A wire name must be non-empty, must not start with whitespace (the decoder
/// trims it) and must not contain `:` or `,`.
///
/// # Examples
///
/// ```
/// use fw_schema::info::is_valid_wire_name;
///
/// assert!(is_valid_wire_name("CustomFieldName"));
/// assert!(is_valid_wire_name("with space"));
/// assert!(!is_valid_wire_name(""));
/// assert!(!is_valid_wire_name(" lead"));
/// assert!(!is_valid_wire_name("a:b"));
/// assert!(!is_valid_wire_name("a,b"));
/// ```
pub fn is_valid_wire_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(char::is_whitespace)
        && !name.contains([NAME_SEPARATOR, PAIR_SEPARATOR])
}

/// Description of one record field.
///
/// # Examples
///
/// ```
/// use fw_schema::info::FieldInfo;
/// use fw_schema::value::FieldKind;
///
/// let info = FieldInfo::new::<i32>("id").with_wire_name("CustomFieldName");
///
/// assert_eq!(info.name(), "id");
/// assert_eq!(info.wire_name(), "CustomFieldName");
/// assert_eq!(info.kind(), FieldKind::Integer);
/// assert!(info.type_is::<i32>());
/// ```
#[derive(Clone, Debug)]
pub struct FieldInfo {
    name: &'static str,
    rename: Option<&'static str>,
    kind: FieldKind,
    ty_id: TypeId,
    type_path: &'static str,
}

impl FieldInfo {
    /// Creates the description of a field named `name` of type `T`.
    pub fn new<T: FieldType>(name: &'static str) -> Self {
        Self {
            name,
            rename: None,
            kind: T::KIND,
            ty_id: TypeId::of::<T>(),
            type_path: type_name::<T>(),
        }
    }

    /// Overrides the name used on the wire.
    #[inline]
    pub const fn with_wire_name(mut self, wire_name: &'static str) -> Self {
        self.rename = Some(wire_name);
        self
    }

    /// The declared field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The name used on the wire: the override if any, else the declared name.
    #[inline]
    pub const fn wire_name(&self) -> &'static str {
        match self.rename {
            Some(name) => name,
            None => self.name,
        }
    }

    /// The wire name override, if one was attached.
    #[inline]
    pub const fn rename(&self) -> Option<&'static str> {
        self.rename
    }

    #[inline]
    pub const fn is_renamed(&self) -> bool {
        self.rename.is_some()
    }

    #[inline]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The [`TypeId`] of the field's type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// The full path of the field's type, from [`core::any::type_name`].
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Returns `true` if the field's type is `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::FieldInfo;
    use crate::value::FieldKind;

    #[test]
    fn wire_name_falls_back_to_declared_name() {
        let info = FieldInfo::new::<String>("Name");
        assert_eq!(info.wire_name(), "Name");
        assert_eq!(info.rename(), None);
        assert!(!info.is_renamed());
        assert_eq!(info.kind(), FieldKind::Text);
        assert!(info.type_is::<String>());
        assert!(!info.type_is::<&str>());
    }

    #[test]
    fn override_wins() {
        let info = FieldInfo::new::<u8>("I").with_wire_name("CustomFieldName");
        assert_eq!(info.name(), "I");
        assert_eq!(info.wire_name(), "CustomFieldName");
        assert!(info.is_renamed());
        assert_eq!(info.type_path(), "u8");
    }

    #[test]
    fn unsupported_kind() {
        assert_eq!(FieldInfo::new::<f64>("ratio").kind(), FieldKind::Unsupported);
        assert_eq!(
            FieldInfo::new::<Option<i32>>("maybe").kind(),
            FieldKind::Unsupported
        );
    }
}
