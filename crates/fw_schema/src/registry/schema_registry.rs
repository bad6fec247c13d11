use core::any::TypeId;
use core::fmt;

use fw_utils::TypeIdMap;
use fw_utils::hash::{FixedHashState, HashMap, HashSet};

use crate::Schema;
use crate::info::SchemaInfo;

/// Stores the schemas of registered types and looks them up by [`TypeId`],
/// by full type path or by short type name.
///
/// A short name shared by two registered types becomes ambiguous and can no
/// longer be resolved through [`get_with_type_name`](Self::get_with_type_name).
///
/// # Examples
///
/// ```
/// use fw_schema::derive::Schema;
/// use fw_schema::registry::SchemaRegistry;
///
/// #[derive(Schema)]
/// struct Account {
///     id: i32,
/// }
///
/// let mut registry = SchemaRegistry::new();
/// assert!(registry.register::<Account>());
/// assert!(!registry.register::<Account>());
///
/// let info = registry.get_with_type_name("Account").unwrap();
/// assert_eq!(info.wire_names().collect::<Vec<_>>(), ["id"]);
/// ```
pub struct SchemaRegistry {
    schemas: TypeIdMap<&'static SchemaInfo>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    #[inline]
    pub const fn new() -> Self {
        Self {
            schemas: TypeIdMap::new(),
            type_path_to_id: HashMap::with_hasher(FixedHashState),
            type_name_to_id: HashMap::with_hasher(FixedHashState),
            ambiguous_names: HashSet::with_hasher(FixedHashState),
        }
    }

    /// Registers `T`. Returns `false` if it was already registered.
    #[inline]
    pub fn register<T: Schema>(&mut self) -> bool {
        self.register_info(T::schema_info())
    }

    /// Registers a schema directly. Returns `false` if a schema for the same
    /// type was already registered.
    pub fn register_info(&mut self, info: &'static SchemaInfo) -> bool {
        let ty_id = info.type_id();
        if !self.schemas.try_insert(ty_id, || info) {
            return false;
        }

        self.type_path_to_id.insert(info.type_path(), ty_id);

        let type_name = info.type_name();
        if self.ambiguous_names.contains(type_name) {
            return true;
        }
        if self.type_name_to_id.contains_key(type_name) {
            log::debug!("type name `{type_name}` is now ambiguous");
            self.type_name_to_id.remove(type_name);
            self.ambiguous_names.insert(type_name);
        } else {
            self.type_name_to_id.insert(type_name, ty_id);
        }

        true
    }

    /// Registers every type marked `#[schema(auto_register)]` or listed with
    /// `impl_auto_register!`.
    ///
    /// Returns `false` if automatic registration is not available, either
    /// because the `auto_register` feature is disabled or because the target
    /// platform does not run static constructors.
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        crate::cfg::auto_register! {
            if {
                let supported = crate::__macro_exports::auto_register::__register_types(self);
                if !supported {
                    log::warn!("automatic schema registration is not supported on this platform");
                }
                supported
            } else {
                false
            }
        }
    }

    #[inline]
    pub fn get(&self, ty_id: TypeId) -> Option<&'static SchemaInfo> {
        self.schemas.get(&ty_id).copied()
    }

    #[inline]
    pub fn get_type<T: Schema>(&self) -> Option<&'static SchemaInfo> {
        self.get(TypeId::of::<T>())
    }

    /// Looks a schema up by its full type path, see [`SchemaInfo::type_path`].
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&'static SchemaInfo> {
        let ty_id = self.type_path_to_id.get(type_path)?;
        self.get(*ty_id)
    }

    /// Looks a schema up by its short type name, see [`SchemaInfo::type_name`].
    ///
    /// Returns `None` for ambiguous names.
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&'static SchemaInfo> {
        let ty_id = self.type_name_to_id.get(type_name)?;
        self.get(*ty_id)
    }

    /// Returns `true` if more than one registered type has this short name.
    #[inline]
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    #[inline]
    pub fn contains(&self, ty_id: TypeId) -> bool {
        self.schemas.contains(&ty_id)
    }

    /// Iterates over the registered schemas in no particular order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &'static SchemaInfo> + '_ {
        self.schemas.values().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl Default for SchemaRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.type_path_to_id.keys())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::any::TypeId;

    use super::SchemaRegistry;
    use crate::Schema;
    use crate::derive::Schema;

    #[derive(Schema)]
    struct Account {
        id: i32,
    }

    mod other {
        use crate::derive::Schema;

        #[derive(Schema)]
        pub struct Account {
            pub name: alloc::string::String,
        }
    }

    #[derive(Schema)]
    #[schema(auto_register)]
    struct Registered {
        label: String,
    }

    #[derive(Schema)]
    struct Listed {
        count: u16,
    }

    crate::derive::impl_auto_register!(Listed);

    #[test]
    fn lookups() {
        let mut registry = SchemaRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.register::<Account>());
        assert!(!registry.register::<Account>());
        assert_eq!(registry.len(), 1);

        let info = Account::schema_info();
        assert!(registry.contains(TypeId::of::<Account>()));
        assert!(core::ptr::eq(registry.get_type::<Account>().unwrap(), info));
        assert!(core::ptr::eq(
            registry.get_with_type_path(info.type_path()).unwrap(),
            info
        ));
        assert!(core::ptr::eq(registry.get_with_type_name("Account").unwrap(), info));
        assert!(registry.get_with_type_name("Missing").is_none());
    }

    #[test]
    fn shared_short_names_become_ambiguous() {
        let mut registry = SchemaRegistry::default();
        registry.register::<Account>();
        registry.register::<other::Account>();

        assert!(registry.is_ambiguous("Account"));
        assert!(registry.get_with_type_name("Account").is_none());
        assert!(
            registry
                .get_with_type_path(other::Account::schema_info().type_path())
                .is_some()
        );
        assert_eq!(registry.iter().count(), 2);

        let names = registry.iter().map(|info| info.type_name()).collect::<Vec<_>>();
        assert_eq!(names, ["Account", "Account"]);
    }

    #[test]
    fn auto_register() {
        let mut registry = SchemaRegistry::new();
        let supported = registry.auto_register();

        if crate::cfg::auto_register!() && supported {
            assert!(registry.get_type::<Registered>().is_some());
            assert!(registry.get_type::<Listed>().is_some());
            assert!(registry.get_type::<Account>().is_none());
        } else {
            assert!(registry.is_empty());
        }

        let value = Registered {
            label: String::from("x"),
        };
        assert_eq!(value.label, "x");
        assert_eq!(Listed { count: 3 }.count, 3);
    }
}
