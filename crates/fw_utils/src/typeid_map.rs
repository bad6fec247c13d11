use core::any::TypeId;
use core::fmt;
use core::hash::{BuildHasher, Hasher};

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

/// Map from a type to its value, used to store one schema per type.
///
/// `TypeId` values are already hashes, so keys are not hashed again.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use fw_utils::TypeIdMap;
///
/// let mut schemas = TypeIdMap::new();
/// assert!(schemas.try_insert(TypeId::of::<u8>(), || "u8"));
/// assert!(!schemas.try_insert(TypeId::of::<u8>(), || "again"));
/// assert_eq!(schemas.get(&TypeId::of::<u8>()), Some(&"u8"));
/// ```
pub struct TypeIdMap<V>(HashMap<TypeId, V, TypeIdState>);

impl<V> TypeIdMap<V> {
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(TypeIdState))
    }

    /// Inserts the value built by `f` if `type_id` is absent.
    ///
    /// Returns `false`, without calling `f`, if the type is already present.
    pub fn try_insert(&mut self, type_id: TypeId, f: impl FnOnce() -> V) -> bool {
        match self.0.entry(type_id) {
            Entry::Vacant(entry) => {
                entry.insert(f());
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    #[inline]
    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.0.get(type_id)
    }

    #[inline]
    pub fn contains(&self, type_id: &TypeId) -> bool {
        self.0.contains_key(type_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Values in no particular order.
    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> {
        self.0.values()
    }
}

impl<V> Default for TypeIdMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for TypeIdMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.values()).finish()
    }
}

#[derive(Clone, Copy, Default)]
struct TypeIdState;

impl BuildHasher for TypeIdState {
    type Hasher = TypeIdHasher;

    #[inline]
    fn build_hasher(&self) -> TypeIdHasher {
        TypeIdHasher(0)
    }
}

/// Keeps the last `u64` a `TypeId` writes.
struct TypeIdHasher(u64);

impl Hasher for TypeIdHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for chunk in bytes.chunks(8) {
            let mut word = [0_u8; 8];
            word[..chunk.len()].copy_from_slice(chunk);
            self.0 = self.0.rotate_left(5) ^ u64::from_le_bytes(word);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.0 = i;
    }
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::TypeIdMap;

    struct Account;
    struct Listed;

    #[test]
    fn first_insert_wins() {
        let mut map = TypeIdMap::<&str>::default();
        assert!(map.is_empty());

        assert!(map.try_insert(TypeId::of::<Account>(), || "first"));
        assert!(!map.try_insert(TypeId::of::<Account>(), || unreachable!()));
        assert!(map.try_insert(TypeId::of::<Listed>(), || "listed"));

        assert_eq!(map.get(&TypeId::of::<Account>()), Some(&"first"));
        assert!(map.contains(&TypeId::of::<Listed>()));
        assert!(!map.contains(&TypeId::of::<u8>()));
        assert_eq!(map.len(), 2);
        assert_eq!(map.values().len(), 2);
    }
}
